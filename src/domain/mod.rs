// ==========================================
// 投资股票核心 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑
// ==========================================

pub mod stock_price_calc_value;
pub mod types;

// 重导出核心类型
pub use stock_price_calc_value::{SpcvDeleteCondDto, StockPriceCalcValueDto};
pub use types::PeriodTypeTypes;

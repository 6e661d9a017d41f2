// ==========================================
// 投资股票核心 - 数据仓储层
// ==========================================
// 职责: 提供数据访问接口,屏蔽数据库细节
// 约束: 所有查询使用命名参数,防止 SQL 注入
// ==========================================

pub mod error;
pub mod named_param;
pub mod sql_path;
pub mod stock_price_calc_value_repo;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use named_param::{NamedParameterExecutor, SqlParameterSource, SqliteNamedParameterExecutor};
pub use sql_path::{EmbeddedSqlResolver, FileSqlResolver, SqlPath, SqlResolver};
pub use stock_price_calc_value_repo::StockPriceCalcValueRepository;

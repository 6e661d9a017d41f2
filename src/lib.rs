// ==========================================
// 投资股票核心 - 股价计算值数据访问库
// ==========================================
// 技术栈: Rust + SQLite (rusqlite)
// 定位: 数据访问层 (删除/插入股价计算值)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 配置层 - 插入默认值
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::InsertDefaults;
pub use domain::{PeriodTypeTypes, SpcvDeleteCondDto, StockPriceCalcValueDto};
pub use repository::{
    EmbeddedSqlResolver, FileSqlResolver, NamedParameterExecutor, RepositoryError,
    RepositoryResult, SqlParameterSource, SqlPath, SqlResolver, SqliteNamedParameterExecutor,
    StockPriceCalcValueRepository,
};

// ==========================================
// 常量定义
// ==========================================

// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

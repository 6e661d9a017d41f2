// ==========================================
// 投资股票核心 - 配置层
// ==========================================
// 职责: 仓储插入默认值配置
// 存储: config_kv 表
// ==========================================

pub mod insert_defaults;

pub use insert_defaults::InsertDefaults;

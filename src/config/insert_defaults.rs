// ==========================================
// 投资股票核心 - 插入默认值配置
// ==========================================
// 职责: 股价计算值插入时的区域/创建者/更新者默认值
// 存储: config_kv 表 (scope_id='global')，缺省时使用内置值
// ==========================================

use crate::db::table_exists;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

/// 默认区域ID
pub const DEFAULT_LOCALE_ID: &str = "ja";

/// 默认创建者/更新者
pub const DEFAULT_USER: &str = "TSSTS_MAIN_USER";

/// config_kv 中的配置键（值为 JSON）
pub const INSERT_DEFAULTS_KEY: &str = "stock_price_calc_value/insert_defaults";

// ==========================================
// InsertDefaults - 插入默认值
// ==========================================
// 区域与用户目前是固定占位值，后续改为枚举
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsertDefaults {
    pub locale_id: String,
    pub creator: String,
    pub updater: String,
}

impl Default for InsertDefaults {
    fn default() -> Self {
        Self {
            locale_id: DEFAULT_LOCALE_ID.to_string(),
            creator: DEFAULT_USER.to_string(),
            updater: DEFAULT_USER.to_string(),
        }
    }
}

impl InsertDefaults {
    /// 从 config_kv 读取插入默认值
    ///
    /// # 返回
    /// - 表或配置键不存在: 内置默认值
    /// - JSON 中缺失的字段: 以内置默认值补齐
    /// - Err: JSON 格式错误或数据库错误
    pub fn load(conn: &Connection) -> RepositoryResult<Self> {
        if !table_exists(conn, "config_kv")? {
            tracing::debug!("config_kv 不存在，使用内置插入默认值");
            return Ok(Self::default());
        }

        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
                params![INSERT_DEFAULTS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                RepositoryError::ConfigError(format!("{} 解析失败: {}", INSERT_DEFAULTS_KEY, e))
            }),
            None => Ok(Self::default()),
        }
    }
}

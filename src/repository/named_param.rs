// ==========================================
// 投资股票核心 - 命名参数 SQL 执行
// ==========================================
// 职责: 按参数名从数据对象取值并执行 SQL
// 约束: 所有值均通过参数绑定传入，防止 SQL 注入
// ==========================================

use crate::db::open_sqlite_connection;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::types::Value;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// SqlParameterSource - 命名参数来源
// ==========================================
/// 语句需要哪个参数就按名字取哪个，来源中多余的字段不会被绑定
pub trait SqlParameterSource {
    /// 按参数名（不含 `:` 前缀）取值，未知名称返回 None
    fn value(&self, name: &str) -> Option<Value>;
}

// ==========================================
// NamedParameterExecutor - 命名参数执行接口
// ==========================================
pub trait NamedParameterExecutor: Send + Sync {
    /// 执行更新类语句 (INSERT/UPDATE/DELETE)，返回影响行数
    fn update(&self, sql: &str, params: &dyn SqlParameterSource) -> RepositoryResult<usize>;
}

// ==========================================
// SqliteNamedParameterExecutor - SQLite 实现
// ==========================================
pub struct SqliteNamedParameterExecutor {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteNamedParameterExecutor {
    /// 打开数据库并创建执行器
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建执行器
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 共享连接（调用方可在同一连接上开启事务）
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.conn)
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

impl NamedParameterExecutor for SqliteNamedParameterExecutor {
    fn update(&self, sql: &str, params: &dyn SqlParameterSource) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(sql)?;

        // SQLite 参数下标从 1 开始，重复出现的同名参数只计一次
        for index in 1..=stmt.parameter_count() {
            let name = stmt
                .parameter_name(index)
                .map(str::to_owned)
                .ok_or_else(|| RepositoryError::ParameterBinding {
                    name: format!("?{}", index),
                    message: "不支持位置参数".to_string(),
                })?;

            let key = name.trim_start_matches([':', '@', '$']);
            let value = params
                .value(key)
                .ok_or_else(|| RepositoryError::ParameterBinding {
                    name: key.to_string(),
                    message: "参数来源中没有该字段".to_string(),
                })?;

            stmt.raw_bind_parameter(index, value)?;
        }

        let affected = stmt.raw_execute()?;
        Ok(affected)
    }
}

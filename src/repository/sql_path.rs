// ==========================================
// 投资股票核心 - SQL 资源定位
// ==========================================
// 职责: 将 (所属组件, 文件名) 解析为可执行的 SQL 文本
// 约束: 解析是确定性的，不产生副作用
// ==========================================

use crate::repository::error::{RepositoryError, RepositoryResult};
use anyhow::Context;
use std::fmt;
use std::path::{Path, PathBuf};

// ==========================================
// SqlPath - SQL 资源路径
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SqlPath {
    pub owner: &'static str,     // 所属组件
    pub file_name: &'static str, // SQL 文件名
}

impl SqlPath {
    pub const fn new(owner: &'static str, file_name: &'static str) -> Self {
        Self { owner, file_name }
    }

    /// 相对于 SQL 根目录的路径: `<owner>/<file_name>`
    pub fn relative_path(&self) -> PathBuf {
        Path::new(self.owner).join(self.file_name)
    }

    fn not_found(&self) -> RepositoryError {
        RepositoryError::SqlResourceNotFound {
            owner: self.owner.to_string(),
            file_name: self.file_name.to_string(),
        }
    }
}

impl fmt::Display for SqlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.file_name)
    }
}

// ==========================================
// SqlResolver - SQL 文本解析接口
// ==========================================
pub trait SqlResolver: Send + Sync {
    /// 解析 SQL 资源为 SQL 文本
    fn resolve(&self, path: &SqlPath) -> RepositoryResult<String>;
}

// ==========================================
// EmbeddedSqlResolver - 编译期内嵌的 SQL
// ==========================================

/// 内嵌 SQL 清单: (owner, file_name, sql)
const EMBEDDED_SQL: &[(&str, &str, &str)] = &[
    (
        "stock_price_calc_value_repo",
        "delete_by_sb_id_and_period_type.sql",
        include_str!("sql/stock_price_calc_value_repo/delete_by_sb_id_and_period_type.sql"),
    ),
    (
        "stock_price_calc_value_repo",
        "insert.sql",
        include_str!("sql/stock_price_calc_value_repo/insert.sql"),
    ),
];

/// 从编译进库的 SQL 清单中解析
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSqlResolver;

impl SqlResolver for EmbeddedSqlResolver {
    fn resolve(&self, path: &SqlPath) -> RepositoryResult<String> {
        EMBEDDED_SQL
            .iter()
            .find(|(owner, file_name, _)| *owner == path.owner && *file_name == path.file_name)
            .map(|(_, _, sql)| sql.to_string())
            .ok_or_else(|| path.not_found())
    }
}

// ==========================================
// FileSqlResolver - 从磁盘目录读取 SQL
// ==========================================
/// 目录结构: `<root>/<owner>/<file_name>`
#[derive(Debug, Clone)]
pub struct FileSqlResolver {
    root: PathBuf,
}

impl FileSqlResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SqlResolver for FileSqlResolver {
    fn resolve(&self, path: &SqlPath) -> RepositoryResult<String> {
        let file = self.root.join(path.relative_path());
        if !file.is_file() {
            return Err(path.not_found());
        }

        let sql = std::fs::read_to_string(&file)
            .with_context(|| format!("读取SQL文件失败: {}", file.display()))?;

        if sql.trim().is_empty() {
            return Err(anyhow::anyhow!("SQL文件为空: {}", file.display()).into());
        }

        Ok(sql)
    }
}

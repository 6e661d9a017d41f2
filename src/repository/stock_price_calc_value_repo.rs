// ==========================================
// 投资股票核心 - 股价计算值数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑（何时删除/插入由服务层决定）
// 红线: 不做事务边界管理，原子性由调用方事务保证
// ==========================================

use crate::config::InsertDefaults;
use crate::domain::stock_price_calc_value::{SpcvDeleteCondDto, StockPriceCalcValueDto};
use crate::domain::types::PeriodTypeTypes;
use crate::repository::error::RepositoryResult;
use crate::repository::named_param::{
    NamedParameterExecutor, SqlParameterSource, SqliteNamedParameterExecutor,
};
use crate::repository::sql_path::{EmbeddedSqlResolver, SqlPath, SqlResolver};
use chrono::{Datelike, Local, NaiveDate};
use rusqlite::types::Value;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// 所属组件标识
const SQL_OWNER: &str = "stock_price_calc_value_repo";

/// 删除股价品牌ID与期间类型对应数据的 SQL
pub const DELETE_BY_SB_ID_AND_PERIOD_TYPE_SQL_PATH: SqlPath =
    SqlPath::new(SQL_OWNER, "delete_by_sb_id_and_period_type.sql");

/// 插入股价计算值的 SQL
pub const INSERT_SQL_PATH: SqlPath = SqlPath::new(SQL_OWNER, "insert.sql");

/// 日期绑定格式
const DATE_FORMAT: &str = "%Y-%m-%d";

/// 存储层最小日期（有效期下限）
const STORE_MIN_DATE: &str = "0000-01-01";

/// 存储层最大日期（有效期上限）
const STORE_MAX_DATE: &str = "9999-12-31";

/// 时间戳绑定格式
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

// ==========================================
// StockPriceCalcValueRepository - 股价计算值仓储
// ==========================================
/// 职责: stock_price_calc_value 表的删除与插入
///
/// 不持有可变状态，可在多个调用方之间共享
pub struct StockPriceCalcValueRepository {
    executor: Arc<dyn NamedParameterExecutor>,
    resolver: Arc<dyn SqlResolver>,
    defaults: InsertDefaults,
}

impl StockPriceCalcValueRepository {
    /// 创建仓储（使用内置插入默认值）
    pub fn new(executor: Arc<dyn NamedParameterExecutor>, resolver: Arc<dyn SqlResolver>) -> Self {
        Self::with_defaults(executor, resolver, InsertDefaults::default())
    }

    /// 创建仓储并注入插入默认值
    pub fn with_defaults(
        executor: Arc<dyn NamedParameterExecutor>,
        resolver: Arc<dyn SqlResolver>,
        defaults: InsertDefaults,
    ) -> Self {
        Self {
            executor,
            resolver,
            defaults,
        }
    }

    /// 从已有连接创建仓储（内嵌 SQL + 内置默认值）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self::new(
            Arc::new(SqliteNamedParameterExecutor::from_connection(conn)),
            Arc::new(EmbeddedSqlResolver),
        )
    }

    /// 当前使用的插入默认值
    pub fn defaults(&self) -> &InsertDefaults {
        &self.defaults
    }

    /// 删除股价品牌ID与期间类型对应的数据
    ///
    /// # 参数
    /// - `sb_id`: 股价品牌ID
    /// - `period_type`: 期间类型
    ///
    /// # 返回
    /// - Ok(rows): 删除行数，无匹配数据时为 0
    /// - Err: SQL 解析或执行失败
    pub fn delete_by_sb_id_and_period_type(
        &self,
        sb_id: i64,
        period_type: PeriodTypeTypes,
    ) -> RepositoryResult<usize> {
        let cond = SpcvDeleteCondDto::new(sb_id, period_type);
        let sql = self.resolver.resolve(&DELETE_BY_SB_ID_AND_PERIOD_TYPE_SQL_PATH)?;

        let deleted = self.executor.update(&sql, &cond).map_err(|e| {
            tracing::warn!(
                sb_id,
                period_type = %period_type,
                "股价计算值删除失败: {}",
                e
            );
            e
        })?;

        tracing::debug!(
            sql = %DELETE_BY_SB_ID_AND_PERIOD_TYPE_SQL_PATH,
            sb_id,
            period_type = %period_type,
            deleted,
            "股价计算值已删除"
        );
        Ok(deleted)
    }

    /// 插入股价计算值
    ///
    /// 插入前覆盖以下字段（不论调用方是否已设置）:
    /// - 有效期: (NaiveDate::MIN, NaiveDate::MAX)，存储为 (0000-01-01, 9999-12-31)
    /// - 区域/创建者/更新者: 注入的默认值
    /// - 创建/更新时间: 各自读取一次当前时间
    /// - 名称/备注: 空字符串
    ///
    /// # 返回
    /// - Ok(1): 插入成功
    /// - Err: SQL 解析、参数绑定或执行失败（含唯一约束违反）
    pub fn insert(&self, dto: &mut StockPriceCalcValueDto) -> RepositoryResult<usize> {
        dto.start_date = NaiveDate::MIN;
        dto.end_date = NaiveDate::MAX;
        dto.locale_id = self.defaults.locale_id.clone();
        dto.creator = self.defaults.creator.clone();
        dto.created_date = Local::now().naive_local();
        dto.updater = self.defaults.updater.clone();
        dto.update_date = Local::now().naive_local();
        dto.note = String::new();
        dto.name = String::new();

        let sql = self.resolver.resolve(&INSERT_SQL_PATH)?;

        let inserted = self.executor.update(&sql, &*dto).map_err(|e| {
            tracing::warn!(
                stock_brand_id = dto.stock_brand_id,
                period_type_id = dto.period_type_id,
                "股价计算值插入失败: {}",
                e
            );
            e
        })?;

        tracing::debug!(
            sql = %INSERT_SQL_PATH,
            stock_brand_id = dto.stock_brand_id,
            period_type_id = dto.period_type_id,
            inserted,
            "股价计算值已插入"
        );
        Ok(inserted)
    }
}

// ==========================================
// 参数来源映射
// ==========================================

impl SqlParameterSource for SpcvDeleteCondDto {
    fn value(&self, name: &str) -> Option<Value> {
        match name {
            "stock_brand_id" => Some(Value::Integer(self.stock_brand_id)),
            "period_type_id" => Some(Value::Integer(self.period_type_id)),
            _ => None,
        }
    }
}

impl SqlParameterSource for StockPriceCalcValueDto {
    fn value(&self, name: &str) -> Option<Value> {
        let value = match name {
            "id" => self.id.map_or(Value::Null, Value::Integer),
            "stock_brand_id" => Value::Integer(self.stock_brand_id),
            "period_type_id" => Value::Integer(self.period_type_id),
            "calc_value_type_id" => Value::Integer(self.calc_value_type_id),
            "target_date" => store_date(self.target_date),
            "calc_value" => Value::Real(self.calc_value),
            "start_date" => store_date(self.start_date),
            "end_date" => store_date(self.end_date),
            "locale_id" => Value::Text(self.locale_id.clone()),
            "name" => Value::Text(self.name.clone()),
            "note" => Value::Text(self.note.clone()),
            "creator" => Value::Text(self.creator.clone()),
            "created_date" => Value::Text(self.created_date.format(DATETIME_FORMAT).to_string()),
            "updater" => Value::Text(self.updater.clone()),
            "update_date" => Value::Text(self.update_date.format(DATETIME_FORMAT).to_string()),
            _ => return None,
        };
        Some(value)
    }
}

/// 日期转为存储文本
///
/// 只存四位年份，使 TEXT 字典序与日期顺序一致；超出范围的日期收敛到存储层上下限
fn store_date(d: NaiveDate) -> Value {
    let text = match d.year() {
        y if y < 0 => STORE_MIN_DATE.to_string(),
        y if y > 9999 => STORE_MAX_DATE.to_string(),
        _ => d.format(DATE_FORMAT).to_string(),
    };
    Value::Text(text)
}

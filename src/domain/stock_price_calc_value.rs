// ==========================================
// 投资股票核心 - 股价计算值领域模型
// ==========================================
// 对齐: stock_price_calc_value 表
// ==========================================

use crate::domain::types::PeriodTypeTypes;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// StockPriceCalcValueDto - 股价计算值
// ==========================================
// 计算值由调用方填充；有效期、区域、创建/更新信息由仓储在插入前统一设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPriceCalcValueDto {
    // ===== 主键 =====
    pub id: Option<i64>, // 由数据库分配，插入时不绑定

    // ===== 业务键 =====
    pub stock_brand_id: i64,     // 股票品牌ID
    pub period_type_id: i64,     // 期间类型代码
    pub calc_value_type_id: i64, // 计算值类型ID
    pub target_date: NaiveDate,  // 对象日期

    // ===== 计算值 =====
    pub calc_value: f64,

    // ===== 有效期 =====
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    // ===== 通用字段 =====
    pub locale_id: String,
    pub name: String,
    pub note: String,

    // ===== 审计字段 =====
    pub creator: String,
    pub created_date: NaiveDateTime,
    pub updater: String,
    pub update_date: NaiveDateTime,
}

impl StockPriceCalcValueDto {
    /// 创建股价计算值
    ///
    /// 审计/默认字段先填入占位值，插入时由仓储覆盖
    pub fn new(
        stock_brand_id: i64,
        period_type: PeriodTypeTypes,
        calc_value_type_id: i64,
        target_date: NaiveDate,
        calc_value: f64,
    ) -> Self {
        Self {
            id: None,
            stock_brand_id,
            period_type_id: period_type.get(),
            calc_value_type_id,
            target_date,
            calc_value,
            start_date: target_date,
            end_date: target_date,
            locale_id: String::new(),
            name: String::new(),
            note: String::new(),
            creator: String::new(),
            created_date: NaiveDateTime::MIN,
            updater: String::new(),
            update_date: NaiveDateTime::MIN,
        }
    }
}

// ==========================================
// SpcvDeleteCondDto - 股价计算值删除条件
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpcvDeleteCondDto {
    pub stock_brand_id: i64,
    pub period_type_id: i64,
}

impl SpcvDeleteCondDto {
    pub fn new(stock_brand_id: i64, period_type: PeriodTypeTypes) -> Self {
        Self {
            stock_brand_id,
            period_type_id: period_type.get(),
        }
    }
}

// ==========================================
// 投资股票核心 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 期间类型 (Period Type)
// ==========================================
// 数据库中以整数代码存储 (period_type_id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodTypeTypes {
    None,    // 未指定
    Daily,   // 日
    Weekly,  // 周
    Monthly, // 月
}

impl PeriodTypeTypes {
    /// 全部取值
    pub const ALL: [PeriodTypeTypes; 4] = [
        PeriodTypeTypes::None,
        PeriodTypeTypes::Daily,
        PeriodTypeTypes::Weekly,
        PeriodTypeTypes::Monthly,
    ];

    /// 获取期间类型代码
    pub fn get(self) -> i64 {
        match self {
            PeriodTypeTypes::None => 0,
            PeriodTypeTypes::Daily => 1,
            PeriodTypeTypes::Weekly => 2,
            PeriodTypeTypes::Monthly => 3,
        }
    }

    /// 从代码解析期间类型
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.get() == code)
    }
}

impl fmt::Display for PeriodTypeTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodTypeTypes::None => write!(f, "NONE"),
            PeriodTypeTypes::Daily => write!(f, "DAILY"),
            PeriodTypeTypes::Weekly => write!(f, "WEEKLY"),
            PeriodTypeTypes::Monthly => write!(f, "MONTHLY"),
        }
    }
}

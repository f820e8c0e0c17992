//! 日期简写解析为闭区间时间范围
//!
//! 支持（不区分大小写）：`today`、`yesterday`、`YYYY`、`YYYY-MM`、`YYYY-MM-DD`。
//! 结束时刻为下一个日历单位起点减一秒，跨年、跨月与月末均按日历计算。
//!
use crate::error::{DomainError, DomainResult};
use chrono::{DateTime, Months, NaiveDate, NaiveTime, TimeDelta, Utc};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::warn;

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]{4})$").unwrap());
static YEAR_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{1,2})$").unwrap());
static YEAR_MONTH_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").unwrap());

/// 闭区间 `[start, end]`（UTC，秒精度）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// 覆盖 `[first, next)` 两个日期之间的完整天数
    fn between(first: NaiveDate, next: NaiveDate) -> Self {
        let start = first.and_time(NaiveTime::MIN).and_utc();
        let end = next.and_time(NaiveTime::MIN).and_utc() - TimeDelta::seconds(1);
        Self { start, end }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// 以当前 UTC 时间为基准解析
pub fn parse_time_range(value: &str) -> DomainResult<TimeRange> {
    parse_time_range_at(value, Utc::now())
}

/// 以给定时刻为 "today"/"yesterday" 的基准解析
pub fn parse_time_range_at(value: &str, now: DateTime<Utc>) -> DomainResult<TimeRange> {
    let value = value.to_lowercase();
    if value.is_empty() {
        warn!("empty date format");
        return Err(DomainError::validation("Empty date format."));
    }

    let invalid = || {
        warn!(value = %value, "invalid date format");
        DomainError::validation(format!("Invalid date format: '{value}'."))
    };

    let (first, next) = match value.as_str() {
        "today" => {
            let today = now.date_naive();
            (today, today.succ_opt().ok_or_else(invalid)?)
        }
        "yesterday" => {
            let today = now.date_naive();
            (today.pred_opt().ok_or_else(invalid)?, today)
        }
        _ => {
            if let Some(caps) = YEAR.captures(&value) {
                let year: i32 = capture(&caps, 1).ok_or_else(invalid)?;
                let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
                let next = NaiveDate::from_ymd_opt(year + 1, 1, 1).ok_or_else(invalid)?;
                (first, next)
            } else if let Some(caps) = YEAR_MONTH.captures(&value) {
                let year: i32 = capture(&caps, 1).ok_or_else(invalid)?;
                let month: u32 = capture(&caps, 2).ok_or_else(invalid)?;
                let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
                let next = first
                    .checked_add_months(Months::new(1))
                    .ok_or_else(invalid)?;
                (first, next)
            } else if let Some(caps) = YEAR_MONTH_DAY.captures(&value) {
                let year: i32 = capture(&caps, 1).ok_or_else(invalid)?;
                let month: u32 = capture(&caps, 2).ok_or_else(invalid)?;
                let day: u32 = capture(&caps, 3).ok_or_else(invalid)?;
                let first = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
                (first, first.succ_opt().ok_or_else(invalid)?)
            } else {
                return Err(invalid());
            }
        }
    };

    Ok(TimeRange::between(first, next))
}

fn capture<T: FromStr>(caps: &Captures<'_>, index: usize) -> Option<T> {
    caps.get(index)?.as_str().parse().ok()
}

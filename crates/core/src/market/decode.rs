//! # 记录解码
//!
//! 将数据源给出的原始记录集中转换为强类型 [`Candle`]。
//! 分析逻辑只接触解码后的数据，任何无法解析的字段都在此处以
//! `MalformedInput` 失败，而不会以 NaN 的形式流入比较运算。

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use super::entity::{Candle, CandleRecord, RawField};
use super::error::CandleError;

// 无时区的时间格式，一律按 UTC 解释
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d-%m-%Y %H:%M:%S"];

/// # Summary
/// 解码整条 K 线序列。
///
/// # Logic
/// 1. 按到达顺序逐条解码，不排序。
/// 2. 任一记录失败即整体失败，不返回部分结果。
///
/// # Arguments
/// * `records`: 原始记录序列。
///
/// # Returns
/// 成功返回解码后的 K 线列表，失败返回 `CandleError::MalformedInput`。
pub fn decode_candles(records: &[CandleRecord]) -> Result<Vec<Candle>, CandleError> {
    records
        .iter()
        .enumerate()
        .map(|(row, record)| decode_candle(row, record))
        .collect()
}

/// # Summary
/// 解码单条记录。
///
/// # Arguments
/// * `row`: 记录在序列中的位置，用于错误定位。
/// * `record`: 原始记录。
pub fn decode_candle(row: usize, record: &CandleRecord) -> Result<Candle, CandleError> {
    Ok(Candle {
        time: parse_time(row, &record.last_trade_time)?,
        open: parse_price(row, "Open", &record.open)?,
        high: parse_price(row, "High", &record.high)?,
        low: parse_price(row, "Low", &record.low)?,
        close: parse_price(row, "Close", &record.close)?,
        traded_qty: parse_qty(row, &record.traded_qty)?,
        last_trade_time: record.last_trade_time.as_text(),
        open_raw: record.open.clone(),
        close_raw: record.close.clone(),
    })
}

fn malformed(row: usize, field: &str, raw: &RawField) -> CandleError {
    CandleError::MalformedInput {
        row: Some(row),
        field: field.to_string(),
        value: raw.as_text(),
    }
}

fn parse_price(row: usize, field: &str, raw: &RawField) -> Result<f64, CandleError> {
    let value = match raw {
        RawField::Text(s) => s.trim().parse::<f64>().ok(),
        RawField::Number(n) => n.as_f64(),
    };
    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| malformed(row, field, raw))
}

fn parse_qty(row: usize, raw: &RawField) -> Result<u64, CandleError> {
    let value = match raw {
        RawField::Text(s) => s.trim().parse::<u64>().ok(),
        RawField::Number(n) => n.as_u64(),
    };
    value.ok_or_else(|| malformed(row, "TradedQty", raw))
}

fn parse_time(row: usize, raw: &RawField) -> Result<DateTime<Utc>, CandleError> {
    let parsed = match raw {
        RawField::Number(n) => n.as_i64().and_then(from_epoch_millis),
        RawField::Text(s) => parse_time_text(s.trim()),
    };
    parsed.ok_or_else(|| malformed(row, "LastTradeTime", raw))
}

fn parse_time_text(s: &str) -> Option<DateTime<Utc>> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse::<i64>().ok().and_then(from_epoch_millis);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn from_epoch_millis(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}

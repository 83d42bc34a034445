//! # 开盘区间突破 (ORB)
//!
//! 以开盘窗口内 K 线的最高价/最低价构成区间，然后从序列开头扫描，
//! 找出第一根收盘价越出区间、或时间不早于窗口末根的 K 线。

use candlekit_core::market::entity::{Breakout, Candle, OpeningRange};
use candlekit_core::market::error::CandleError;
use tracing::{debug, warn};

use crate::bars_in;

/// # Summary
/// 计算开盘区间。
///
/// # Logic
/// 1. 取序列前 `window_size` 根；序列不足时使用全部已有 K 线。
/// 2. 区间上沿为窗口内 `high` 的最大值，下沿为 `low` 的最小值。
///
/// # Arguments
/// * `candles`: 按时间升序的 K 线序列。
/// * `window_size`: 窗口根数。
///
/// # Returns
/// 成功返回开盘区间，窗口为空时返回 `CandleError::InsufficientData`。
pub fn opening_range(candles: &[Candle], window_size: usize) -> Result<OpeningRange, CandleError> {
    let window = &candles[..window_size.min(candles.len())];
    if window.is_empty() {
        return Err(CandleError::InsufficientData(format!(
            "opening range is empty (window of {} bars over {} candles)",
            window_size,
            candles.len()
        )));
    }

    let range = window.iter().fold(
        OpeningRange {
            high: f64::NEG_INFINITY,
            low: f64::INFINITY,
        },
        |acc, c| OpeningRange {
            high: acc.high.max(c.high),
            low: acc.low.min(c.low),
        },
    );
    Ok(range)
}

/// # Summary
/// 查找首根开盘区间突破 K 线。
///
/// # Logic
/// 1. `window_minutes / 5` 向下取整得到窗口根数。
/// 2. 计算开盘区间；窗口超过序列长度时退化为全部 K 线组成的区间。
/// 3. 从序列第一根开始（而非窗口之后）按顺序扫描，命中以下任一条件即停止：
///    - 收盘价高于区间上沿；
///    - 收盘价低于区间下沿；
///    - 时间不早于窗口末根的时间。
/// 4. 无命中时返回 `Breakout::NotFound`。
///
/// # Arguments
/// * `candles`: 按时间升序的 K 线序列。
/// * `window_minutes`: 开盘窗口长度（分钟），必须为正。
///
/// # Returns
/// 成功返回检测结果；参数非法返回 `InvalidArgument`，窗口为空返回 `InsufficientData`。
pub fn find_breakout(candles: &[Candle], window_minutes: i64) -> Result<Breakout, CandleError> {
    let window_size = bars_in(window_minutes, "window minutes")?;
    if window_size > candles.len() {
        warn!(
            "Opening window of {} bars exceeds {} available candles, using a partial range",
            window_size,
            candles.len()
        );
    }

    let range = opening_range(candles, window_size)?;
    let window_end = window_size.min(candles.len()) - 1;
    let boundary = candles[window_end].time;
    debug!(
        "Opening range over {} bars: high={}, low={}, boundary={}",
        window_end + 1,
        range.high,
        range.low,
        boundary
    );

    let hit = candles
        .iter()
        .enumerate()
        .find(|(_, c)| c.close > range.high || c.close < range.low || c.time >= boundary);

    Ok(match hit {
        Some((index, c)) => Breakout::Found {
            index,
            time: c.time,
            last_trade_time: c.last_trade_time.clone(),
        },
        None => Breakout::NotFound,
    })
}

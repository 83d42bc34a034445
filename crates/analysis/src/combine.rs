//! # K 线合成
//!
//! 将连续的 5 分钟 K 线按固定根数切分，每组归并为一根大周期 K 线。

use candlekit_core::market::entity::{Candle, CombinedCandle};
use candlekit_core::market::error::CandleError;
use tracing::{debug, warn};

use crate::bars_in;

/// # Summary
/// 按 `interval_minutes` 合成 K 线。
///
/// # Logic
/// 1. `interval_minutes / 5` 向下取整得到每组根数。
/// 2. 每组根数为 0（周期小于 5 分钟）时返回空序列，不视为错误。
/// 3. 按顺序切分为互不重叠的分组，末组不足时保留。
/// 4. 每组输出：首根开盘价、末根收盘价（均保持数据源原样）、组内最高/最低价、
///    成交量之和、末根时间标签。
///
/// # Arguments
/// * `candles`: 按时间升序的 K 线序列。
/// * `interval_minutes`: 目标周期（分钟），必须为正。
///
/// # Returns
/// 成功返回按分组顺序排列的合成 K 线，参数非法返回 `InvalidArgument`。
pub fn combine(candles: &[Candle], interval_minutes: i64) -> Result<Vec<CombinedCandle>, CandleError> {
    let group_size = bars_in(interval_minutes, "interval minutes")?;
    if group_size == 0 {
        warn!(
            "Interval of {} minutes is shorter than one bar, no candles combined",
            interval_minutes
        );
        return Ok(Vec::new());
    }

    let combined: Vec<CombinedCandle> = candles
        .chunks(group_size)
        .enumerate()
        .filter_map(|(id, group)| combine_group(id, group))
        .collect();

    debug!(
        "Combined {} candles into {} groups of up to {}",
        candles.len(),
        combined.len(),
        group_size
    );
    Ok(combined)
}

/// # Summary
/// 归并单个分组，空分组返回 None。
fn combine_group(id: usize, group: &[Candle]) -> Option<CombinedCandle> {
    let first = group.first()?;
    let last = group.last()?;

    let (high, low, traded_qty) = group.iter().fold(
        (f64::NEG_INFINITY, f64::INFINITY, 0u64),
        |(high, low, qty), c| (high.max(c.high), low.min(c.low), qty.saturating_add(c.traded_qty)),
    );

    Some(CombinedCandle {
        id,
        open: first.open_raw.clone(),
        high,
        low,
        close: last.close_raw.clone(),
        traded_qty,
        last_trade_time: last.last_trade_time.clone(),
        quotation_lot: CombinedCandle::QUOTATION_LOT,
        open_interest: CombinedCandle::OPEN_INTEREST,
    })
}

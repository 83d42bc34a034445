//! # `candlekit-analysis` - K 线分析算法
//!
//! 两个纯函数，均作用于内存中的有序 K 线序列：
//! - [`orb::find_breakout`]: 开盘区间突破 (ORB) 检测。
//! - [`combine::combine`]: 将 5 分钟 K 线按固定根数合成为大周期 K 线。
//!
//! 每次调用互相独立，不持有任何跨调用状态，可在多个请求间并发执行。

pub mod combine;
pub mod orb;

use candlekit_core::common::BAR_MINUTES;
use candlekit_core::market::error::CandleError;

/// # Summary
/// 将分钟数换算为原始 K 线根数。
///
/// # Logic
/// 1. 拒绝非正数。
/// 2. 按 5 分钟整除向下取整，非整数倍时截断而非四舍五入。
///
/// # Arguments
/// * `minutes`: 调用方给出的分钟数。
/// * `name`: 参数名，用于错误信息。
///
/// # Returns
/// 成功返回根数（可能为 0），参数非法时返回 `CandleError::InvalidArgument`。
pub(crate) fn bars_in(minutes: i64, name: &str) -> Result<usize, CandleError> {
    if minutes <= 0 {
        return Err(CandleError::InvalidArgument(format!(
            "{} must be a positive integer, got {}",
            name, minutes
        )));
    }
    usize::try_from(minutes / BAR_MINUTES)
        .map_err(|e| CandleError::InvalidArgument(format!("{} out of range: {}", name, e)))
}

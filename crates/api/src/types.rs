//! # DTO (Data Transfer Object) 层
//!
//! 将内部领域模型转化为面向调用方 JSON 输出的轻量结构体。
//! 所有 DTO 必须派生 `utoipa::ToSchema` 以自动进入 Swagger 文档。
//! 字段命名沿用既有下游消费方的格式。

use candlekit_core::market::entity::{Breakout, CombinedCandle, RawField};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

// ============================================================
//  分析结果 DTO
// ============================================================

/// 无突破时的提示信息
pub const NO_BREAKOUT_MESSAGE: &str = "No Opening Range Breakout found within the specified minutes.";

/// 开盘区间突破结果 DTO
///
/// 找到突破时只含 `ORBCandleGeneratedAt`，未找到时只含 `message`。
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrbResponse {
    /// 突破 K 线的时间标签 (原样回显数据源的 LastTradeTime)
    #[serde(
        rename = "ORBCandleGeneratedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = "2024-01-02 09:25:00")]
    pub orb_candle_generated_at: Option<String>,
    /// 未找到突破时的说明
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 合成 K 线 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CombinedCandleResponse {
    /// 分组序号
    #[schema(example = 0)]
    pub id: usize,
    /// 开盘价 (数据源原样，字符串或数值)
    #[schema(value_type = String, example = "18105.30")]
    pub open: RawField,
    /// 最高价
    #[schema(example = 103.0)]
    pub high: f64,
    /// 最低价
    #[schema(example = 99.0)]
    pub low: f64,
    /// 收盘价 (数据源原样，字符串或数值)
    #[schema(value_type = String, example = "18127.90")]
    pub close: RawField,
    /// 成交量
    #[schema(example = 300)]
    pub traded_qty: u64,
    /// 组内末根的时间标签
    #[schema(example = "2024-01-02 09:20:00")]
    pub last_trade_time: String,
    /// 固定为 1
    pub quotation_lot: u32,
    /// 固定为 0
    pub open_interest: u64,
}

// ============================================================
//  通用响应 DTO
// ============================================================

/// 构建失败响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 固定为 false
    pub success: bool,
    /// 错误描述信息
    pub error: String,
}

impl ApiErrorResponse {
    /// 从错误信息构建
    pub fn from_msg(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}

// ============================================================
//  路径参数解析
// ============================================================

/// # Summary
/// 将路径参数解析为正整数分钟数。
///
/// # Arguments
/// * `raw` - 原始路径片段
/// * `name` - 参数名，用于错误信息
///
/// # Returns
/// 成功返回分钟数，非整数或非正数返回 `ApiError::BadRequest`。
pub fn parse_minutes(raw: &str, name: &str) -> Result<i64, ApiError> {
    match raw.trim().parse::<i64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ApiError::BadRequest(format!(
            "Invalid input. Please provide a positive integer for {}.",
            name
        ))),
    }
}

// ============================================================
//  领域模型 → DTO 惯用转换 (impl From<T>)
// ============================================================

impl From<Breakout> for OrbResponse {
    fn from(b: Breakout) -> Self {
        match b {
            Breakout::Found {
                last_trade_time, ..
            } => Self {
                orb_candle_generated_at: Some(last_trade_time),
                message: None,
            },
            Breakout::NotFound => Self {
                orb_candle_generated_at: None,
                message: Some(NO_BREAKOUT_MESSAGE.to_string()),
            },
        }
    }
}

impl From<CombinedCandle> for CombinedCandleResponse {
    fn from(c: CombinedCandle) -> Self {
        Self {
            id: c.id,
            open: c.open,
            high: c.high,
            low: c.low,
            close: c.close,
            traded_qty: c.traded_qty,
            last_trade_time: c.last_trade_time,
            quotation_lot: c.quotation_lot,
            open_interest: c.open_interest,
        }
    }
}

//! # K 线分析路由控制器
//!
//! 每次请求都从供给器读取一份新的 K 线快照，计算在请求内完成，
//! 请求之间不共享任何可变状态。

use axum::Json;
use axum::extract::{Path, State};
use candlekit_analysis::{combine, orb};

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{CombinedCandleResponse, OrbResponse, parse_minutes};

/// 查找首根开盘区间突破 K 线
///
/// 以前 `minutes` 分钟的 K 线构成开盘区间，返回第一根突破区间的 K 线时间。
/// 未找到突破时仍返回 200，并携带说明信息。
#[utoipa::path(
    get,
    path = "/findORB/{minutes}",
    tag = "分析 (Analysis)",
    params(
        ("minutes" = String, Path, description = "开盘窗口长度 (分钟，正整数)")
    ),
    responses(
        (status = 200, description = "突破检测结果", body = OrbResponse),
        (status = 400, description = "参数不合法"),
        (status = 500, description = "数据不可用或无法解析")
    )
)]
pub async fn find_orb(
    State(state): State<AppState>,
    Path(minutes): Path<String>,
) -> Result<Json<OrbResponse>, ApiError> {
    let minutes = parse_minutes(&minutes, "minutes")?;
    let candles = state.supplier.get_candles(&state.stock).await?;

    let breakout = orb::find_breakout(&candles, minutes)?;
    tracing::debug!("findORB({}) over {} candles: {:?}", minutes, candles.len(), breakout);

    Ok(Json(breakout.into()))
}

/// 生成合成 K 线
///
/// 将 5 分钟 K 线按 `interval` 分钟切分合成，末组不足时保留。
/// `interval` 小于 5 时返回空数组。
#[utoipa::path(
    get,
    path = "/generateCombinedCandles/{interval}",
    tag = "分析 (Analysis)",
    params(
        ("interval" = String, Path, description = "目标周期 (分钟，正整数)")
    ),
    responses(
        (status = 200, description = "合成后的 K 线列表", body = Vec<CombinedCandleResponse>),
        (status = 400, description = "参数不合法"),
        (status = 500, description = "数据不可用或无法解析")
    )
)]
pub async fn generate_combined_candles(
    State(state): State<AppState>,
    Path(interval): Path<String>,
) -> Result<Json<Vec<CombinedCandleResponse>>, ApiError> {
    let interval = parse_minutes(&interval, "interval")?;
    let candles = state.supplier.get_candles(&state.stock).await?;

    let combined = combine::combine(&candles, interval)?;
    Ok(Json(combined.into_iter().map(Into::into).collect()))
}

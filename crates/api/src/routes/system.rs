//! # 系统路由控制器
//!
//! 存活探测与原始价格文档透传。

use axum::Json;
use axum::extract::State;
use candlekit_core::market::entity::PriceDocument;

use crate::error::ApiError;
use crate::server::AppState;

/// 存活探测横幅
pub const BANNER: &str = "Stock Analysis API is running!";

/// 服务存活探测
#[utoipa::path(
    get,
    path = "/",
    tag = "系统 (System)",
    responses(
        (status = 200, description = "服务正在运行", body = String, content_type = "text/plain")
    )
)]
pub async fn root() -> &'static str {
    BANNER
}

/// 读取原始价格文档
///
/// 原样返回数据源中的价格文档，不做解码。
#[utoipa::path(
    get,
    path = "/readJson",
    tag = "系统 (System)",
    responses(
        (status = 200, description = "原始价格文档"),
        (status = 500, description = "数据源不可用")
    )
)]
pub async fn read_json(State(state): State<AppState>) -> Result<Json<PriceDocument>, ApiError> {
    let document = state.supplier.fetch_document(&state.stock).await?;
    Ok(Json(document))
}

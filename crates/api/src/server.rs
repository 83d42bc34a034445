//! # API 服务启动器
//!
//! 组装 axum 路由、挂载 Swagger UI、配置 CORS 并绑定 TCP 端口对外提供服务。
//! 本模块不直接启动 `main()`, 而是由 `crates/app` 的 DI 容器持有并调用。

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use candlekit_core::common::Stock;
use candlekit_core::market::port::CandleSupplier;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_swagger_ui::SwaggerUi;

use crate::routes::{analysis, system};

// ============================================================
//  共享应用状态
// ============================================================

/// 全局应用状态，通过 axum 的 `State` 提取器注入到每个 Handler 中。
///
/// # Invariants
/// - `supplier` 在服务启动前由 DI 容器注入，生命周期与进程等同。
/// - 状态本身不可变，每个请求各自读取一份 K 线快照。
#[derive(Clone)]
pub struct AppState {
    /// K 线供给器
    pub supplier: Arc<dyn CandleSupplier>,
    /// 服务的标的
    pub stock: Stock,
}

// ============================================================
//  OpenAPI 文档定义
// ============================================================

/// 全局 OpenAPI 文档结构
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Candlekit K 线分析 API",
        version = "0.1.0",
        description = "基于 5 分钟 K 线的开盘区间突破检测与大周期合成服务。",
        license(name = "MIT")
    ),
    tags(
        (name = "系统 (System)", description = "存活探测与原始数据查询"),
        (name = "分析 (Analysis)", description = "开盘区间突破检测与 K 线合成")
    )
)]
pub struct ApiDoc;

// ============================================================
//  服务构建与启动
// ============================================================

/// 构建完整的 axum 应用路由树，包含 Swagger UI 与 CORS 层。
///
/// # Arguments
/// * `state` - 由外部 DI 容器注入的共享状态
pub fn build_router(state: AppState) -> Router {
    // 1. 公开路由并收集 OpenAPI Doc
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(system::root))
        .routes(routes!(system::read_json))
        .routes(routes!(analysis::find_orb))
        .routes(routes!(analysis::generate_combined_candles))
        .with_state(state)
        .split_for_parts();

    // 2. 配置 CORS (允许所有来源)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 3. 合并 Swagger UI 路由并应用中间件
    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(cors)
}

/// 绑定端口并启动 HTTP 服务，直到 `shutdown` 完成。
///
/// # Arguments
/// * `state` - 由外部 DI 容器注入的共享状态
/// * `bind_addr` - 监听的地址与端口，如 `"0.0.0.0:8000"`
/// * `shutdown` - 优雅退出信号
///
/// # Returns
/// 端口绑定或服务运行失败时返回错误。
pub async fn start_server<F>(
    state: AppState,
    bind_addr: &str,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Candlekit API Server listening on {}", bind_addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

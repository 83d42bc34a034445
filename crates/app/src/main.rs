use std::sync::Arc;

use candlekit_api::server::{AppState, start_server};
use candlekit_core::config::AppConfig;
use candlekit_feed::json::JsonFileSupplier;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// 可选的配置文件 (不含扩展名，按 config crate 规则自动识别格式)
const CONFIG_FILE: &str = "config/candlekit";
// 环境变量前缀，例如 CANDLEKIT__SERVER__PORT=9000
const ENV_PREFIX: &str = "CANDLEKIT";

/// # Summary
/// 加载分层配置。
///
/// # Logic
/// 1. 以 `AppConfig::default()` 作为底层默认值。
/// 2. 叠加可选的配置文件。
/// 3. 叠加 `CANDLEKIT__` 前缀的环境变量。
///
/// # Arguments
/// * `file`: 配置文件路径 (不存在时忽略)。
///
/// # Returns
/// 成功返回合并后的配置。
fn load_config(file: &str) -> Result<AppConfig, config::ConfigError> {
    config::Config::builder()
        .add_source(config::Config::try_from(&AppConfig::default())?)
        .add_source(config::File::with_name(file).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责加载配置、实例化 K 线供给器并注入到 API 服务。
///
/// # Logic
/// 1. 初始化全局日志。
/// 2. 加载配置。
/// 3. 实例化基础设施层（JSON 数据源）。
/// 4. 构造 API 共享状态并启动服务。
/// 5. 收到退出信号后优雅停机。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 初始化日志
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .init();
    info!("Candlekit starting...");

    // 2. 加载配置
    let app_config = load_config(CONFIG_FILE)?;
    info!(
        "Serving {} from {}",
        app_config.data.symbol, app_config.data.price_data_path
    );

    // 3. 实例化基础设施层
    let stock = app_config.data.stock();
    let supplier = JsonFileSupplier::new(&app_config.data.price_data_path, stock.clone());
    if !supplier.path().exists() {
        warn!(
            "Price data {} does not exist yet, requests will fail until it is created",
            supplier.path().display()
        );
    }

    // 4. 构造共享状态并启动服务
    let state = AppState {
        supplier: Arc::new(supplier),
        stock,
    };

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for shutdown signal: {}", e);
        }
        info!("Shutdown signal received. Exiting...");
    };

    start_server(state, &app_config.server.bind_addr(), shutdown).await?;

    Ok(())
}

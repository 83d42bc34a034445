use async_trait::async_trait;
use candlekit_core::common::Stock;
use candlekit_core::market::entity::PriceDocument;
use candlekit_core::market::error::CandleError;
use candlekit_core::market::port::CandleSupplier;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// # Summary
/// 基于本地 JSON 价格文档的 K 线供给器。
///
/// # Invariants
/// - 文档路径在构造时注入，生命周期内不变。
/// - 只服务构造时指定的单一标的。
/// - 每次调用都重新读取文件，不缓存内容。
#[derive(Debug, Clone)]
pub struct JsonFileSupplier {
    // 价格文档路径
    path: PathBuf,
    // 文档对应的标的
    stock: Stock,
}

impl JsonFileSupplier {
    /// # Summary
    /// 创建一个新的 JsonFileSupplier 实例。
    ///
    /// # Arguments
    /// * `path`: 价格文档路径。
    /// * `stock`: 文档对应的标的。
    ///
    /// # Returns
    /// 返回初始化后的 JsonFileSupplier。
    pub fn new(path: impl Into<PathBuf>, stock: Stock) -> Self {
        Self {
            path: path.into(),
            stock,
        }
    }

    /// 价格文档路径。
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CandleSupplier for JsonFileSupplier {
    /// # Summary
    /// 从磁盘读取并解析价格文档。
    ///
    /// # Logic
    /// 1. 校验请求的标的与本供给器一致。
    /// 2. 异步读取文件全文。
    /// 3. 解析为 `PriceDocument`，字段仍保持原始形态，由调用方集中解码。
    ///
    /// # Arguments
    /// * `stock`: 请求的标的。
    ///
    /// # Returns
    /// 成功返回价格文档；标的不符或文件读取失败返回 `DataUnavailable`，
    /// JSON 结构不合法返回 `MalformedInput`。
    async fn fetch_document(&self, stock: &Stock) -> Result<PriceDocument, CandleError> {
        if stock.symbol != self.stock.symbol {
            return Err(CandleError::DataUnavailable(format!(
                "{} is not served by this feed (serving {})",
                stock, self.stock
            )));
        }

        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            warn!("Failed to read price data {}: {}", self.path.display(), e);
            CandleError::DataUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let document: PriceDocument =
            serde_json::from_str(&text).map_err(|e| CandleError::MalformedInput {
                row: None,
                field: "document".to_string(),
                value: e.to_string(),
            })?;

        debug!(
            "Loaded {} candle records for {} from {}",
            document.candles.len(),
            stock,
            self.path.display()
        );
        Ok(document)
    }
}

use crate::common::Stock;
use crate::market::decode::decode_candles;
use crate::market::entity::{Candle, PriceDocument};
use crate::market::error::CandleError;
use async_trait::async_trait;

/// # Summary
/// K 线供给器接口，分析逻辑唯一的数据来源。
///
/// # Invariants
/// - 每次调用都返回一份独立的快照，调用方可自由持有，不与其他请求共享可变状态。
/// - 返回的序列按时间升序排列，核心逻辑不做排序。
#[async_trait]
pub trait CandleSupplier: Send + Sync {
    /// # Summary
    /// 读取指定标的的原始价格文档。
    ///
    /// # Arguments
    /// * `stock`: 标的身份。
    ///
    /// # Returns
    /// 成功返回价格文档，数据源不可用时返回 `CandleError::DataUnavailable`，
    /// 文档结构无法解析时返回 `CandleError::MalformedInput`。
    async fn fetch_document(&self, stock: &Stock) -> Result<PriceDocument, CandleError>;

    /// # Summary
    /// 读取并解码指定标的的 K 线序列。
    ///
    /// # Logic
    /// 1. 调用 `fetch_document` 获取原始记录。
    /// 2. 通过 `decode_candles` 集中完成类型转换。
    ///
    /// # Arguments
    /// * `stock`: 标的身份。
    ///
    /// # Returns
    /// 成功返回解码后的 K 线列表。
    async fn get_candles(&self, stock: &Stock) -> Result<Vec<Candle>, CandleError> {
        let document = self.fetch_document(stock).await?;
        decode_candles(&document.candles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::mock::{StaticCandleSupplier, five_minute_labels, text_record};

    #[tokio::test]
    async fn test_get_candles_decodes_document() {
        let labels = five_minute_labels(2);
        let supplier = StaticCandleSupplier::new(vec![
            text_record(&labels[0], [1.0, 2.0, 0.5, 1.5], 10),
            text_record(&labels[1], [1.5, 2.5, 1.0, 2.0], 20),
        ]);

        let candles = supplier.get_candles(&Stock::new("NIFTY")).await.unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1].traded_qty, 20);
        assert_eq!(candles[0].last_trade_time, "2024-01-02 09:15:00");
    }

    #[tokio::test]
    async fn test_unavailable_supplier() {
        let supplier = StaticCandleSupplier::unavailable();
        let err = supplier.get_candles(&Stock::new("NIFTY")).await.unwrap_err();
        assert!(matches!(err, CandleError::DataUnavailable(_)));
    }
}

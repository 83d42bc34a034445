//! # 测试用内存供给器
//!
//! 仅在 `test-utils` 特性下编译，供分析与 API 测试注入固定数据。

use async_trait::async_trait;
use serde_json::Map;

use crate::common::Stock;
use crate::market::entity::{CandleRecord, PriceDocument, RawField};
use crate::market::error::CandleError;
use crate::market::port::CandleSupplier;

/// 持有一份固定价格文档的供给器。`document` 为 `None` 时模拟数据源不可用。
#[derive(Debug, Clone)]
pub struct StaticCandleSupplier {
    document: Option<PriceDocument>,
}

impl StaticCandleSupplier {
    pub fn new(records: Vec<CandleRecord>) -> Self {
        Self {
            document: Some(PriceDocument {
                candles: records,
                extra: Map::new(),
            }),
        }
    }

    pub fn unavailable() -> Self {
        Self { document: None }
    }
}

#[async_trait]
impl CandleSupplier for StaticCandleSupplier {
    async fn fetch_document(&self, stock: &Stock) -> Result<PriceDocument, CandleError> {
        self.document
            .clone()
            .ok_or_else(|| CandleError::DataUnavailable(format!("no data for {}", stock)))
    }
}

/// # Summary
/// 构造一条全文本字段的记录。
///
/// # Arguments
/// * `time`: `LastTradeTime` 标签。
/// * `ohlc`: 依次为开、高、低、收。
/// * `qty`: 成交量。
pub fn text_record(time: &str, ohlc: [f64; 4], qty: u64) -> CandleRecord {
    let [open, high, low, close] = ohlc;
    CandleRecord {
        open: RawField::Text(open.to_string()),
        high: RawField::Text(high.to_string()),
        low: RawField::Text(low.to_string()),
        close: RawField::Text(close.to_string()),
        traded_qty: RawField::Text(qty.to_string()),
        last_trade_time: RawField::Text(time.to_string()),
        extra: Map::new(),
    }
}

/// # Summary
/// 生成以 09:15 为起点、每 5 分钟一根的时间标签，共 `count` 个。
pub fn five_minute_labels(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let minutes = 15 + i * 5;
            format!("2024-01-02 {:02}:{:02}:00", 9 + minutes / 60, minutes % 60)
        })
        .collect()
}

//! # `candlekit-feed` - 行情数据源
//!
//! 提供 `CandleSupplier` 的具体实现。

pub mod json;

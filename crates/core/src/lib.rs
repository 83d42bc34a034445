//! # `candlekit-core` - 领域核心
//!
//! 定义 K 线实体、错误分类、数据供给端口与统一的记录解码逻辑。
//! 本 crate 不包含任何 I/O 实现，具体数据源由 `candlekit-feed` 提供。

pub mod common;
pub mod config;
pub mod market;

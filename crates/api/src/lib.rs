//! # `candlekit-api` - HTTP API 网关
//!
//! 本 crate 是 Candlekit K 线分析服务的 HTTP/REST 入口。
//! 使用 `axum` 构建路由与控制器，通过 `utoipa` 自动生成 OpenAPI 3.0 Swagger 文档。
//!
//! ## 架构职责
//! - 解析路径参数，非法参数映射为 400
//! - 通过 `CandleSupplier` 读取 K 线并调用 `candlekit-analysis` 完成计算
//! - 将领域模型转换为 DTO 返回给调用方

pub mod error;
pub mod routes;
pub mod server;
pub mod types;

use std::sync::Arc;

use candlekit_api::server::{AppState, build_router};
use candlekit_api::types::{ApiErrorResponse, CombinedCandleResponse, OrbResponse};
use candlekit_core::common::Stock;
use candlekit_core::market::mock::{StaticCandleSupplier, five_minute_labels, text_record};
use candlekit_core::market::port::CandleSupplier;
use candlekit_feed::json::JsonFileSupplier;
use reqwest::StatusCode;
use tokio::net::TcpListener;

/// 五根 5 分钟 K 线，Low/High 依次为 [100,102] [99,103] [101,104] [105,110] [95,98]。
fn sample_supplier() -> StaticCandleSupplier {
    let labels = five_minute_labels(5);
    let bars = [
        [101.0, 102.0, 100.0, 101.5],
        [101.5, 103.0, 99.0, 102.0],
        [102.0, 104.0, 101.0, 103.5],
        [106.0, 110.0, 105.0, 107.0],
        [97.0, 98.0, 95.0, 96.0],
    ];
    StaticCandleSupplier::new(
        labels
            .iter()
            .zip(bars)
            .map(|(t, ohlc)| text_record(t, ohlc, 100))
            .collect(),
    )
}

// 帮助函数：在随机端口启动测试服务器
async fn spawn_test_server(supplier: Arc<dyn CandleSupplier>) -> String {
    let state = AppState {
        supplier,
        stock: Stock::new("NIFTY"),
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_root_banner() -> anyhow::Result<()> {
    let addr = spawn_test_server(Arc::new(sample_supplier())).await;

    let res = reqwest::get(format!("{}/", addr)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await?, "Stock Analysis API is running!");
    Ok(())
}

#[tokio::test]
async fn test_find_orb_workflow() -> anyhow::Result<()> {
    let addr = spawn_test_server(Arc::new(sample_supplier())).await;

    // 1. 10 分钟窗口，命中窗口末根
    let res = reqwest::get(format!("{}/findORB/10", addr)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body, serde_json::json!({ "ORBCandleGeneratedAt": "2024-01-02 09:20:00" }));

    // 2. 非法参数
    for bad in ["0", "-10", "abc"] {
        let res = reqwest::get(format!("{}/findORB/{}", addr, bad)).await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "minutes = {}", bad);
        let err: ApiErrorResponse = res.json().await?;
        assert!(!err.success);
        assert!(err.error.contains("positive integer"));
    }

    // 3. 窗口短于一根 K 线，开盘区间为空
    let res = reqwest::get(format!("{}/findORB/3", addr)).await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn test_combined_candles_workflow() -> anyhow::Result<()> {
    let addr = spawn_test_server(Arc::new(sample_supplier())).await;

    let res = reqwest::get(format!("{}/generateCombinedCandles/10", addr)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let raw: serde_json::Value = res.json().await?;
    assert_eq!(raw[0]["tradedQty"], 200);
    assert_eq!(raw[0]["quotationLot"], 1);
    assert_eq!(raw[0]["openInterest"], 0);

    let combined: Vec<CombinedCandleResponse> = serde_json::from_value(raw)?;
    assert_eq!(combined.len(), 3);
    assert_eq!(combined[0].high, 103.0);
    assert_eq!(combined[0].low, 99.0);
    assert_eq!(combined[2].id, 2);
    assert_eq!(combined[2].last_trade_time, "2024-01-02 09:35:00");

    // 周期小于一根 K 线时返回空数组
    let res = reqwest::get(format!("{}/generateCombinedCandles/4", addr)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let empty: Vec<CombinedCandleResponse> = res.json().await?;
    assert!(empty.is_empty());

    let res = reqwest::get(format!("{}/generateCombinedCandles/x", addr)).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_unavailable_supplier_is_server_error() -> anyhow::Result<()> {
    let addr = spawn_test_server(Arc::new(StaticCandleSupplier::unavailable())).await;

    for path in ["readJson", "findORB/15", "generateCombinedCandles/15"] {
        let res = reqwest::get(format!("{}/{}", addr, path)).await?;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR, "path = {}", path);
        let err: ApiErrorResponse = res.json().await?;
        assert_eq!(err.error, "Internal Server Error");
    }
    Ok(())
}

#[tokio::test]
async fn test_json_file_end_to_end() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("priceData.json");
    std::fs::write(
        &path,
        r#"{"candles": [
            {"Open": "10", "High": "11", "Low": "9", "Close": "10.5", "TradedQty": "5", "LastTradeTime": "2024-01-02T09:15:00Z", "QuotationLot": 1},
            {"Open": "10.5", "High": "12", "Low": "10", "Close": "11.5", "TradedQty": "6", "LastTradeTime": "2024-01-02T09:20:00Z", "QuotationLot": 1}
        ]}"#,
    )?;
    let addr = spawn_test_server(Arc::new(JsonFileSupplier::new(&path, Stock::new("NIFTY")))).await;

    // 原始文档透传，保留额外字段与原始文本
    let doc: serde_json::Value = reqwest::get(format!("{}/readJson", addr)).await?.json().await?;
    assert_eq!(doc["candles"][1]["Close"], "11.5");
    assert_eq!(doc["candles"][0]["QuotationLot"], 1);

    let orb: OrbResponse = reqwest::get(format!("{}/findORB/5", addr)).await?.json().await?;
    assert_eq!(orb.orb_candle_generated_at.as_deref(), Some("2024-01-02T09:15:00Z"));
    assert!(orb.message.is_none());

    // 记录损坏时整体失败
    std::fs::write(
        &path,
        r#"{"candles": [{"Open": "x", "High": "1", "Low": "1", "Close": "1", "TradedQty": "1", "LastTradeTime": "2024-01-02T09:15:00Z"}]}"#,
    )?;
    let res = reqwest::get(format!("{}/generateCombinedCandles/10", addr)).await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

#[tokio::test]
async fn test_combined_candles_echo_source_prices() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("priceData.json");
    std::fs::write(
        &path,
        r#"{"candles": [
            {"Open": "18105.30", "High": "18122.50", "Low": "18098.10", "Close": "18118.00", "TradedQty": "182450", "LastTradeTime": "2022-11-08 09:15:00"},
            {"Open": "18118.00", "High": "18131.20", "Low": "18110.40", "Close": "18127.90", "TradedQty": "143200", "LastTradeTime": "2022-11-08 09:20:00"},
            {"Open": 18127.9, "High": 18129.0, "Low": 18102.6, "Close": 18106.2, "TradedQty": 128900, "LastTradeTime": "2022-11-08 09:25:00"}
        ]}"#,
    )?;
    let addr = spawn_test_server(Arc::new(JsonFileSupplier::new(&path, Stock::new("NIFTY")))).await;

    let raw: serde_json::Value = reqwest::get(format!("{}/generateCombinedCandles/10", addr))
        .await?
        .json()
        .await?;

    // 开收盘价原样回显，最高/最低价为解析后的数值
    assert_eq!(raw[0]["open"], "18105.30");
    assert_eq!(raw[0]["close"], "18127.90");
    assert_eq!(raw[0]["high"], 18131.2);
    assert_eq!(raw[0]["low"], 18098.1);
    assert_eq!(raw[0]["tradedQty"], 325650);

    // 数据源给出数值时仍为数值
    assert_eq!(raw[1]["open"], 18127.9);
    assert_eq!(raw[1]["close"], 18106.2);
    Ok(())
}

#[tokio::test]
async fn test_openapi_document_served() -> anyhow::Result<()> {
    let addr = spawn_test_server(Arc::new(sample_supplier())).await;

    let doc: serde_json::Value = reqwest::get(format!("{}/api-docs/openapi.json", addr))
        .await?
        .json()
        .await?;
    assert!(doc["paths"]["/findORB/{minutes}"].is_object());
    assert!(doc["paths"]["/generateCombinedCandles/{interval}"].is_object());
    Ok(())
}

use serde::{Deserialize, Serialize};

/// # Summary
/// 证券标的实体，代表数据源所服务的交易品种。
///
/// # Invariants
/// - `symbol` 必须是合法的交易代码。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    // 交易代码 (例如: NIFTY, AAPL)
    pub symbol: String,
    // 交易所代码 (可选，例如: NSE, NASDAQ)
    pub exchange: Option<String>,
}

impl Stock {
    /// 以交易代码构造标的，交易所留空。
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: None,
        }
    }
}

impl std::fmt::Display for Stock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.exchange {
            Some(exchange) => write!(f, "{}:{}", exchange, self.symbol),
            None => write!(f, "{}", self.symbol),
        }
    }
}

/// 数据源中每根原始 K 线覆盖的分钟数。
pub const BAR_MINUTES: i64 = 5;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// # Summary
/// 原始记录中的单个字段，数据源可能以字符串或数值两种形式给出。
///
/// # Invariants
/// - 序列化时保持原样输出，不做任何数值转换。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Text(String),
    Number(serde_json::Number),
}

impl RawField {
    /// 以文本形式返回字段内容，用于错误信息与时间标签。
    pub fn as_text(&self) -> String {
        match self {
            RawField::Text(s) => s.clone(),
            RawField::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self {
        RawField::Text(s.to_string())
    }
}

/// # Summary
/// 数据源给出的一条未解码 K 线记录。
///
/// # Invariants
/// - 字段名为 PascalCase，与价格文档保持一致。
/// - 未识别的字段 (例如 `QuotationLot`) 原样保留在 `extra` 中。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CandleRecord {
    pub open: RawField,
    pub high: RawField,
    pub low: RawField,
    pub close: RawField,
    pub traded_qty: RawField,
    pub last_trade_time: RawField,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// # Summary
/// 价格文档，数据源一次读取的完整内容。
///
/// # Invariants
/// - `candles` 按到达顺序排列，核心逻辑信任该顺序且不做排序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceDocument {
    pub candles: Vec<CandleRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// # Summary
/// 解码后的单根 K 线。
///
/// # Invariants
/// - 所有价格均为有限浮点数。
/// - `low <= open, close <= high` 为预期但不强制校验。
/// - `open_raw`/`close_raw` 与 `open`/`close` 来自同一字段，前者保留数据源原样。
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    // 最后成交时间 (UTC 绝对时刻)
    pub time: DateTime<Utc>,
    // 开盘价
    pub open: f64,
    // 最高价
    pub high: f64,
    // 最低价
    pub low: f64,
    // 收盘价
    pub close: f64,
    // 成交量
    pub traded_qty: u64,
    // 数据源给出的原始时间标签，结果中原样回显
    pub last_trade_time: String,
    // 原始开盘价字段
    pub open_raw: RawField,
    // 原始收盘价字段
    pub close_raw: RawField,
}

/// # Summary
/// 多根连续 K 线合成后的大周期 K 线。
///
/// # Invariants
/// - 构造后不再修改。
/// - `quotation_lot` 恒为 1，`open_interest` 恒为 0，仅为下游格式兼容而保留。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedCandle {
    // 分组序号，从 0 开始
    pub id: usize,
    // 组内首根的开盘价 (原样)
    pub open: RawField,
    // 组内最高价
    pub high: f64,
    // 组内最低价
    pub low: f64,
    // 组内末根的收盘价 (原样)
    pub close: RawField,
    // 组内成交量之和
    pub traded_qty: u64,
    // 组内末根的时间标签
    pub last_trade_time: String,
    pub quotation_lot: u32,
    pub open_interest: u64,
}

impl CombinedCandle {
    pub const QUOTATION_LOT: u32 = 1;
    pub const OPEN_INTEREST: u64 = 0;
}

/// # Summary
/// 开盘区间，仅在单次分析调用内存在。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningRange {
    pub high: f64,
    pub low: f64,
}

/// # Summary
/// 开盘区间突破的检测结果。`NotFound` 是合法结果而非错误。
#[derive(Debug, Clone, PartialEq)]
pub enum Breakout {
    /// 找到的首根突破 K 线
    Found {
        // 该 K 线在序列中的位置
        index: usize,
        // 解析后的时间
        time: DateTime<Utc>,
        // 原始时间标签
        last_trade_time: String,
    },
    NotFound,
}

use thiserror::Error;

/// # Summary
/// K 线分析域错误枚举，覆盖参数校验、数据缺失与解析失败。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
/// - 所有错误均以结果返回调用方，不终止进程。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CandleError {
    // 调用方提供的参数不合法
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    // 开盘区间为空，无法计算极值
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
    // 记录的数值或时间字段无法解析
    // `row` 为记录序号，文档整体无法解析时为 None
    #[error(
        "Malformed input{}: field '{field}' = {value:?}",
        .row.map(|r| format!(" at record {r}")).unwrap_or_default()
    )]
    MalformedInput {
        row: Option<usize>,
        field: String,
        value: String,
    },
    // 数据源未能给出序列
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),
}

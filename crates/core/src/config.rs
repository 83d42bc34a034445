use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 行情数据源配置，启动时注入到 K 线供给器。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON 价格文档路径
    pub price_data_path: String,
    /// 该文档对应的交易代码
    pub symbol: String,
    /// 交易所 (可选)
    pub exchange: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            price_data_path: "priceData.json".to_string(),
            symbol: "NIFTY".to_string(),
            exchange: None,
        }
    }
}

impl ServerConfig {
    /// 拼接监听地址，例如 `"0.0.0.0:8000"`。
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DataConfig {
    /// 由配置构造标的身份。
    pub fn stock(&self) -> crate::common::Stock {
        crate::common::Stock {
            symbol: self.symbol.clone(),
            exchange: self.exchange.clone(),
        }
    }
}

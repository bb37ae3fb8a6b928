//! 環境変数から読み込むサーバー設定

use thiserror::Error;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 9000;

/// 設定の読み込み時に発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// PORT が指定されているが、有効なTCPポート番号ではない
    #[error("Invalid PORT value {value:?}: expected an integer between 0 and 65535")]
    InvalidPort { value: String },
}

/// HTTPサーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// プロセスの環境変数から `HOST` と `PORT` を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー検索関数から設定を組み立てる
    ///
    /// 未設定のキーは既定値を使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// `TcpListener::bind` に渡すアドレス文字列
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

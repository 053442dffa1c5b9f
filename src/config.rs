use crate::application::checkout::ReminderTiming;
use crate::domain::value_objects::{CopyId, Isbn};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 設定値のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// アプリケーション設定
///
/// 環境変数から読み込む：
/// - HOST / PORT: 待ち受けアドレス
/// - DATABASE_URL: 設定時はPostgreSQL、未設定時はインメモリストレージ
/// - DATABASE_MAX_CONNECTIONS: コネクションプールの最大接続数
/// - REMINDER_TIMING: `before_claim` または `after_claim`
/// - SEED_COPIES: 起動時に登録する蔵書（`isbn/copy_id`のカンマ区切り）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub reminder_timing: ReminderTiming,
    pub seed_copies: Vec<(Isbn, CopyId)>,
}

impl Config {
    /// `.env`と環境変数から読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の取得関数から読み込む
    ///
    /// 空文字列は未設定として扱う。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = match get("HOST") {
            Some(v) => parse("HOST", v)?,
            None => DEFAULT_HOST,
        };
        let port = match get("PORT") {
            Some(v) => parse("PORT", v)?,
            None => DEFAULT_PORT,
        };
        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => parse("DATABASE_MAX_CONNECTIONS", v)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let reminder_timing = match get("REMINDER_TIMING") {
            Some(v) => parse("REMINDER_TIMING", v)?,
            None => ReminderTiming::default(),
        };

        let seed_copies = match get("SEED_COPIES") {
            Some(v) => parse_seed_copies(&v)?,
            None => Vec::new(),
        };

        Ok(Self {
            host,
            port,
            database_url: get("DATABASE_URL"),
            database_max_connections,
            reminder_timing,
            seed_copies,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { name, value })
}

/// `isbn/copy_id,isbn/copy_id,...`を解析する
fn parse_seed_copies(value: &str) -> Result<Vec<(Isbn, CopyId)>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('/') {
            Some((isbn, copy_id)) if !isbn.trim().is_empty() && !copy_id.trim().is_empty() => {
                Ok((Isbn::new(isbn.trim()), CopyId::new(copy_id.trim())))
            }
            _ => Err(ConfigError::InvalidValue {
                name: "SEED_COPIES",
                value: entry.to_string(),
            }),
        })
        .collect()
}

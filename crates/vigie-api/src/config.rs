//! Service configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `VIGIE_BIND_ADDR` | `0.0.0.0:3000` |
//! | `VIGIE_LOG_FORMAT` | `json` (or `pretty`) |
//! | `VIGIE_REFERENCE_DATE` | unset: today's date |
//!
//! Log filtering itself is read from `RUST_LOG` by the subscriber.

use std::env;
use std::net::SocketAddr;

use eyre::{WrapErr, bail};
use jiff::civil::Date;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    pub reference_date: Option<Date>,
}

impl ServiceConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("VIGIE_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .wrap_err("VIGIE_BIND_ADDR must be a socket address such as 0.0.0.0:3000")?;

        let log_format = match get("VIGIE_LOG_FORMAT").map(|v| v.trim().to_lowercase()) {
            None => LogFormat::Json,
            Some(v) if v == "json" => LogFormat::Json,
            Some(v) if v == "pretty" => LogFormat::Pretty,
            Some(other) => bail!("VIGIE_LOG_FORMAT must be `json` or `pretty`, got `{other}`"),
        };

        let reference_date = get("VIGIE_REFERENCE_DATE")
            .map(|v| {
                v.trim()
                    .parse::<Date>()
                    .wrap_err_with(|| format!("VIGIE_REFERENCE_DATE is not an ISO date: `{v}`"))
            })
            .transpose()?;

        Ok(Self {
            bind_addr,
            log_format,
            reference_date,
        })
    }
}

use crate::errors::{DashboardError, DashboardResult};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub dashboard_dir: PathBuf,
    pub max_contracts: usize,
    pub ws_buffer: usize,
}

impl AppConfig {
    pub fn from_env() -> DashboardResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. `from_env` is the only
    /// production caller; tests pass a closure over a fixed map.
    pub fn from_lookup<F>(lookup: F) -> DashboardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let server_port = get("SERVER_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| DashboardError::Config(format!("SERVER_PORT: {e}")))?;

        let max_contracts = parse_positive("MAX_CONTRACTS", &get("MAX_CONTRACTS", "500"))?;
        let ws_buffer = parse_positive("WS_BUFFER", &get("WS_BUFFER", "256"))?;

        Ok(Self {
            server_host: get("SERVER_HOST", "0.0.0.0"),
            server_port,
            dashboard_dir: PathBuf::from(get("DASHBOARD_DIR", "dashboard/dist")),
            max_contracts,
            ws_buffer,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".into(),
            server_port: 3001,
            dashboard_dir: PathBuf::from("dashboard/dist"),
            max_contracts: 500,
            ws_buffer: 256,
        }
    }
}

fn parse_positive(key: &str, raw: &str) -> DashboardResult<usize> {
    let value = raw
        .parse::<usize>()
        .map_err(|e| DashboardError::Config(format!("{key}: {e}")))?;
    if value == 0 {
        return Err(DashboardError::Config(format!("{key}: must be at least 1")));
    }
    Ok(value)
}

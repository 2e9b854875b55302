use std::net::IpAddr;
use std::path::PathBuf;

use ipnet::IpNet;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
    pub trusted_proxies: Vec<IpNet>,
    /// Directory holding the pre-rendered marketing site, served as fallback.
    pub site_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            max_body_size: 1_048_576,
            cors_origins: vec![],
            trusted_proxies: vec![],
            site_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("FRESHNEST_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FRESHNEST_HOST: {e}"))?;

        let port: u16 = env_or("FRESHNEST_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid FRESHNEST_PORT: {e}"))?;

        let max_body_size: usize = env_or("FRESHNEST_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid FRESHNEST_MAX_BODY_SIZE: {e}"))?;

        let cors_origins = split_list(&env_or("FRESHNEST_CORS_ORIGINS", ""))
            .map(|s| s.to_string())
            .collect();

        let trusted_proxies: Vec<IpNet> = split_list(&env_or("FRESHNEST_TRUSTED_PROXIES", ""))
            .map(|s| {
                s.parse()
                    .map_err(|e| format!("Invalid FRESHNEST_TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let site_dir = std::env::var("FRESHNEST_SITE_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env_or("FRESHNEST_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            max_body_size,
            cors_origins,
            trusted_proxies,
            site_dir,
            log_level,
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

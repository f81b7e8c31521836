use serde::Deserialize;
use snafu::{OptionExt, ResultExt, ensure};
use std::env;
use std::path::PathBuf;

use crate::Result;
use crate::error::{ConfigSnafu, PortParseSnafu};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    /// Holds static files: resume, images and bundled assets
    pub public_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub https: bool,
}

impl Config {
    pub fn build() -> Result<Self> {
        // Build the config from ENV vars
        let port = env::var("PORT")
            .ok()
            .context(ConfigSnafu {
                msg: "PORT is required.".to_string(),
            })?
            .parse::<u16>()
            .context(PortParseSnafu)?;

        let address = env::var("BIND_ADDRESS")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let https = env::var("HTTPS").is_ok_and(|v| v == "1");

        let public_dir: PathBuf = env::var("PUBLIC_DIR")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string())
            .into();

        // Validate config values
        ensure!(
            port > 0,
            ConfigSnafu {
                msg: "Server port is required.".to_string()
            }
        );

        ensure!(
            public_dir.is_dir(),
            ConfigSnafu {
                msg: format!("Public dir does not exist: {}", public_dir.display())
            }
        );

        Ok(Config {
            server: ServerConfig {
                address,
                port,
                https,
            },
            public_dir,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.address, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = Config {
            server: ServerConfig {
                address: "0.0.0.0".to_string(),
                port: 8080,
                https: false,
            },
            public_dir: PathBuf::from("public"),
        };
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }
}

//! Serve command implementation

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::server::{self, AppState};

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address to bind (overrides the configuration file)
    #[arg(long, env = "TEXTLENS_HOST")]
    pub host: Option<String>,

    /// Port to bind (overrides the configuration file)
    #[arg(short, long, env = "TEXTLENS_PORT")]
    pub port: Option<u16>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ServeArgs {
    /// Execute the serve command
    pub fn execute(&self) -> ServerResult<()> {
        super::init_logging(self.verbose, self.quiet);

        let config = self.resolve_config()?;
        let addr = socket_addr(&config)?;
        let analyzer = config.build_analyzer()?;
        log::debug!("Analyzer: {analyzer:?}");

        let state = AppState::new(analyzer, config.server.service_name.clone());

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;
        runtime.block_on(server::serve(addr, state))
    }

    /// Configuration file values with command-line overrides applied
    pub fn resolve_config(&self) -> Result<ServerConfig> {
        let mut config = ServerConfig::load(self.config.as_deref())?;
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        Ok(config)
    }
}

fn socket_addr(config: &ServerConfig) -> Result<SocketAddr> {
    let ip: IpAddr = config.server.host.parse().map_err(|_| {
        ServerError::ConfigError(format!("invalid host address '{}'", config.server.host))
    })?;
    Ok(SocketAddr::new(ip, config.server.port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args(config: Option<PathBuf>, host: Option<&str>, port: Option<u16>) -> ServeArgs {
        ServeArgs {
            config,
            host: host.map(str::to_string),
            port,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let config = args(None, None, None).resolve_config().unwrap();
        assert_eq!(socket_addr(&config).unwrap().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[server]\nhost = \"0.0.0.0\"\nport = 9000\n").unwrap();

        let config = args(Some(file.path().to_path_buf()), None, Some(9100))
            .resolve_config()
            .unwrap();
        assert_eq!(socket_addr(&config).unwrap().to_string(), "0.0.0.0:9100");

        let config = args(Some(file.path().to_path_buf()), Some("127.0.0.1"), None)
            .resolve_config()
            .unwrap();
        assert_eq!(socket_addr(&config).unwrap().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_host() {
        let config = args(None, Some("not a host"), None).resolve_config().unwrap();
        let err = socket_addr(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: invalid host address 'not a host'"
        );
    }
}

//! Layered configuration.
//!
//! Priority: CLI flag > CLI env var > `EDUTRACKER_` env vars > config file > defaults.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 30;
const DEFAULT_STUDENT_NAME: &str = "John";
const DEFAULT_STUDENT_INITIALS: &str = "JD";
const DEFAULT_STUDENT_AVATAR: &str = "/placeholder.svg";

#[derive(Parser, Debug)]
#[command(author, version, about = "EduTracker student dashboard", long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub student: StudentConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: String,
    pub request_timeout_secs: u64,
    pub timeout_disabled: bool,
}

impl ServerConfig {
    /// Per-request timeout, `None` when disabled or zero.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        if self.timeout_disabled || self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.request_timeout_secs))
        }
    }
}

/// Who the dashboard greets.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StudentConfig {
    pub name: String,
    pub initials: String,
    pub avatar: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                static_dir: DEFAULT_STATIC_DIR.to_string(),
                request_timeout_secs: u64::from(DEFAULT_REQUEST_TIMEOUT_SECS),
                timeout_disabled: false,
            },
            student: StudentConfig {
                name: DEFAULT_STUDENT_NAME.to_string(),
                initials: DEFAULT_STUDENT_INITIALS.to_string(),
                avatar: DEFAULT_STUDENT_AVATAR.to_string(),
            },
            log: LogConfig {
                format: LogFormat::Compact,
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        // 1. Defaults
        let mut builder = Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.static_dir", DEFAULT_STATIC_DIR)?
            .set_default(
                "server.request_timeout_secs",
                i64::from(DEFAULT_REQUEST_TIMEOUT_SECS),
            )?
            .set_default("server.timeout_disabled", false)?
            .set_default("student.name", DEFAULT_STUDENT_NAME)?
            .set_default("student.initials", DEFAULT_STUDENT_INITIALS)?
            .set_default("student.avatar", DEFAULT_STUDENT_AVATAR)?
            .set_default("log.format", "compact")?;

        // 2. Config file: explicit path must exist, ./config.* is optional
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // 3. Environment, e.g. EDUTRACKER_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("EDUTRACKER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI overrides (clap already folded PORT in)
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        let config: Self = builder.build()?.try_deserialize()?;
        if config.server.request_timeout_secs == 0 && !config.server.timeout_disabled {
            return Err(config::ConfigError::Message(
                "server.request_timeout_secs must be at least 1; set server.timeout_disabled instead"
                    .to_string(),
            ));
        }
        Ok(config)
    }

    /// `host:port` string for binding.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout() {
        let mut server = AppConfig::default().server;
        assert_eq!(server.request_timeout(), Some(Duration::from_secs(30)));

        server.request_timeout_secs = 0;
        assert_eq!(server.request_timeout(), None);

        server.request_timeout_secs = 5;
        server.timeout_disabled = true;
        assert_eq!(server.request_timeout(), None);
    }
}

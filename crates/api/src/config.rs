use std::path::PathBuf;

/// Which dashboard surfaces the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportingMode {
    /// Fleet-wide KPIs, compliance and fixed-limit recommendations only.
    Basic,
    /// Adds the weekly deviation report, per-equipment insights and the
    /// running-by-area breakdown.
    Extended,
}

impl ReportingMode {
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Some(Self::Basic),
            "extended" => Some(Self::Extended),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Extended => "extended",
        }
    }

    pub fn is_extended(&self) -> bool {
        matches!(self, Self::Extended)
    }
}

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Path of the reading CSV file.
    pub data_file: PathBuf,
    pub reporting_mode: ReportingMode,
    /// Days before the end date covered by the default weekly report window.
    pub report_window_days: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATA_FILE`            | `data/condition_data.csv`  |
    /// | `REPORTING_MODE`       | `extended`                 |
    /// | `REPORT_WINDOW_DAYS`   | `7`                        |
    pub fn from_env() -> Self {
        let reporting_mode = match std::env::var("REPORTING_MODE") {
            Ok(raw) => ReportingMode::from_str_value(&raw)
                .expect("REPORTING_MODE must be 'basic' or 'extended'"),
            Err(_) => ReportingMode::Extended,
        };

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parse_env("PORT", 3000),
            cors_origins: split_origins(&env_or("CORS_ORIGINS", "http://localhost:5173")),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", 30),
            data_file: env_or("DATA_FILE", "data/condition_data.csv").into(),
            reporting_mode,
            report_window_days: parse_env("REPORT_WINDOW_DAYS", 7),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Panics with the variable name when the value is present but malformed.
fn parse_env<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} is not valid ({raw:?}): {e}")),
        Err(_) => default,
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

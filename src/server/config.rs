use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 10_000;

/// Username/password pair for HTTP Basic auth.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self { username: username.to_string(), password: password.to_string() }
    }
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Immutable process configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    pub listen_addr: SocketAddr,
    pub upstream_url: String,
    pub upstream_credentials: Option<BasicCredentials>,
    /// `None` disables inbound auth.
    pub inbound_credentials: Option<BasicCredentials>,
    pub upstream_timeout: Duration,
    /// Reject unparseable `$filter` values with 400 instead of ignoring them.
    pub strict_query: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupError {
    pub code: &'static str,
    pub message: String,
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for StartupError {}

impl AdapterConfig {
    pub fn load() -> Result<Self, StartupError> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::from_kv(&env)
    }

    pub fn from_kv(kv: &HashMap<String, String>) -> Result<Self, StartupError> {
        let upstream_url = require_nonempty(kv, "UPSTREAM_URL")?;
        if reqwest::Url::parse(&upstream_url).is_err() {
            return Err(StartupError {
                code: "ERR_INVALID_CONFIG",
                message: "UPSTREAM_URL must be an absolute URL".to_string(),
            });
        }

        let port = parse_u16(kv.get("PORT"), DEFAULT_PORT, "PORT")?;
        let listen_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);

        let timeout_ms = parse_u64(
            kv.get("UPSTREAM_TIMEOUT_MS"),
            DEFAULT_UPSTREAM_TIMEOUT_MS,
            "UPSTREAM_TIMEOUT_MS",
        )?;
        if timeout_ms == 0 {
            return Err(StartupError {
                code: "ERR_INVALID_CONFIG",
                message: "UPSTREAM_TIMEOUT_MS must be > 0".to_string(),
            });
        }

        Ok(Self {
            listen_addr,
            upstream_url,
            upstream_credentials: parse_credentials(kv, "UPSTREAM_USERNAME", "UPSTREAM_PASSWORD"),
            inbound_credentials: parse_credentials(kv, "ODATA_USERNAME", "ODATA_PASSWORD"),
            upstream_timeout: Duration::from_millis(timeout_ms),
            strict_query: parse_bool(kv.get("ODATA_STRICT_QUERY")).unwrap_or(false),
        })
    }

    /// Config for an upstream at `upstream_url` with every optional value at its default.
    pub fn with_upstream(upstream_url: &str) -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            upstream_url: upstream_url.to_string(),
            upstream_credentials: None,
            inbound_credentials: None,
            upstream_timeout: Duration::from_millis(DEFAULT_UPSTREAM_TIMEOUT_MS),
            strict_query: false,
        }
    }
}

fn require_nonempty(
    kv: &HashMap<String, String>,
    key: &'static str,
) -> Result<String, StartupError> {
    let Some(value) = kv.get(key) else {
        return Err(StartupError {
            code: "ERR_MISSING_CONFIG",
            message: format!("missing required config key {}", key),
        });
    };

    let value = value.trim();
    if value.is_empty() {
        return Err(StartupError {
            code: "ERR_MISSING_CONFIG",
            message: format!("missing required config key {}", key),
        });
    }

    Ok(value.to_string())
}

// Either half being set turns auth on; the missing half is an empty string.
fn parse_credentials(
    kv: &HashMap<String, String>,
    user_key: &'static str,
    pass_key: &'static str,
) -> Option<BasicCredentials> {
    let username = kv.get(user_key).map(String::as_str).unwrap_or_default();
    let password = kv.get(pass_key).map(String::as_str).unwrap_or_default();

    if username.is_empty() && password.is_empty() {
        return None;
    }

    Some(BasicCredentials::new(username, password))
}

fn parse_u64(value: Option<&String>, default: u64, key: &'static str) -> Result<u64, StartupError> {
    match value {
        None => Ok(default),
        Some(v) if v.trim().is_empty() => Ok(default),
        Some(v) => v.trim().parse::<u64>().map_err(|_| StartupError {
            code: "ERR_INVALID_CONFIG",
            message: format!("{} must be an integer", key),
        }),
    }
}

fn parse_u16(value: Option<&String>, default: u16, key: &'static str) -> Result<u16, StartupError> {
    match value {
        None => Ok(default),
        Some(v) if v.trim().is_empty() => Ok(default),
        Some(v) => v.trim().parse::<u16>().map_err(|_| StartupError {
            code: "ERR_INVALID_CONFIG",
            message: format!("{} must be a port number", key),
        }),
    }
}

fn parse_bool(value: Option<&String>) -> Option<bool> {
    let value = value.map(|v| v.trim()).filter(|v| !v.is_empty())?;

    match value {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

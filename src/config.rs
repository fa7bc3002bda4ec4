use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use tracing::warn;

use crate::services::activities_service::SignupPolicy;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub policy: SignupPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            policy: SignupPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `STATIC_DIR`, `REJECT_DUPLICATE_SIGNUPS` and
    /// `ENFORCE_CAPACITY` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = parse_or("HOST", lookup("HOST"), defaults.host, |v| v.parse().ok());
        let port = parse_or("PORT", lookup("PORT"), defaults.port, |v| v.parse().ok());
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let policy = SignupPolicy {
            reject_duplicates: parse_or(
                "REJECT_DUPLICATE_SIGNUPS",
                lookup("REJECT_DUPLICATE_SIGNUPS"),
                defaults.policy.reject_duplicates,
                parse_bool,
            ),
            enforce_capacity: parse_or(
                "ENFORCE_CAPACITY",
                lookup("ENFORCE_CAPACITY"),
                defaults.policy.enforce_capacity,
                parse_bool,
            ),
        };

        Self {
            host,
            port,
            static_dir,
            policy,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Next port up, used when the configured one is taken.
    pub fn fallback_addr(&self) -> Option<SocketAddr> {
        self.port
            .checked_add(1)
            .map(|port| SocketAddr::new(self.host, port))
    }
}

fn parse_or<T: Copy>(
    key: &str,
    raw: Option<String>,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match parse(raw.trim()) {
        Some(v) => v,
        None => {
            warn!(key, value = %raw, "Ignoring unparseable config value, using default");
            default
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

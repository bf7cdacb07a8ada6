//! Listener and static-file settings for the intake server.

use std::path::{Path, PathBuf};

pub const INTAKE_ADDR: &str = "INTAKE_ADDR";
pub const PORT: &str = "PORT";
pub const INTAKE_PUBLIC_DIR: &str = "INTAKE_PUBLIC_DIR";

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Where the server listens and which directory holds the form page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    addr: String,
    public_dir: PathBuf,
}

impl ServerConfig {
    /// `INTAKE_ADDR` wins over `PORT`; a bare `PORT` listens on all interfaces.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let addr = value(INTAKE_ADDR)
            .or_else(|| value(PORT).map(|port| format!("0.0.0.0:{port}")))
            .unwrap_or_else(|| DEFAULT_ADDR.into());
        let public_dir = value(INTAKE_PUBLIC_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR));

        Self { addr, public_dir }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &str)]) -> ServerConfig {
        ServerConfig::from_lookup(|name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        })
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.addr(), "0.0.0.0:3000");
        assert_eq!(cfg.public_dir(), Path::new("public"));
    }

    #[test]
    fn test_port_and_addr_precedence() {
        assert_eq!(config(&[(PORT, "8080")]).addr(), "0.0.0.0:8080");
        assert_eq!(
            config(&[(PORT, "8080"), (INTAKE_ADDR, "127.0.0.1:4000")]).addr(),
            "127.0.0.1:4000"
        );
        assert_eq!(config(&[(INTAKE_ADDR, "  ")]).addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_public_dir_override() {
        let cfg = config(&[(INTAKE_PUBLIC_DIR, "/srv/intake")]);
        assert_eq!(cfg.public_dir(), Path::new("/srv/intake"));
    }
}

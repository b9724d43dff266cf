use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config/server.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid port: {0}")]
    InvalidPort(String),
    #[error("Frontend build not found at {0}")]
    MissingDist(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output directory holding the compiled site.
    pub dist_dir: PathBuf,
    pub index_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            dist_dir: PathBuf::from("frontend/dist"),
            index_file: "index.html".to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads `SITE_CONFIG` (or the default config file when present), then
    /// applies `HOST`, `PORT` and `DIST_DIR` from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match env::var("SITE_CONFIG") {
            Ok(path) => Self::from_yaml_file(Path::new(&path))?,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_yaml_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            Err(_) => {
                log::info!("No config file found, using defaults");
                Self::default()
            }
        };

        base.with_overrides(|key| env::var(key).ok())
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(serde_yaml::from_str(&contents)?)
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = parse_port(&port)?;
        }
        if let Some(dist_dir) = lookup("DIST_DIR") {
            self.dist_dir = PathBuf::from(dist_dir);
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port.to_string()));
        }
        let index = self.index_path();
        if !index.is_file() {
            return Err(ConfigError::MissingDist(index));
        }
        Ok(())
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join(&self.index_file)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidPort(raw.to_string())),
        Ok(port) => Ok(port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn yaml_fields_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.yaml");
        std::fs::write(&path, "port: 9000\n").unwrap();

        let config = ServerConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.index_file, "index.html");
    }

    #[test]
    fn env_overrides_beat_file_values() {
        let vars = env_of(&[("PORT", "3000"), ("DIST_DIR", "/srv/site")]);
        let config = ServerConfig {
            port: 9000,
            ..ServerConfig::default()
        }
        .with_overrides(|key| vars.get(key).cloned())
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn bad_ports_are_rejected() {
        for raw in ["0", "http", "70000"] {
            let vars = env_of(&[("PORT", raw)]);
            let result = ServerConfig::default().with_overrides(|key| vars.get(key).cloned());
            assert!(matches!(result, Err(ConfigError::InvalidPort(_))), "{raw}");
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ServerConfig::from_yaml_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn validate_requires_built_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::MissingDist(_))));

        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        assert!(config.validate().is_ok());
    }
}

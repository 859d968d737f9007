use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("site bundle not found: {0} has no index.html (run `trunk build` in frontend/ first)")]
    MissingBundle(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    fn from_var(value: Option<&str>) -> Self {
        match value {
            Some("development") => Environment::Development,
            Some("staging") => Environment::Staging,
            _ => Environment::Production,
        }
    }

    fn default_port(self) -> u16 {
        match self {
            // staging runs next to prod on the same host
            Environment::Staging => 3100,
            _ => 3000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub dist_dir: PathBuf,
    pub port: u16,
    pub environment: Environment,
}

impl ServerConfig {
    /// Reads `SITE_DIST_DIR`, `PORT` and `ENVIRONMENT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_var(lookup("ENVIRONMENT").as_deref());
        let port = match lookup("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => environment.default_port(),
        };
        let dist_dir = lookup("SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("dist"));
        Ok(Self {
            dist_dir,
            port,
            environment,
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index_file().is_file() {
            Ok(())
        } else {
            Err(ConfigError::MissingBundle(self.dist_dir.clone()))
        }
    }
}

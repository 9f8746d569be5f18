//! Connection and server settings.
//!
//! Resolution order (lowest to highest priority):
//! 1. Built-in defaults (the `postgres-db` container of the compose setup)
//! 2. TOML file: `--config PATH`, else `~/.empdash/config.toml` if present
//! 3. `EMPDASH_*` environment variables
//! 4. CLI flags (applied by the binary)

use std::fmt;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{DashError, Result};

pub const ENV_DB_HOST: &str = "EMPDASH_DB_HOST";
pub const ENV_DB_NAME: &str = "EMPDASH_DB_NAME";
pub const ENV_DB_USER: &str = "EMPDASH_DB_USER";
pub const ENV_DB_PASSWORD: &str = "EMPDASH_DB_PASSWORD";
pub const ENV_DB_PORT: &str = "EMPDASH_DB_PORT";
pub const ENV_BIND: &str = "EMPDASH_BIND";

const DEFAULT_PORT: u16 = 5432;
const DEFAULT_BIND: ([u8; 4], u16) = ([127, 0, 0, 1], 8501);

/// The four connection values plus port.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub port: u16,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "postgres-db".to_string(),
            dbname: "mydb".to_string(),
            user: "myuser".to_string(),
            password: "mypassword".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

// Never print the password.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"********")
            .field("port", &self.port)
            .finish()
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashConfig {
    pub database: DatabaseConfig,
    /// Address the web dashboard binds to
    pub bind: SocketAddr,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            bind: SocketAddr::from(DEFAULT_BIND),
        }
    }
}

/// On-disk shape; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    database: Option<DatabaseSection>,
    server: Option<ServerSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatabaseSection {
    host: Option<String>,
    dbname: Option<String>,
    user: Option<String>,
    password: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServerSection {
    bind: Option<String>,
}

impl DashConfig {
    /// ~/.empdash
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".empdash"))
    }

    /// ~/.empdash/config.toml
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Resolve defaults, config file and process environment.
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(DashError::config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                config.apply_file(path)?;
            }
            None => {
                if let Some(default) = Self::default_path().filter(|p| p.exists()) {
                    config.apply_file(&default)?;
                } else {
                    debug!("No config file found, using defaults");
                }
            }
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay values from a TOML file.
    pub fn apply_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)?;
        self.apply_toml(&content)
            .map_err(|e| match e {
                DashError::Toml { source, .. } => DashError::toml(path, source),
                other => other,
            })?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(())
    }

    /// Overlay values from TOML text.
    pub fn apply_toml(&mut self, content: &str) -> Result<()> {
        let file: FileConfig =
            toml::from_str(content).map_err(|e| DashError::toml("<inline>", e))?;

        if let Some(db) = file.database {
            overlay(&mut self.database.host, db.host);
            overlay(&mut self.database.dbname, db.dbname);
            overlay(&mut self.database.user, db.user);
            overlay(&mut self.database.password, db.password);
            overlay(&mut self.database.port, db.port);
        }
        if let Some(bind) = file.server.and_then(|s| s.bind) {
            self.bind = parse_bind("server.bind", &bind)?;
        }
        Ok(())
    }

    /// Overlay `EMPDASH_*` variables obtained through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        overlay(&mut self.database.host, lookup(ENV_DB_HOST));
        overlay(&mut self.database.dbname, lookup(ENV_DB_NAME));
        overlay(&mut self.database.user, lookup(ENV_DB_USER));
        overlay(&mut self.database.password, lookup(ENV_DB_PASSWORD));

        if let Some(port) = lookup(ENV_DB_PORT) {
            self.database.port = port.trim().parse().map_err(|_| {
                DashError::config(format!("{ENV_DB_PORT} must be a port number, got '{port}'"))
            })?;
        }
        if let Some(bind) = lookup(ENV_BIND) {
            self.bind = parse_bind(ENV_BIND, &bind)?;
        }
        Ok(())
    }
}

fn overlay<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn parse_bind(source: &str, value: &str) -> Result<SocketAddr> {
    value.trim().parse().map_err(|_| {
        DashError::config(format!("{source} must be an address like 127.0.0.1:8501, got '{value}'"))
    })
}

impl fmt::Display for DashConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[database]")?;
        writeln!(f, "host = {:?}", self.database.host)?;
        writeln!(f, "dbname = {:?}", self.database.dbname)?;
        writeln!(f, "user = {:?}", self.database.user)?;
        writeln!(f, "password = \"********\"")?;
        writeln!(f, "port = {}", self.database.port)?;
        writeln!(f)?;
        writeln!(f, "[server]")?;
        write!(f, "bind = \"{}\"", self.bind)
    }
}

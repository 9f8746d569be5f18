pub mod config;
pub mod serve;
pub mod show;

use clap::Args;
use empdash_core::DashConfig;

/// Connection flags shared by every subcommand; they override config file
/// and environment values.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// Database host
    #[arg(long, global = true, value_name = "HOST")]
    pub host: Option<String>,

    /// Database name
    #[arg(long, global = true, value_name = "NAME")]
    pub dbname: Option<String>,

    /// Database user
    #[arg(long, global = true, value_name = "USER")]
    pub user: Option<String>,

    /// Database password
    #[arg(long, global = true, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Database port
    #[arg(long, global = true, value_name = "PORT")]
    pub port: Option<u16>,
}

impl ConnectionArgs {
    pub fn apply(self, config: &mut DashConfig) {
        let db = &mut config.database;
        if let Some(host) = self.host {
            db.host = host;
        }
        if let Some(dbname) = self.dbname {
            db.dbname = dbname;
        }
        if let Some(user) = self.user {
            db.user = user;
        }
        if let Some(password) = self.password {
            db.password = password;
        }
        if let Some(port) = self.port {
            db.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_only_given_values() {
        let mut config = DashConfig::default();
        ConnectionArgs {
            host: Some("localhost".into()),
            port: Some(5433),
            ..Default::default()
        }
        .apply(&mut config);

        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5433);
        assert_eq!(config.database.dbname, "mydb");
        assert_eq!(config.database.password, "mypassword");
    }
}

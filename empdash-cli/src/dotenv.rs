use std::path::PathBuf;

use empdash_core::DashConfig;

/// Load environment variables from .env files and return the files read.
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.empdash/.env
///
/// Runs before tracing is initialized so that RUST_LOG can come from a
/// .env file; the caller logs the returned paths.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(env_file) = DashConfig::config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded_from.push(env_file);
        }
    }

    loaded_from
}

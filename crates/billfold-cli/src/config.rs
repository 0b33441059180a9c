use anyhow::{Result, anyhow};
use billfold_app::Session;
use billfold_types::{User, UserRole};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the billfold data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. BILLFOLD_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.billfold (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("BILLFOLD_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("billfold"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".billfold"));
    }

    Err(anyhow!(
        "Could not determine data directory: no HOME directory or XDG data directory found"
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// The persisted user record: the session-storage collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub user: Option<UserConfig>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the session value object handed to controllers.
    pub fn session(&self) -> Option<Session> {
        self.user.as_ref().map(|user| {
            Session::new(User {
                role: user.role,
                email: user.email.clone(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default_has_no_user() {
        let config = Config::default();
        assert!(config.user.is_none());
        assert!(config.session().is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            user: Some(UserConfig {
                email: "employee@test.tld".to_string(),
                role: UserRole::Employee,
            }),
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        let session = loaded.session().expect("session should be configured");
        assert_eq!(session.email(), "employee@test.tld");
        assert_eq!(session.role(), UserRole::Employee);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert!(config.user.is_none());

        Ok(())
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let resolved = resolve_data_dir(Some("/tmp/billfold-test")).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/billfold-test"));
    }
}

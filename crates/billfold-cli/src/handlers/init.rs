use std::path::Path;

use anyhow::Result;
use billfold_types::UserRole;

use crate::config::{Config, UserConfig};

pub fn handle(data_dir: &Path, email: String, admin: bool) -> Result<()> {
    let role = if admin {
        UserRole::Admin
    } else {
        UserRole::Employee
    };

    let config_path = data_dir.join("config.toml");
    let mut config = Config::load_from(&config_path)?;
    config.user = Some(UserConfig {
        email: email.clone(),
        role,
    });
    config.save_to(&config_path)?;

    println!("Configured {} ({})", email, role.as_str());
    Ok(())
}

use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Growthmap configuration
# Omitted sections fall back to the built-in audit figures.

[projection]
royalty_rate = 0.003
checkpoints = [0, 30, 60, 90]

[[metrics]]
name = "spotify_listeners"
current = 2
target = 500

[[metrics]]
name = "instagram_followers"
current = 33
target = 300

[[metrics]]
name = "youtube_subscribers"
current = 849
target = 1000

[[metrics]]
name = "tiktok_followers"
current = 1
target = 500

[[metrics]]
name = "facebook_followers"
current = 3
target = 100

[[metrics]]
name = "email_subscribers"
current = 0
target = 100

[[metrics]]
name = "total_streams"
current = 1000
target = 15000

[[scenarios]]
tier = "organic"
monthly_amount = 0
multiplier = 0.2
listeners = [{ day = 30, value = 8 }, { day = 60, value = 20 }, { day = 90, value = 40 }]
streams = [{ day = 30, value = 1150 }, { day = 60, value = 1400 }, { day = 90, value = 1800 }]

[[scenarios]]
tier = "entry"
monthly_amount = 50
multiplier = 0.5
channel_splits = { instagram_reels = 30, facebook_ads = 20 }
listeners = [{ day = 30, value = 30 }, { day = 60, value = 110 }, { day = 90, value = 200 }]
streams = [{ day = 30, value = 1600 }, { day = 60, value = 3200 }, { day = 90, value = 5500 }]
"#;

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    log::info!("Wrote default configuration to {}", config_path.display());
    Ok(())
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(&PathBuf::from(CONFIG_FILE_NAME), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_parses() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.metrics.len(), 7);
        assert_eq!(config.scenarios.len(), 2);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        init_config_at(&path, false).unwrap();
        assert!(init_config_at(&path, false).is_err());
        assert!(init_config_at(&path, true).is_ok());
    }
}

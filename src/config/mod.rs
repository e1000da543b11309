// Sub-modules
pub mod defaults;
pub mod presets;
mod scoring;

// Core configuration types
mod core;
mod loader;
pub mod validation;

pub use scoring::{category_warnings, default_categories, is_valid_score, is_valid_weight};

pub use core::{find_metric, GrowthmapConfig};

pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScenarioTier;

    #[test]
    fn test_empty_toml_uses_builtin_figures() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, GrowthmapConfig::default());
    }

    #[test]
    fn test_parse_and_validate_config_partial_override() {
        let toml_content = r#"
[[metrics]]
name = "spotify_listeners"
current = 40
target = 800

[projection]
royalty_rate = 0.004
"#;
        let config = parse_and_validate_config(toml_content).unwrap();
        assert_eq!(config.metrics.len(), 7);
        assert_eq!(config.metrics[0].name, "spotify_listeners");
        assert_eq!(config.metric("spotify_listeners").unwrap().target, 800.0);
        assert_eq!(config.metric("total_streams").unwrap().current, 1000.0);
        assert_eq!(config.projection.royalty_rate, 0.004);
        assert_eq!(config.projection.checkpoints, vec![0, 30, 60, 90]);
        assert_eq!(config.scenarios.len(), 4);
    }

    #[test]
    fn test_parse_and_validate_config_invalid_toml() {
        let result = parse_and_validate_config("invalid toml [[ content");
        assert!(result.unwrap_err().contains("Failed to parse"));
    }

    #[test]
    fn test_parse_scenario_with_tier_name() {
        let toml_content = r#"
[[scenarios]]
tier = "entry"
monthly_amount = 40
multiplier = 0.6
channel_splits = { instagram_reels = 40 }
listeners = [{ day = 30, value = 25 }]
"#;
        let config = parse_and_validate_config(toml_content).unwrap();
        assert_eq!(config.scenarios.len(), 1);
        assert_eq!(config.scenarios[0].tier, ScenarioTier::Entry);
        assert!(config.scenarios[0].streams.is_empty());
    }

    #[test]
    fn test_unbalanced_splits_rejected() {
        let toml_content = r#"
[[scenarios]]
tier = "standard"
monthly_amount = 100
channel_splits = { instagram_reels = 60 }
"#;
        let err = parse_and_validate_config(toml_content).unwrap_err();
        assert!(err.contains("channel splits sum to 60.00"));
    }

    #[test]
    fn test_unknown_metric_lookup() {
        let config = GrowthmapConfig::default();
        assert!(config.metric("soundcloud_plays").is_err());
    }

    #[test]
    fn test_directory_ancestors_generates_correct_sequence() {
        use std::path::PathBuf;

        let start = PathBuf::from("/a/b/c/d");
        let ancestors: Vec<PathBuf> = directory_ancestors(start, 3).collect();

        assert_eq!(ancestors.len(), 3);
        assert_eq!(ancestors[0], PathBuf::from("/a/b/c/d"));
        assert_eq!(ancestors[1], PathBuf::from("/a/b/c"));
        assert_eq!(ancestors[2], PathBuf::from("/a/b"));
    }

    #[test]
    fn test_directory_ancestors_handles_root() {
        use std::path::PathBuf;

        let ancestors: Vec<PathBuf> = directory_ancestors(PathBuf::from("/"), 5).collect();
        assert_eq!(ancestors, vec![PathBuf::from("/")]);
    }

    #[test]
    fn test_try_load_config_from_path_with_invalid_config() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "invalid toml content").unwrap();

        assert!(loader::try_load_config_from_path(&config_path).is_none());
        assert!(load_config_from(&config_path).is_err());
    }

    #[test]
    fn test_discover_config_in_parent_directory() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[projection]\ncheckpoints = [0, 45, 90]\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("reports").join("q3");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested);
        assert_eq!(config.projection.checkpoints, vec![0, 45, 90]);
    }
}

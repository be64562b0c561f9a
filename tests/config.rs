#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use traq::api::VaultConfig;
    use traq::libs::config::{Config, MonitorConfig, TrackerConfig};

    /// Redirects the platform data directory into a tempdir so config tests
    /// never touch the real user profile.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config_has_no_modules(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.vault.is_none());
        assert!(config.monitor.is_none());
        assert!(config.tracker.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_without_file_returns_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.vault.is_none());
        assert!(config.monitor.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            vault: Some(VaultConfig {
                api_url: "https://vault.example.com".to_string(),
                api_key: "key123".to_string(),
            }),
            monitor: Some(MonitorConfig { idle_threshold: 90 }),
            tracker: Some(TrackerConfig {
                flush_interval: 45,
                freshness_window: 120,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.vault.unwrap().api_url, "https://vault.example.com");
        assert_eq!(loaded.monitor.unwrap().idle_threshold, 90);
        let tracker = loaded.tracker.unwrap();
        assert_eq!(tracker.flush_interval, 45);
        assert_eq!(tracker.freshness_window, 120);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_modules_are_omitted_from_json(_ctx: &mut ConfigTestContext) {
        let config = Config {
            monitor: Some(MonitorConfig::default()),
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("monitor"));
        assert!(!json.contains("vault"));
        assert!(!json.contains("tracker"));
    }

    #[test]
    fn test_module_defaults() {
        assert_eq!(MonitorConfig::default().idle_threshold, 60);
        let tracker = TrackerConfig::default();
        assert_eq!(tracker.flush_interval, 30);
        assert_eq!(tracker.freshness_window, 60);
    }
}

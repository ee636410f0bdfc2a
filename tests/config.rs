#[cfg(test)]
mod tests {
    use devdays::libs::config::{Config, ExportConfig, CONFIG_FILE_NAME};
    use devdays::libs::data_storage::DataStorage;
    use devdays::libs::export::ExportFormat;
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-wide, so config tests must not overlap
    static HOME_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a fresh temporary HOME for each test.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = HOME_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _guard: guard, temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.extra_lessons_dir.is_none());
        assert!(config.export.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            extra_lessons_dir: Some(ctx.temp_dir.path().join("lessons")),
            export: Some(ExportConfig {
                default_format: ExportFormat::Excel,
                output_dir: Some(PathBuf::from("/tmp/exports")),
            }),
        };
        config.save().unwrap();

        let storage = DataStorage::new();
        assert!(storage.base_path().ends_with("devdays"));

        let path = storage.get_path(CONFIG_FILE_NAME).unwrap();
        assert!(path.exists());
        assert!(path.starts_with(ctx.temp_dir.path()));

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_saved_json_shape(_ctx: &mut ConfigTestContext) {
        let config = Config {
            extra_lessons_dir: None,
            export: Some(ExportConfig::default()),
        };
        config.save().unwrap();

        let raw = std::fs::read_to_string(Config::path().unwrap()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(json.get("extra_lessons_dir").is_none());
        assert_eq!(json["export"]["default_format"], "csv");
        assert!(json["export"].get("output_dir").is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_invalid_config(_ctx: &mut ConfigTestContext) {
        std::fs::write(Config::path().unwrap(), "{ not json").unwrap();
        assert!(Config::read().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());

        Config::default().save().unwrap();
        assert!(Config::path().unwrap().exists());

        assert!(Config::delete().unwrap());
        assert!(!Config::path().unwrap().exists());
    }
}

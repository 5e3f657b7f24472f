use super::*;

use std::io::Write;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_use_builtin_seed_and_info_logging() {
    let settings = Settings::default();
    assert_eq!(settings.seed_path, None);
    assert_eq!(settings.window_title, "Article Manager");
    assert_eq!(settings.log_filter, "info");
    assert!(settings.initial_search.is_empty());
}

#[test]
fn reads_known_keys_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "seed_path = \"data/articles.json\"\nwindow_title = \"Blog\"\ninitial_search = \"rust\""
    )
    .expect("write config");

    let mut settings = Settings::default();
    apply_file(&mut settings, file.path()).expect("apply config");

    assert_eq!(settings.seed_path, Some(PathBuf::from("data/articles.json")));
    assert_eq!(settings.window_title, "Blog");
    assert_eq!(settings.initial_search, "rust");
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn explicit_missing_config_file_is_reported() {
    let err = load_settings_from(Path::new("/no/such/articles.toml")).expect_err("missing file");
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("/no/such/articles.toml"));
}

#[test]
fn malformed_config_file_is_reported_and_leaves_settings_untouched() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "this is = = not toml").expect("write config");

    let mut settings = Settings::default();
    let err = apply_file(&mut settings, file.path()).expect_err("malformed");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(settings, Settings::default());
}

#[test]
fn env_overrides_take_precedence_over_file_values() {
    let mut settings = Settings {
        window_title: "From file".into(),
        ..Settings::default()
    };
    apply_env_overrides(
        &mut settings,
        env_from(&[
            ("APP__WINDOW_TITLE", "From env"),
            ("APP__SEED_PATH", "/tmp/seed.json"),
            ("RUST_LOG", "warn"),
            ("APP__LOG_FILTER", "debug"),
        ]),
    );

    assert_eq!(settings.window_title, "From env");
    assert_eq!(settings.seed_path, Some(PathBuf::from("/tmp/seed.json")));
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn blank_seed_path_env_is_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, env_from(&[("APP__SEED_PATH", "  ")]));
    assert_eq!(settings.seed_path, None);
}

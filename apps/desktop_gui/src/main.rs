use std::path::{Path, PathBuf};

mod controller;
mod ui;

use anyhow::anyhow;
use article_store::{
    env_settings, load_settings, load_settings_from, resolve_seed, ArticleStore, ConfigError,
    SeedError, Settings,
};
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::controller::events::UiError;
use crate::ui::{ArticleManagerApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "article-manager", about = "Browse, search, edit and delete articles")]
struct Args {
    /// Settings file (defaults to ./articles.toml or the user config dir).
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON array of `{ id, titre, contenu }` records to start from.
    #[arg(long)]
    seed: Option<PathBuf>,
    #[arg(long)]
    search: Option<String>,
}

/// Falls back to defaults plus env overrides when the config file fails; the
/// error is handed back so it can be logged once tracing is up.
fn resolve_settings(config: Option<&Path>) -> (Settings, Option<ConfigError>) {
    let loaded = match config {
        Some(path) => load_settings_from(path),
        None => load_settings(),
    };
    match loaded {
        Ok(settings) => (settings, None),
        Err(err) => (env_settings(), Some(err)),
    }
}

fn load_store(seed_path: Option<&Path>) -> Result<ArticleStore, SeedError> {
    let articles = resolve_seed(seed_path)?;
    Ok(ArticleStore::new(articles)?)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (settings, config_error) = resolve_settings(args.config.as_deref());

    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut startup_errors = Vec::new();
    if let Some(err) = &config_error {
        tracing::warn!(error = %err, "skipping config file; using default settings");
        // A default-location file is best effort; an explicit --config is not.
        if args.config.is_some() {
            startup_errors.push(UiError::from_config(err));
        }
    }

    let startup = StartupConfig::from_settings(settings, args.seed, args.search);
    let store = match load_store(startup.seed_path.as_deref()) {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(error = %err, "falling back to sample articles");
            startup_errors.push(UiError::from_seed(&err));
            ArticleStore::with_sample_articles()
        }
    };
    tracing::info!(
        articles = store.articles().len(),
        title = %startup.window_title,
        "starting article manager"
    );

    let app = ArticleManagerApp::bootstrap(store, &startup, startup_errors);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(startup.window_title.clone())
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        &startup.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow!("article manager window failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_cli_overrides() {
        let args = Args::parse_from(["article-manager", "--seed", "a.json", "--search", "rust"]);
        assert_eq!(args.seed, Some(PathBuf::from("a.json")));
        assert_eq!(args.search.as_deref(), Some("rust"));
        assert_eq!(args.config, None);
    }

    #[test]
    fn duplicate_seed_ids_surface_as_seed_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(br#"[{"id":1,"titre":"a","contenu":"a"},{"id":1,"titre":"b","contenu":"b"}]"#)
            .expect("write seed");
        let err = load_store(Some(file.path())).expect_err("duplicate ids");
        assert!(matches!(err, SeedError::Invalid(_)));
    }

    #[test]
    fn explicit_missing_config_is_reported_with_default_settings() {
        let (settings, err) = resolve_settings(Some(Path::new("/no/such/articles.toml")));
        assert!(matches!(err, Some(ConfigError::Read { .. })));
        assert_eq!(settings.window_title, env_settings().window_title);
    }

    #[test]
    fn explicit_config_file_is_applied() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "window_title = \"Newsroom\"").expect("write config");
        let (settings, err) = resolve_settings(Some(file.path()));
        assert!(err.is_none());
        if std::env::var("APP__WINDOW_TITLE").is_err() {
            assert_eq!(settings.window_title, "Newsroom");
        }
    }

    #[test]
    fn builtin_seed_without_path() {
        let store = load_store(None).expect("store");
        assert_eq!(store.articles().len(), 3);
    }
}

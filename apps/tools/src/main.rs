use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use article_store::{load_settings, load_settings_from, resolve_seed, ArticleStore, Settings};
use clap::{Parser, Subcommand};
use shared::{
    domain::{ArticleField, ArticleId},
    protocol::Intent,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    /// Settings file (defaults to ./articles.toml or the user config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// JSON seed file; overrides `seed_path` from the settings.
    #[arg(long, global = true)]
    seed: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List {
        #[arg(long, default_value = "")]
        search: String,
    },
    Delete {
        id: i64,
    },
    Edit {
        id: i64,
        #[arg(long)]
        titre: Option<String>,
        #[arg(long)]
        contenu: Option<String>,
    },
    /// Applies a JSON array of intents in order and prints the final view.
    Replay {
        script: PathBuf,
    },
}

/// An explicit `--config` must load; the default location is optional.
fn settings_for(config: Option<&Path>) -> Result<Settings> {
    let settings = match config {
        Some(path) => load_settings_from(path)?,
        None => load_settings()?,
    };
    Ok(settings)
}

fn run(command: Command, seed: Option<&Path>) -> Result<serde_json::Value> {
    let articles = resolve_seed(seed)?;
    let mut store = ArticleStore::new(articles).context("seed articles are inconsistent")?;

    let value = match command {
        Command::List { search } => {
            store.search(search);
            serde_json::to_value(store.filtered())?
        }
        Command::Delete { id } => {
            store.delete(ArticleId(id));
            serde_json::to_value(store.articles())?
        }
        Command::Edit { id, titre, contenu } => {
            store.begin_edit_by_id(ArticleId(id))?;
            if let Some(titre) = titre {
                store.update_field(ArticleField::Titre, titre);
            }
            if let Some(contenu) = contenu {
                store.update_field(ArticleField::Contenu, contenu);
            }
            store.commit_edit();
            serde_json::to_value(store.articles())?
        }
        Command::Replay { script } => {
            let raw = fs::read_to_string(&script)
                .with_context(|| format!("failed to read script '{}'", script.display()))?;
            let intents: Vec<Intent> = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse script '{}'", script.display()))?;
            for intent in intents {
                store.dispatch(intent);
            }
            serde_json::to_value(store.view_state())?
        }
    };
    Ok(value)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = settings_for(cli.config.as_deref())?;

    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seed = cli.seed.or(settings.seed_path);
    let value = run(cli.command, seed.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

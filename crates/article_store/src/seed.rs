//! Startup data for the collection.

use std::{
    fs,
    path::{Path, PathBuf},
};

use shared::{
    domain::{Article, ArticleField},
    error::StoreError,
};
use thiserror::Error;
use tracing::info;

use crate::ensure_unique_ids;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse seed file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid seed data: {0}")]
    Invalid(#[from] StoreError),
}

pub fn sample_articles() -> Vec<Article> {
    vec![
        Article::new(1, "First Article", "This is the first article content"),
        Article::new(2, "Second Article", "This is the second article content"),
        Article::new(3, "Third Article", "This is the third article content"),
    ]
}

/// Parses a JSON array of `{ id, titre, contenu }` records.
pub fn parse_seed(raw: &str) -> Result<Vec<Article>, serde_json::Error> {
    serde_json::from_str(raw)
}

pub fn load_seed(path: &Path) -> Result<Vec<Article>, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let articles = parse_seed(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    ensure_unique_ids(&articles)?;
    ensure_fields_present(&articles)?;
    info!(
        path = %path.display(),
        count = articles.len(),
        "loaded seed articles"
    );
    Ok(articles)
}

/// Seed records need a non-blank title and content.
pub fn ensure_fields_present(articles: &[Article]) -> Result<(), StoreError> {
    for article in articles {
        for field in [ArticleField::Titre, ArticleField::Contenu] {
            if article.field(field).trim().is_empty() {
                return Err(StoreError::Validation {
                    id: article.id,
                    field,
                });
            }
        }
    }
    Ok(())
}

/// Seed file when configured, built-in sample articles otherwise.
pub fn resolve_seed(path: Option<&Path>) -> Result<Vec<Article>, SeedError> {
    match path {
        Some(path) => load_seed(path),
        None => Ok(sample_articles()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use shared::domain::ArticleId;

    use super::*;

    fn seed_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write seed");
        file
    }

    #[test]
    fn sample_articles_have_distinct_ids_in_order() {
        let ids: Vec<i64> = sample_articles().iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn loads_articles_from_json_file() {
        let file = seed_file(r#"[{"id": 10, "titre": "Ten", "contenu": "x"}]"#);
        let articles = load_seed(file.path()).expect("load");
        assert_eq!(articles, vec![Article::new(10, "Ten", "x")]);
    }

    #[test]
    fn rejects_records_with_missing_fields() {
        let file = seed_file(r#"[{"id": 1, "titre": "No content"}]"#);
        let err = load_seed(file.path()).expect_err("missing field");
        assert!(matches!(err, SeedError::Parse { .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let file = seed_file(
            r#"[{"id": 1, "titre": "a", "contenu": "a"}, {"id": 1, "titre": "b", "contenu": "b"}]"#,
        );
        let err = load_seed(file.path()).expect_err("duplicate");
        assert!(matches!(
            err,
            SeedError::Invalid(StoreError::DuplicateId(ArticleId(1)))
        ));
    }

    #[test]
    fn rejects_blank_fields() {
        let file = seed_file(r#"[{"id": 1, "titre": "", "contenu": ""}]"#);
        let err = load_seed(file.path()).expect_err("blank title");
        assert!(matches!(
            err,
            SeedError::Invalid(StoreError::Validation {
                id: ArticleId(1),
                field: ArticleField::Titre,
            })
        ));

        let file = seed_file(r#"[{"id": 2, "titre": "ok", "contenu": "   "}]"#);
        let err = load_seed(file.path()).expect_err("blank content");
        assert_eq!(
            err.to_string(),
            "invalid seed data: article 2: field 'contenu' must not be empty"
        );
    }

    #[test]
    fn reports_unreadable_path() {
        let err = load_seed(Path::new("/definitely/not/here.json")).expect_err("missing file");
        assert!(matches!(err, SeedError::Read { .. }));
    }

    #[test]
    fn falls_back_to_sample_articles_without_path() {
        assert_eq!(resolve_seed(None).expect("seed"), sample_articles());
    }
}

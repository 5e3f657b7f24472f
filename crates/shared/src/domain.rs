use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ArticleId);

/// A single record of the collection. `id` is fixed once the article exists;
/// edits replace `titre` and `contenu` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub titre: String,
    pub contenu: String,
}

impl Article {
    pub fn new(id: i64, titre: impl Into<String>, contenu: impl Into<String>) -> Self {
        Self {
            id: ArticleId(id),
            titre: titre.into(),
            contenu: contenu.into(),
        }
    }

    pub fn field(&self, field: ArticleField) -> &str {
        match field {
            ArticleField::Titre => &self.titre,
            ArticleField::Contenu => &self.contenu,
        }
    }

    /// Case-insensitive substring match over title and content.
    /// `needle_lower` must already be lowercased.
    pub fn matches_lowercase(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.titre.to_lowercase().contains(needle_lower)
            || self.contenu.to_lowercase().contains(needle_lower)
    }
}

/// Editable fields of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleField {
    Titre,
    Contenu,
}

impl ArticleField {
    pub fn label(self) -> &'static str {
        match self {
            ArticleField::Titre => "Title",
            ArticleField::Contenu => "Content",
        }
    }

    /// Wire name, as used in seed files and intent scripts.
    pub fn key(self) -> &'static str {
        match self {
            ArticleField::Titre => "titre",
            ArticleField::Contenu => "contenu",
        }
    }
}

impl fmt::Display for ArticleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

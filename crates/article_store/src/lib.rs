//! In-memory article collection with search filtering and draft-based editing.
//!
//! The free functions are the transitions themselves: they take the current
//! value and return the next one. [`ArticleStore`] owns the single live
//! instance of that state for a view and routes [`Intent`]s through them.

use std::collections::HashSet;

use shared::{
    domain::{Article, ArticleField, ArticleId},
    error::StoreError,
    protocol::{Intent, Outcome, ViewState},
};
use tracing::{debug, warn};

pub mod config;
pub mod seed;

pub use config::{env_settings, load_settings, load_settings_from, ConfigError, Settings};
pub use seed::{load_seed, resolve_seed, sample_articles, SeedError};

/// Working copy of one article. Each field edit produces a new snapshot; the
/// committed collection is untouched until [`commit_edit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    article: Article,
}

impl Draft {
    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn id(&self) -> ArticleId {
        self.article.id
    }

    pub fn with_field(&self, field: ArticleField, value: impl Into<String>) -> Self {
        let mut article = self.article.clone();
        match field {
            ArticleField::Titre => article.titre = value.into(),
            ArticleField::Contenu => article.contenu = value.into(),
        }
        Self { article }
    }

    pub fn into_article(self) -> Article {
        self.article
    }
}

/// Articles whose title or content contains `term`, ignoring case, in
/// collection order. An empty term keeps everything.
pub fn filter<'a>(collection: &'a [Article], term: &str) -> Vec<&'a Article> {
    let needle = term.to_lowercase();
    collection
        .iter()
        .filter(|article| article.matches_lowercase(&needle))
        .collect()
}

/// Removes the article with `id`. Absent ids leave the collection as is.
pub fn delete(mut collection: Vec<Article>, id: ArticleId) -> Vec<Article> {
    collection.retain(|article| article.id != id);
    collection
}

pub fn begin_edit(article: &Article) -> Draft {
    Draft {
        article: article.clone(),
    }
}

pub fn update_field(draft: &Draft, field: ArticleField, value: impl Into<String>) -> Draft {
    draft.with_field(field, value)
}

/// Replaces the entry sharing the draft's id, keeping its position. The draft
/// is consumed either way; a draft whose id is gone changes nothing.
pub fn commit_edit(mut collection: Vec<Article>, draft: Draft) -> Vec<Article> {
    let edited = draft.into_article();
    if let Some(slot) = collection.iter_mut().find(|article| article.id == edited.id) {
        *slot = edited;
    }
    collection
}

pub fn cancel_edit(_draft: Draft) -> Option<Draft> {
    None
}

pub fn ensure_unique_ids(articles: &[Article]) -> Result<(), StoreError> {
    let mut seen = HashSet::with_capacity(articles.len());
    for article in articles {
        if !seen.insert(article.id) {
            return Err(StoreError::DuplicateId(article.id));
        }
    }
    Ok(())
}

/// Owner of the committed collection, the search term and the optional draft.
///
/// Deleting the article under edit also drops the draft, so a present draft
/// always refers to an article still in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleStore {
    articles: Vec<Article>,
    search_term: String,
    editing: Option<Draft>,
}

impl ArticleStore {
    pub fn new(articles: Vec<Article>) -> Result<Self, StoreError> {
        ensure_unique_ids(&articles)?;
        Ok(Self {
            articles,
            search_term: String::new(),
            editing: None,
        })
    }

    pub fn with_sample_articles() -> Self {
        Self {
            articles: sample_articles(),
            search_term: String::new(),
            editing: None,
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn editing(&self) -> Option<&Article> {
        self.editing.as_ref().map(Draft::article)
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn filtered(&self) -> Vec<&Article> {
        filter(&self.articles, &self.search_term)
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            search_term: self.search_term.clone(),
            filtered: self.filtered().into_iter().cloned().collect(),
            total: self.articles.len(),
            editing: self.editing().cloned(),
        }
    }

    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        let name = intent.name();
        let outcome = match intent {
            Intent::Search { term } => self.search(term),
            Intent::BeginEdit { article } => self.begin_edit(&article),
            Intent::UpdateField { field, value } => self.update_field(field, value),
            Intent::CommitEdit => self.commit_edit(),
            Intent::CancelEdit => self.cancel_edit(),
            Intent::Delete { id } => self.delete(id),
        };
        debug!(intent = name, ?outcome, "applied intent");
        outcome
    }

    pub fn search(&mut self, term: impl Into<String>) -> Outcome {
        let term = term.into();
        if term == self.search_term {
            return Outcome::Unchanged;
        }
        self.search_term = term;
        Outcome::Changed
    }

    /// Starts a draft from `article`, replacing any unsaved draft. The article
    /// must belong to the collection.
    pub fn begin_edit(&mut self, article: &Article) -> Outcome {
        if self.get(article.id).is_none() {
            warn!(article_id = article.id.0, "begin_edit for article not in collection");
            return Outcome::Ignored;
        }
        if let Some(previous) = &self.editing {
            debug!(
                discarded_article_id = previous.id().0,
                "replacing unsaved draft"
            );
        }
        self.editing = Some(begin_edit(article));
        Outcome::Changed
    }

    pub fn begin_edit_by_id(&mut self, id: ArticleId) -> Result<Outcome, StoreError> {
        let article = self.get(id).cloned().ok_or(StoreError::NotFound(id))?;
        Ok(self.begin_edit(&article))
    }

    pub fn update_field(&mut self, field: ArticleField, value: impl Into<String>) -> Outcome {
        let Some(draft) = &self.editing else {
            debug!(?field, "update_field without active draft");
            return Outcome::Ignored;
        };
        let value = value.into();
        if draft.article().field(field) == value {
            return Outcome::Unchanged;
        }
        self.editing = Some(update_field(draft, field, value));
        Outcome::Changed
    }

    pub fn commit_edit(&mut self) -> Outcome {
        let Some(draft) = self.editing.take() else {
            debug!("commit_edit without active draft");
            return Outcome::Ignored;
        };
        let id = draft.id();
        if self.get(id).is_none() {
            warn!(article_id = id.0, "draft target no longer exists");
        }
        let articles = std::mem::take(&mut self.articles);
        self.articles = commit_edit(articles, draft);
        debug!(article_id = id.0, "committed draft");
        Outcome::Changed
    }

    pub fn cancel_edit(&mut self) -> Outcome {
        match self.editing.take() {
            Some(draft) => {
                self.editing = cancel_edit(draft);
                Outcome::Changed
            }
            None => Outcome::Unchanged,
        }
    }

    pub fn delete(&mut self, id: ArticleId) -> Outcome {
        let before = self.articles.len();
        let articles = std::mem::take(&mut self.articles);
        self.articles = delete(articles, id);
        if self.articles.len() == before {
            return Outcome::Unchanged;
        }
        if self.editing.as_ref().is_some_and(|draft| draft.id() == id) {
            debug!(article_id = id.0, "deleted article under edit; dropping draft");
            self.editing = None;
        }
        debug!(article_id = id.0, remaining = self.articles.len(), "deleted article");
        Outcome::Changed
    }
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::with_sample_articles()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

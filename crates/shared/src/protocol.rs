use serde::{Deserialize, Serialize};

use crate::domain::{Article, ArticleField, ArticleId};

/// User actions emitted by a view and applied to the store one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Intent {
    Search {
        term: String,
    },
    BeginEdit {
        article: Article,
    },
    UpdateField {
        field: ArticleField,
        value: String,
    },
    CommitEdit,
    CancelEdit,
    Delete {
        id: ArticleId,
    },
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Search { .. } => "search",
            Intent::BeginEdit { .. } => "begin_edit",
            Intent::UpdateField { .. } => "update_field",
            Intent::CommitEdit => "commit_edit",
            Intent::CancelEdit => "cancel_edit",
            Intent::Delete { .. } => "delete",
        }
    }
}

/// Result of applying one intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Collection, draft or search term changed.
    Changed,
    /// Intent was valid but had nothing to act on.
    Unchanged,
    /// Intent needs an active draft and none exists.
    Ignored,
}

/// Everything a view needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_term: String,
    pub filtered: Vec<Article>,
    pub total: usize,
    pub editing: Option<Article>,
}

//! View actions and error modeling for the desktop GUI controller.

use article_store::{ConfigError, SeedError};
use shared::{
    domain::{ArticleField, ArticleId},
    error::{ErrorCode, StoreError},
};

/// Actions collected while rendering a frame and applied once it is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Search(String),
    Edit(ArticleId),
    Field { field: ArticleField, value: String },
    Save,
    Cancel,
    Delete(ArticleId),
    DismissBanner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Config,
    Seed,
    NotFound,
    Conflict,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Startup,
    Edit,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_config(err: &ConfigError) -> Self {
        Self {
            category: UiErrorCategory::Config,
            context: UiErrorContext::Startup,
            message: err.to_string(),
        }
    }

    pub fn from_seed(err: &SeedError) -> Self {
        Self {
            category: UiErrorCategory::Seed,
            context: UiErrorContext::Startup,
            message: err.to_string(),
        }
    }

    pub fn from_store(context: UiErrorContext, err: &StoreError) -> Self {
        let category = match err.code() {
            ErrorCode::NotFound => UiErrorCategory::NotFound,
            ErrorCode::Conflict => UiErrorCategory::Conflict,
            ErrorCode::Validation => UiErrorCategory::Validation,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Banner text shown above the article table.
    pub fn banner_text(&self) -> String {
        match (self.context, self.category) {
            (UiErrorContext::Startup, UiErrorCategory::Seed) => {
                format!("{}. Showing the sample articles instead.", self.message)
            }
            (UiErrorContext::Startup, UiErrorCategory::Config) => {
                format!("{}. Using default settings.", self.message)
            }
            (UiErrorContext::Edit, UiErrorCategory::NotFound) => {
                "That article no longer exists.".to_string()
            }
            _ => self.message.clone(),
        }
    }
}

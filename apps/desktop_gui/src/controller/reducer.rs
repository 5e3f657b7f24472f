//! Maps view actions onto store intents.

use article_store::ArticleStore;
use shared::{error::StoreError, protocol::Intent};

use crate::controller::events::{UiAction, UiError, UiErrorContext};

/// `Ok(None)` for actions that stay inside the view layer.
pub fn intent_for(store: &ArticleStore, action: UiAction) -> Result<Option<Intent>, UiError> {
    let intent = match action {
        UiAction::Search(term) => Intent::Search { term },
        UiAction::Edit(id) => {
            let article = store.get(id).cloned().ok_or_else(|| {
                UiError::from_store(UiErrorContext::Edit, &StoreError::NotFound(id))
            })?;
            Intent::BeginEdit { article }
        }
        UiAction::Field { field, value } => Intent::UpdateField { field, value },
        UiAction::Save => Intent::CommitEdit,
        UiAction::Cancel => Intent::CancelEdit,
        UiAction::Delete(id) => Intent::Delete { id },
        UiAction::DismissBanner => return Ok(None),
    };
    Ok(Some(intent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::UiErrorCategory;
    use shared::domain::{ArticleField, ArticleId};

    #[test]
    fn edit_action_carries_the_committed_article() {
        let store = ArticleStore::with_sample_articles();
        let intent = intent_for(&store, UiAction::Edit(ArticleId(2)))
            .expect("mapped")
            .expect("intent");
        assert_eq!(
            intent,
            Intent::BeginEdit {
                article: store.articles()[1].clone()
            }
        );
    }

    #[test]
    fn edit_of_unknown_article_is_reported() {
        let store = ArticleStore::with_sample_articles();
        let err = intent_for(&store, UiAction::Edit(ArticleId(9))).expect_err("missing");
        assert_eq!(err.category(), UiErrorCategory::NotFound);
    }

    #[test]
    fn form_actions_map_one_to_one() {
        let store = ArticleStore::with_sample_articles();
        let field = intent_for(
            &store,
            UiAction::Field {
                field: ArticleField::Contenu,
                value: "body".into(),
            },
        )
        .expect("mapped");
        assert_eq!(
            field,
            Some(Intent::UpdateField {
                field: ArticleField::Contenu,
                value: "body".into()
            })
        );
        assert_eq!(
            intent_for(&store, UiAction::Save).expect("mapped"),
            Some(Intent::CommitEdit)
        );
        assert_eq!(
            intent_for(&store, UiAction::Cancel).expect("mapped"),
            Some(Intent::CancelEdit)
        );
        assert_eq!(
            intent_for(&store, UiAction::DismissBanner).expect("mapped"),
            None
        );
    }
}

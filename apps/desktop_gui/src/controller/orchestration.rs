//! Applies intents to the store and reports the result on the status line.

use article_store::ArticleStore;
use shared::protocol::{Intent, Outcome};

pub fn dispatch_intent(store: &mut ArticleStore, intent: Intent, status: &mut String) -> Outcome {
    let message = match &intent {
        Intent::Search { .. } => None,
        Intent::BeginEdit { article } => Some(format!("Editing article {}", article.id)),
        Intent::UpdateField { .. } => None,
        Intent::CommitEdit => store
            .editing()
            .map(|draft| format!("Saved article {}", draft.id)),
        Intent::CancelEdit => Some("Edit cancelled".to_string()),
        Intent::Delete { id } => Some(format!("Deleted article {id}")),
    };
    let name = intent.name();

    let outcome = store.dispatch(intent);
    match outcome {
        Outcome::Changed => {
            tracing::debug!(intent = name, "ui intent applied");
            if let Some(message) = message {
                *status = message;
            }
        }
        Outcome::Unchanged => {}
        Outcome::Ignored => {
            tracing::warn!(intent = name, "ui intent ignored");
            *status = format!("Ignored {name}: no matching article or active edit");
        }
    }
    outcome
}

pub fn summary_line(store: &ArticleStore) -> String {
    let shown = store.filtered().len();
    let total = store.articles().len();
    if store.search_term().is_empty() {
        format!("{shown} of {total} articles")
    } else {
        format!("{shown} of {total} articles match \"{}\"", store.search_term())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::ArticleId;

    #[test]
    fn delete_reports_removed_id() {
        let mut store = ArticleStore::with_sample_articles();
        let mut status = String::new();
        let outcome = dispatch_intent(&mut store, Intent::Delete { id: ArticleId(2) }, &mut status);
        assert_eq!(outcome, Outcome::Changed);
        assert_eq!(status, "Deleted article 2");
    }

    #[test]
    fn commit_reports_saved_id_and_ignored_commit_explains() {
        let mut store = ArticleStore::with_sample_articles();
        let mut status = String::new();
        store.begin_edit_by_id(ArticleId(1)).expect("article 1");
        dispatch_intent(&mut store, Intent::CommitEdit, &mut status);
        assert_eq!(status, "Saved article 1");

        let outcome = dispatch_intent(&mut store, Intent::CommitEdit, &mut status);
        assert_eq!(outcome, Outcome::Ignored);
        assert!(status.starts_with("Ignored commit_edit"));
    }

    #[test]
    fn summary_counts_filtered_rows() {
        let mut store = ArticleStore::with_sample_articles();
        assert_eq!(summary_line(&store), "3 of 3 articles");
        store.search("third");
        assert_eq!(summary_line(&store), "1 of 3 articles match \"third\"");
        store.search("");
        store.delete(ArticleId(1));
        assert_eq!(summary_line(&store), "2 of 2 articles");
    }
}

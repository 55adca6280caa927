use crate::errors::HistoryErr;
use crate::session::FormSession;
use crate::types::submission::HistoryEntryType;
use async_graphql::{Context, Object, Result};

#[derive(Default)]
pub struct HistoryQueries;

#[Object]
impl HistoryQueries {
    /// Every committed submission the attached history has recorded
    async fn history(&self, ctx: &Context<'_>) -> Result<Vec<HistoryEntryType>, HistoryErr> {
        let session = ctx
            .data::<FormSession>()
            .map_err(|e| HistoryErr { message: e.message })?;
        let form = session.lock().await;
        let entries = form.history()?;
        Ok(entries.into_iter().map(HistoryEntryType::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;

    #[tokio::test]
    async fn test_history_lists_commits() {
        let schema = create_test_schema();
        fill_valid_form(&schema, Some("hello")).await;
        execute(&schema, "mutation { submit { __typename } }").await;

        let data = execute(
            &schema,
            "{ history { id submittedAt record { firstName message } } }",
        )
        .await;

        let history = data["history"].as_array().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["record"]["firstName"], "abcde");
        assert_eq!(history[0]["record"]["message"], "hello");
        assert!(history[0]["id"].as_str().is_some());
    }
}

use async_graphql::Request;
use services::{ContactForm, MemoryHistory};

use crate::{build_schema, ContactFormSchema};

pub fn create_test_schema() -> ContactFormSchema {
    let form = ContactForm::new()
        .with_history(Box::new(MemoryHistory::new()))
        .expect("memory history never fails to init");
    build_schema(form)
}

/// Run a document and return its data, failing the test on any error
pub async fn execute(schema: &ContactFormSchema, query: &str) -> serde_json::Value {
    let res = schema.execute(Request::new(query)).await;
    assert!(res.errors.is_empty(), "graphql errors: {:?}", res.errors);
    res.data.into_json().unwrap()
}

pub async fn fill_valid_form(schema: &ContactFormSchema, message: Option<&str>) {
    execute(schema, r#"mutation { setField(field: FIRST_NAME, value: "abcde") { state } }"#).await;
    execute(schema, r#"mutation { setField(field: LAST_NAME, value: "abc") { state } }"#).await;
    execute(
        schema,
        r#"mutation { setField(field: EMAIL, value: "aaa123@email.com") { state } }"#,
    )
    .await;
    if let Some(message) = message {
        let query = format!(
            r#"mutation {{ setField(field: MESSAGE, value: "{}") {{ state }} }}"#,
            message
        );
        execute(schema, &query).await;
    }
}

mod setup;

use async_graphql::Request;
use futures::executor::block_on;
use graphql::ContactFormSchema;
use setup::{init_tracing, set_up_form, AppConfig};
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();
    init_tracing(&config);

    let form = match set_up_form(&config) {
        Ok(form) => form,
        Err(err) => {
            tracing::error!(error = %err, "failed to open submission history");
            return Err(io::Error::other(err));
        }
    };
    let schema = graphql::build_schema(form);
    tracing::info!("contact form ready");

    run(&schema, io::stdin().lock(), io::stdout().lock())
}

/// Reads one GraphQL document per line and writes one JSON response per
/// line. Blank lines are skipped.
fn run(schema: &ContactFormSchema, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }

        let response = block_on(schema.execute(Request::new(query)));
        if !response.errors.is_empty() {
            tracing::warn!(errors = response.errors.len(), "request returned errors");
        }
        let json = serde_json::to_string(&response).map_err(io::Error::other)?;
        writeln!(output, "{}", json)?;
        output.flush()?;
    }

    Ok(())
}

use anyhow::Context;
use moviebot::{CatalogConfig, FulfillmentHandler, InvocationContext};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

// One JSON event per stdin line in, one JSON response per stdout line out.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let config = CatalogConfig::from_env();
    tracing::info!("Movie bot handler starting ({:?})", config);
    let handler = FulfillmentHandler::from_config(config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut ordinal: u64 = 0;

    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        ordinal += 1;

        let reply = match serde_json::from_str::<Value>(&line) {
            Ok(event) => {
                let context = InvocationContext {
                    request_id: Some(ordinal.to_string()),
                };
                match handler.handle(event, &context).await {
                    Ok(response) => serde_json::to_value(&response)?,
                    Err(e) => {
                        tracing::error!("Invocation {} failed: {}", ordinal, e);
                        json!({ "errorType": e.kind(), "errorMessage": e.to_string() })
                    }
                }
            }
            Err(e) => {
                tracing::error!("Invocation {} is not JSON: {}", ordinal, e);
                json!({ "errorType": "InvalidEvent", "errorMessage": e.to_string() })
            }
        };

        let mut out = serde_json::to_vec(&reply)?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    tracing::info!("Input closed after {} invocations", ordinal);
    Ok(())
}

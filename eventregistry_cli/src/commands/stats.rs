use anyhow::Result;
use eventregistry_lib::EventRegistry;
use serde_json::Value;

use crate::output::{print_json, OutputFormat};

pub async fn run(session: &EventRegistry, format: &OutputFormat) -> Result<()> {
    let stats = session.get_recent_stats().await?;
    match format {
        OutputFormat::Json => print_json(&stats),
        OutputFormat::Table => {
            if let Value::Object(entries) = &stats {
                for (key, value) in entries {
                    println!("{:<24} {}", key, value);
                }
            }
        }
    }
    Ok(())
}

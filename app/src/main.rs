use anyhow::{bail, Context};
use footprint_app::commands::lookup::lookup_username;
use footprint_lookup::{LookupRequest, StaticLookupProvider};
use std::sync::Arc;

const USAGE: &str = "usage: footprint <findings.json> <username> [platform...]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(fixture), Some(username)) = (args.next(), args.next()) else {
        bail!(USAGE);
    };
    let platforms: Vec<String> = args.collect();

    let json = std::fs::read_to_string(&fixture)
        .with_context(|| format!("failed to read findings from {fixture}"))?;
    let provider = StaticLookupProvider::from_json(&json)
        .with_context(|| format!("failed to parse findings in {fixture}"))?;

    let state = footprint_app::bootstrap(Arc::new(provider))?;

    let mut request = LookupRequest::new(username);
    if !platforms.is_empty() {
        request = request.with_platforms(platforms);
    }

    let result = lookup_username(&state, request).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

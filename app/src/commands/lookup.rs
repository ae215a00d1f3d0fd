use crate::error::CommandError;
use crate::state::AppState;
use footprint_lookup::{LookupRequest, PlatformCategory, TrackingResult};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct PlatformInfo {
    pub id: String,
    pub name: String,
    pub category: PlatformCategory,
}

/// Look up a username.
pub async fn lookup_username(
    state: &AppState,
    request: LookupRequest,
) -> Result<TrackingResult, CommandError> {
    info!("Looking up username: {}", request.username);
    Ok(state.service.lookup(&request).await?)
}

/// Look up a username from a JSON request body, returning the JSON result.
pub async fn lookup_json(state: &AppState, body: &str) -> Result<String, CommandError> {
    let request: LookupRequest = serde_json::from_str(body)?;
    let result = lookup_username(state, request).await?;
    serde_json::to_string(&result).map_err(|e| {
        CommandError::new("SERIALIZATION_ERROR", format!("Serialization error: {e}"))
    })
}

/// List the platforms a lookup can be restricted to.
pub fn list_platforms(state: &AppState) -> Vec<PlatformInfo> {
    state
        .service
        .catalog()
        .all()
        .iter()
        .map(|p| PlatformInfo {
            id: p.id.to_string(),
            name: p.display_name.clone(),
            category: p.category,
        })
        .collect()
}

//! `POST /create-preview`: placeholder until CI integration lands.

use crate::services::preview::{self, PreviewBuild, PreviewRequest};
use crate::types::errors::{CommandError, CommandResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Parse a JSON body and acknowledge the preview. An empty body is `{}`.
pub async fn create_preview_cmd(body: &str) -> CommandResult<PreviewBuild> {
    let request = parse_request(body)?;
    let mut rng = StdRng::from_entropy();
    Ok(preview::create_preview(&request, &mut rng))
}

pub fn parse_request(body: &str) -> CommandResult<PreviewRequest> {
    if body.trim().is_empty() {
        return Ok(PreviewRequest::default());
    }
    serde_json::from_str(body).map_err(|e| CommandError::BadRequest(format!("Invalid body: {e}")))
}

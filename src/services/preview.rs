//! Preview build requests.
//!
//! No CI is wired up yet: a preview is acknowledged with a generated build id
//! and a placeholder URL so callers can integrate against the final contract.

use crate::services::ids::short_id;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BRANCH: &str = "main";
const PREVIEW_HOST: &str = "https://preview.example.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub bundle_id: Option<String>,
}

impl PreviewRequest {
    pub fn branch(&self) -> &str {
        self.branch.as_deref().unwrap_or(DEFAULT_BRANCH)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewBuild {
    pub build_id: String,
    pub preview_url: String,
}

pub fn create_preview<R: Rng + ?Sized>(request: &PreviewRequest, rng: &mut R) -> PreviewBuild {
    let build_id = format!("build_{}", short_id(rng));
    log::info!(
        "Preview {} requested for branch '{}' (bundle {})",
        build_id,
        request.branch(),
        request.bundle_id.as_deref().unwrap_or("-")
    );

    PreviewBuild {
        preview_url: format!("{PREVIEW_HOST}/{build_id}"),
        build_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_branch_defaults_to_main() {
        let request: PreviewRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.branch(), "main");

        let request: PreviewRequest =
            serde_json::from_str(r#"{"branch":"feature/x","bundleId":"abc"}"#).unwrap();
        assert_eq!(request.branch(), "feature/x");
        assert_eq!(request.bundle_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_preview_url_embeds_build_id() {
        let build = create_preview(&PreviewRequest::default(), &mut StdRng::seed_from_u64(3));
        assert!(build.build_id.starts_with("build_"));
        assert_eq!(build.build_id.len(), "build_".len() + 10);
        assert_eq!(
            build.preview_url,
            format!("https://preview.example.com/{}", build.build_id)
        );
    }
}

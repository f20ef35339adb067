//! `POST /validate`: build manifests for uploaded packs and report conflicts.

use crate::services::bundle::BundleAssembler;
use crate::services::config::ValidateConfig;
use crate::types::errors::CommandResult;
use crate::types::pack::{Bundle, PackUpload};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub async fn validate_packs_cmd(
    uploads: Vec<PackUpload>,
    config: &ValidateConfig,
) -> CommandResult<Bundle> {
    let mut rng = StdRng::from_entropy();
    validate_packs_inner(uploads, config, &mut rng).await
}

/// Testable core of [`validate_packs_cmd`] with an explicit id source.
pub async fn validate_packs_inner<R>(
    uploads: Vec<PackUpload>,
    config: &ValidateConfig,
    rng: &mut R,
) -> CommandResult<Bundle>
where
    R: Rng + Send + ?Sized,
{
    let names: Vec<&str> = uploads.iter().map(|u| u.filename.as_str()).collect();
    log::info!("Validating {} packs: {:?}", names.len(), names);

    let assembler = BundleAssembler::new(config.clone());
    assembler.assemble(uploads, rng).await.map_err(|e| {
        log::error!("Validation failed: {e}");
        e.into()
    })
}

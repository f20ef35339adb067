use serde::{Deserialize, Serialize};
use std::time::Duration;

const MIB: u64 = 1024 * 1024;

/// Request-scoped limits for the validate pipeline.
///
/// Passed explicitly to every stage; nothing reads these from a global.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidateConfig {
    /// Largest accepted upload, in bytes.
    pub max_upload_bytes: u64,
    /// Largest icon atlas the feature probe will read, in bytes.
    pub max_probe_bytes: u64,
    /// Largest inflated size of one file loaded for the HUD builder.
    pub max_entry_bytes: u64,
    /// Wall-clock bound for building every manifest of one request.
    pub request_timeout: Duration,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 200 * MIB,
            max_probe_bytes: 16 * MIB,
            max_entry_bytes: 32 * MIB,
            request_timeout: Duration::from_secs(15),
        }
    }
}

impl ValidateConfig {
    pub fn with_max_upload_mb(mut self, mb: u64) -> Self {
        self.max_upload_bytes = mb.saturating_mul(MIB);
        self
    }

    pub fn with_max_probe_mb(mut self, mb: u64) -> Self {
        self.max_probe_bytes = mb.saturating_mul(MIB);
        self
    }

    pub fn with_max_entry_mb(mut self, mb: u64) -> Self {
        self.max_entry_bytes = mb.saturating_mul(MIB);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

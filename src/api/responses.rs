use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub(crate) struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine-readable failure kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl<T: Serialize> ApiResponse<T> {
    pub(crate) const fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None, code: None }
    }

    pub(crate) fn err(msg: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(msg.into()), code: None }
    }

    pub(crate) fn failed(code: &'static str, msg: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(msg.into()), code: Some(code) }
    }
}

/// Request body for POST /api/bricks/validate.
#[derive(Debug, Deserialize)]
pub(crate) struct ValidateRequest {
    /// `host:path` brick specification.
    pub brick: String,
    pub volume_id: Uuid,
    pub force: Option<bool>,
}

/// Request body for POST /api/settings.
#[derive(Debug, Deserialize)]
pub(crate) struct SettingsUpdateRequest {
    pub system_root: Option<String>,
    pub allow_force: Option<bool>,
}

/// Returned by GET /api/version.
#[derive(Debug, Serialize)]
pub(crate) struct VersionResponse {
    pub name: &'static str,
    pub version: &'static str,
}

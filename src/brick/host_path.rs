use super::error::{BrickError, BrickResult};

/// Split a `host:path` brick specification on its last colon.
///
/// The host half is only used to label logs and errors.
pub(crate) fn parse_host_and_brick_path(spec: &str) -> BrickResult<(&str, &str)> {
    let Some((host, path)) = spec.rsplit_once(':') else {
        return Err(BrickError::InvalidBrickPath { spec: spec.to_string(), reason: "missing ':'" });
    };
    if host.is_empty() {
        return Err(BrickError::InvalidBrickPath { spec: spec.to_string(), reason: "empty host" });
    }
    if path.is_empty() {
        return Err(BrickError::InvalidBrickPath { spec: spec.to_string(), reason: "empty path" });
    }
    Ok((host, path))
}

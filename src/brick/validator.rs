use super::device::DeviceIdentity;
use super::error::BrickResult;
use super::mount::MountChecker;
use super::path_length::{resolve_brick_path, validate_brick_path_length, validate_brick_subdir_length};
use super::xattr::XattrOps;
use super::{probe, usage};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Cluster-unique identifier of the volume claiming a brick, kept as the raw
/// bytes that end up in the ownership marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VolumeId(Vec<u8>);

impl VolumeId {
    #[cfg(test)]
    pub(crate) fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Uuid> for VolumeId {
    fn from(id: Uuid) -> Self {
        Self(id.as_bytes().to_vec())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct BrickRequest {
    pub host: String,
    pub path: PathBuf,
    pub volume_id: VolumeId,
    pub force: bool,
}

/// A brick that passed every check and now carries the volume-id marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Acceptance {
    pub host: String,
    pub path: PathBuf,
    /// The brick directory was created by this validation; roll it back if
    /// later steps of volume creation fail.
    pub created_brick_dir: bool,
    pub forced: bool,
}

/// Runs the admission checks in order and stops at the first failure.
pub(crate) struct BrickValidator {
    system_root: PathBuf,
    devices: Box<dyn DeviceIdentity>,
    xattrs: Box<dyn XattrOps>,
}

impl BrickValidator {
    pub(crate) fn new(
        system_root: impl Into<PathBuf>,
        devices: Box<dyn DeviceIdentity>,
        xattrs: Box<dyn XattrOps>,
    ) -> Self {
        Self { system_root: system_root.into(), devices, xattrs }
    }

    /// Run every check; a rejection is logged here, once.
    pub(crate) fn validate(&self, req: &BrickRequest) -> BrickResult<Acceptance> {
        self.run(req).inspect_err(|e| {
            error!(host = req.host.as_str(), brick = %req.path.display(), code = e.code(), "brick rejected: {e}");
        })
    }

    fn run(&self, req: &BrickRequest) -> BrickResult<Acceptance> {
        let host = req.host.as_str();

        // Lengths are measured on the absolute form the syscalls will see.
        let brick = resolve_brick_path(&req.path)?;
        validate_brick_path_length(&brick)?;
        validate_brick_subdir_length(&brick)?;

        let checker = MountChecker { system_root: &self.system_root, devices: self.devices.as_ref() };
        let stats = checker.validate_brick_path_stats(&brick, host, req.force)?;

        probe::validate_xattr_support(self.xattrs.as_ref(), &brick, host)?;

        if req.force {
            warn!(host, brick = %brick.display(), "force set, not checking for existing ownership markers");
        } else {
            usage::ensure_not_in_use(self.xattrs.as_ref(), &brick, &self.system_root, host)?;
        }

        usage::stamp_volume_id(self.xattrs.as_ref(), &brick, req.volume_id.as_bytes(), host)?;

        info!(host, brick = %brick.display(), created = stats.created, "brick accepted");
        Ok(Acceptance {
            host: req.host.clone(),
            path: brick,
            created_brick_dir: stats.created,
            forced: req.force,
        })
    }
}

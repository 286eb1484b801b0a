use super::error::BrickResult;
use std::fmt;
use std::fs::Metadata;
use std::path::Path;

/// Identifier of the device backing a filesystem object. Two paths share one
/// iff they live on the same mounted filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct DeviceId(pub u64);

/// `major:minor` as the kernel splits `dev_t`.
impl fmt::Display for DeviceId {
    #[cfg(target_os = "linux")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", libc::major(self.0), libc::minor(self.0))
    }

    #[cfg(not(target_os = "linux"))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracts a device id from already-fetched metadata.
///
/// `path` is only used for the error when the platform exposes no device id.
pub(crate) trait DeviceIdentity: Send + Sync {
    fn device_id(&self, metadata: &Metadata, path: &Path) -> BrickResult<DeviceId>;
}

/// Reads `st_dev` on Unix.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StatDeviceIdentity;

impl DeviceIdentity for StatDeviceIdentity {
    #[cfg(unix)]
    fn device_id(&self, metadata: &Metadata, _path: &Path) -> BrickResult<DeviceId> {
        use std::os::unix::fs::MetadataExt;
        Ok(DeviceId(metadata.dev()))
    }

    #[cfg(not(unix))]
    fn device_id(&self, _metadata: &Metadata, path: &Path) -> BrickResult<DeviceId> {
        Err(super::error::BrickError::DeviceIdNotFound { path: path.to_path_buf() })
    }
}

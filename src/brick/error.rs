use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub(crate) type BrickResult<T> = Result<T, BrickError>;

/// Which extended-attribute call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum XattrOp {
    Set,
    Get,
    Remove,
}

impl fmt::Display for XattrOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Set => "setxattr",
            Self::Get => "getxattr",
            Self::Remove => "removexattr",
        })
    }
}

/// Every way a brick can be refused.
#[derive(Debug, Error)]
pub(crate) enum BrickError {
    #[error("invalid brick path '{spec}': {reason}")]
    InvalidBrickPath { spec: String, reason: &'static str },

    #[error("brick path {} is too long ({len} >= {limit})", path.display())]
    BrickPathTooLong { path: PathBuf, len: usize, limit: usize },

    #[error("sub directory '{segment}' of brick path is too long ({len} >= {limit})")]
    SubDirPathTooLong { segment: String, len: usize, limit: usize },

    #[error("brick path {} is already present and is not a directory", path.display())]
    BrickNotDirectory { path: PathBuf },

    #[error("failed to find the device id of {}", path.display())]
    DeviceIdNotFound { path: PathBuf },

    #[error("brick path {} is a mount point", path.display())]
    BrickIsMountPoint { path: PathBuf },

    #[error("brick path {} is under the root partition", path.display())]
    BrickUnderRootPartition { path: PathBuf },

    #[error("brick path {} is already in use: {key} found on {}", path.display(), marked.display())]
    BrickPathAlreadyInUse { path: PathBuf, marked: PathBuf, key: &'static str },

    #[error("{op} of {key} failed on {}: {source}", path.display())]
    XattrOperationFailed {
        op: XattrOp,
        key: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{op} failed on {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BrickError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { op, path: path.into(), source }
    }

    pub(crate) fn xattr(
        op: XattrOp,
        key: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::XattrOperationFailed { op, key, path: path.into(), source }
    }

    /// Stable kind string reported to API clients.
    pub(crate) const fn code(&self) -> &'static str {
        match self {
            Self::InvalidBrickPath { .. } => "invalid_brick_path",
            Self::BrickPathTooLong { .. } => "brick_path_too_long",
            Self::SubDirPathTooLong { .. } => "sub_dir_path_too_long",
            Self::BrickNotDirectory { .. } => "brick_not_directory",
            Self::DeviceIdNotFound { .. } => "device_id_not_found",
            Self::BrickIsMountPoint { .. } => "brick_is_mount_point",
            Self::BrickUnderRootPartition { .. } => "brick_under_root_partition",
            Self::BrickPathAlreadyInUse { .. } => "brick_path_already_in_use",
            Self::XattrOperationFailed { .. } => "xattr_operation_failed",
            Self::Io { .. } => "io_failure",
        }
    }
}

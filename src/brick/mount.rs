use super::device::DeviceIdentity;
use super::error::{BrickError, BrickResult};
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Index metadata directory the storage engine expects inside every brick.
pub(crate) const BOOKKEEPING_DIR: &str = ".glusterfs/indices";

/// What the mount-boundary check did to the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StatsReport {
    /// The brick directory did not exist before this check ran.
    pub created: bool,
}

/// Verifies a brick sits inside a dedicated, non-root mount.
pub(crate) struct MountChecker<'a> {
    pub system_root: &'a Path,
    pub devices: &'a dyn DeviceIdentity,
}

fn lstat(path: &Path) -> BrickResult<Metadata> {
    fs::symlink_metadata(path).map_err(|e| BrickError::io("lstat", path, e))
}

impl MountChecker<'_> {
    /// Create the brick directory if needed and compare device ids of the
    /// brick, its parent and the system root. `force` skips the comparison
    /// but never the bookkeeping directory.
    pub(crate) fn validate_brick_path_stats(
        &self,
        brick: &Path,
        host: &str,
        force: bool,
    ) -> BrickResult<StatsReport> {
        let Some(parent) = brick.parent() else {
            return Err(BrickError::InvalidBrickPath {
                spec: brick.display().to_string(),
                reason: "brick has no parent directory",
            });
        };

        let existed = match fs::symlink_metadata(brick) {
            Ok(_) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => return Err(BrickError::io("lstat", brick, e)),
        };

        match fs::create_dir_all(brick) {
            Ok(()) => {}
            // Present but not a directory; reported below once we have its metadata.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => {
                debug!(host, brick = %brick.display(), "failed to create brick: {e}");
                return Err(BrickError::io("mkdir", brick, e));
            }
        }

        let brick_stat = lstat(brick)?;
        if !brick_stat.is_dir() {
            debug!(host, brick = %brick.display(), "brick path which is already present is not a directory");
            return Err(BrickError::BrickNotDirectory { path: brick.to_path_buf() });
        }

        let root_stat = lstat(self.system_root)?;
        let parent_stat = lstat(parent)?;

        if force {
            debug!(host, brick = %brick.display(), "force set, skipping device id checks");
        } else {
            let parent_dev = self.devices.device_id(&parent_stat, parent)?;
            let root_dev = self.devices.device_id(&root_stat, self.system_root)?;
            let brick_dev = self.devices.device_id(&brick_stat, brick)?;

            if brick_dev != parent_dev {
                debug!(host, brick = %brick.display(), %brick_dev, %parent_dev, "brick is a mount point");
                return Err(BrickError::BrickIsMountPoint { path: brick.to_path_buf() });
            } else if parent_dev == root_dev {
                debug!(host, brick = %brick.display(), %root_dev, "brick is under the root partition");
                return Err(BrickError::BrickUnderRootPartition { path: brick.to_path_buf() });
            }
        }

        let bookkeeping: PathBuf = brick.join(BOOKKEEPING_DIR);
        if let Err(e) = fs::create_dir_all(&bookkeeping) {
            debug!(host, path = %bookkeeping.display(), "failed to create bookkeeping directory: {e}");
            return Err(BrickError::io("mkdir", bookkeeping, e));
        }

        Ok(StatsReport { created: !existed })
    }
}

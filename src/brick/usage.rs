use super::error::{BrickError, BrickResult, XattrOp};
use super::xattr::{is_unsupported, XattrOps, GFID_XATTR, VOLUME_ID_XATTR};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Markers that mean some volume already owns the path or one of its ancestors.
const IN_USE_KEYS: [&str; 2] = [GFID_XATTR, VOLUME_ID_XATTR];

/// An ownership marker found during the ancestor walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExistingMarker {
    pub path: PathBuf,
    pub key: &'static str,
}

/// Walk from `brick` up to, but not including, `system_root` and report the
/// first ancestor carrying either ownership marker.
///
/// Every ancestor and every key is inspected before answering `None`. A
/// filesystem without xattr support cannot hold a marker; any other read
/// failure is an error rather than a "not in use" verdict.
pub(crate) fn find_existing_marker(
    xattrs: &dyn XattrOps,
    brick: &Path,
    system_root: &Path,
) -> BrickResult<Option<ExistingMarker>> {
    let mut current = Some(brick);
    while let Some(p) = current {
        if p == system_root {
            break;
        }
        for key in IN_USE_KEYS {
            match xattrs.get(p, key) {
                Ok(Some(value)) if !value.is_empty() => {
                    return Ok(Some(ExistingMarker { path: p.to_path_buf(), key }));
                }
                Ok(_) => {}
                Err(e) if is_unsupported(&e) => {
                    debug!(path = %p.display(), "no xattr support, no marker possible");
                }
                Err(e) => return Err(BrickError::xattr(XattrOp::Get, key, p, e)),
            }
        }
        current = p.parent();
    }
    Ok(None)
}

/// Fail with `BrickPathAlreadyInUse` if any ancestor is already owned.
pub(crate) fn ensure_not_in_use(
    xattrs: &dyn XattrOps,
    brick: &Path,
    system_root: &Path,
    host: &str,
) -> BrickResult<()> {
    if let Some(marker) = find_existing_marker(xattrs, brick, system_root)? {
        debug!(host, brick = %brick.display(), marked = %marker.path.display(), key = marker.key, "brick path is already in use");
        return Err(BrickError::BrickPathAlreadyInUse {
            path: brick.to_path_buf(),
            marked: marker.path,
            key: marker.key,
        });
    }
    Ok(())
}

/// Write the volume id onto the brick as its durable ownership marker.
pub(crate) fn stamp_volume_id(
    xattrs: &dyn XattrOps,
    brick: &Path,
    volume_id: &[u8],
    host: &str,
) -> BrickResult<()> {
    xattrs.set(brick, VOLUME_ID_XATTR, volume_id).map_err(|e| {
        debug!(host, brick = %brick.display(), xattr = VOLUME_ID_XATTR, "setxattr failed: {e}");
        BrickError::xattr(XattrOp::Set, VOLUME_ID_XATTR, brick, e)
    })
}

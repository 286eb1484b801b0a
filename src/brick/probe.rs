use super::error::{BrickError, BrickResult, XattrOp};
use super::xattr::{XattrOps, TEST_XATTR, TEST_XATTR_VALUE};
use std::path::Path;
use tracing::debug;

/// Prove the brick's filesystem supports the xattrs the storage engine needs
/// by setting and removing a test marker.
pub(crate) fn validate_xattr_support(
    xattrs: &dyn XattrOps,
    brick: &Path,
    host: &str,
) -> BrickResult<()> {
    if let Err(e) = xattrs.set(brick, TEST_XATTR, TEST_XATTR_VALUE) {
        debug!(host, brick = %brick.display(), xattr = TEST_XATTR, "setxattr failed: {e}");
        return Err(BrickError::xattr(XattrOp::Set, TEST_XATTR, brick, e));
    }
    if let Err(e) = xattrs.remove(brick, TEST_XATTR) {
        // The test marker may still be on disk; the caller has to know.
        debug!(host, brick = %brick.display(), xattr = TEST_XATTR, "removexattr failed: {e}");
        return Err(BrickError::xattr(XattrOp::Remove, TEST_XATTR, brick, e));
    }
    Ok(())
}

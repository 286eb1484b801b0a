use super::error::{BrickError, BrickResult};
use std::path::{Component, Path, PathBuf};

/// OS limit for a whole path, in bytes (includes the trailing NUL).
pub(crate) const PATH_MAX: usize = libc::PATH_MAX as usize;

/// `_POSIX_PATH_MAX`, applied to every individual segment of a brick path.
pub(crate) const POSIX_PATH_MAX: usize = 256;

/// Lexically normalize a path: drop `.` and repeated separators, fold `..`
/// into the preceding segment, never climb above the root.
pub(crate) fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                None | Some(Component::ParentDir | Component::CurDir) => out.push(comp),
            },
            Component::RootDir | Component::Prefix(_) | Component::Normal(_) => out.push(comp),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Make a brick path absolute (relative to the working directory) and clean it.
pub(crate) fn resolve_brick_path(path: &Path) -> BrickResult<PathBuf> {
    if path.is_absolute() {
        return Ok(clean_path(path));
    }
    let absolute = std::path::absolute(path).map_err(|e| BrickError::io("resolve", path, e))?;
    Ok(clean_path(&absolute))
}

pub(crate) fn validate_brick_path_length(path: &Path) -> BrickResult<()> {
    let cleaned = clean_path(path);
    let len = cleaned.as_os_str().len();
    if len >= PATH_MAX {
        return Err(BrickError::BrickPathTooLong { path: cleaned, len, limit: PATH_MAX });
    }
    Ok(())
}

/// Reject the path if any single directory name reaches `_POSIX_PATH_MAX`.
pub(crate) fn validate_brick_subdir_length(path: &Path) -> BrickResult<()> {
    for comp in clean_path(path).components() {
        if let Component::Normal(segment) = comp {
            let len = segment.len();
            if len >= POSIX_PATH_MAX {
                return Err(BrickError::SubDirPathTooLong {
                    segment: segment.to_string_lossy().into_owned(),
                    len,
                    limit: POSIX_PATH_MAX,
                });
            }
        }
    }
    Ok(())
}

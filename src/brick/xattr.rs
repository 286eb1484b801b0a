use std::io;
use std::path::Path;

/// Transient marker whose successful set+remove proves xattr support.
pub(crate) const TEST_XATTR: &str = "trusted.glusterfs.test";
pub(crate) const TEST_XATTR_VALUE: &[u8] = b"working";

/// Ownership marker written when a brick is accepted.
pub(crate) const VOLUME_ID_XATTR: &str = "trusted.glusterfs.volume-id";

/// Written by the storage engine on every object it owns. Only ever read here.
pub(crate) const GFID_XATTR: &str = "trusted.gfid";

/// Extended-attribute calls the validator needs.
pub(crate) trait XattrOps: Send + Sync {
    fn set(&self, path: &Path, key: &str, value: &[u8]) -> io::Result<()>;

    /// `Ok(None)` when the object carries no attribute named `key`.
    fn get(&self, path: &Path, key: &str) -> io::Result<Option<Vec<u8>>>;

    fn remove(&self, path: &Path, key: &str) -> io::Result<()>;
}

/// True when the error means the filesystem has no xattr support at all.
pub(crate) fn is_unsupported(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::Unsupported
        || matches!(err.raw_os_error(), Some(code) if code == libc::ENOTSUP || code == libc::EOPNOTSUPP)
}

/// Direct syscalls via libc.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SystemXattr;

#[cfg(target_os = "linux")]
#[allow(unsafe_code)]
mod sys {
    use std::ffi::CString;
    use std::io;
    use std::os::unix::ffi::OsStrExt;
    use std::path::Path;

    fn c_path(path: &Path) -> io::Result<CString> {
        CString::new(path.as_os_str().as_bytes())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
    }

    fn c_key(key: &str) -> io::Result<CString> {
        CString::new(key).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
    }

    pub(super) fn set(path: &Path, key: &str, value: &[u8]) -> io::Result<()> {
        let (p, k) = (c_path(path)?, c_key(key)?);
        let ret =
            unsafe { libc::setxattr(p.as_ptr(), k.as_ptr(), value.as_ptr().cast(), value.len(), 0) };
        if ret != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    pub(super) fn get(path: &Path, key: &str) -> io::Result<Option<Vec<u8>>> {
        let (p, k) = (c_path(path)?, c_key(key)?);
        loop {
            let size = unsafe { libc::getxattr(p.as_ptr(), k.as_ptr(), std::ptr::null_mut(), 0) };
            if size < 0 {
                return absent_or_err(io::Error::last_os_error());
            }
            let mut buf = vec![0u8; size as usize];
            let read =
                unsafe { libc::getxattr(p.as_ptr(), k.as_ptr(), buf.as_mut_ptr().cast(), buf.len()) };
            if read < 0 {
                let err = io::Error::last_os_error();
                // Value grew between the two calls.
                if err.raw_os_error() == Some(libc::ERANGE) {
                    continue;
                }
                return absent_or_err(err);
            }
            buf.truncate(read as usize);
            return Ok(Some(buf));
        }
    }

    pub(super) fn remove(path: &Path, key: &str) -> io::Result<()> {
        let (p, k) = (c_path(path)?, c_key(key)?);
        let ret = unsafe { libc::removexattr(p.as_ptr(), k.as_ptr()) };
        if ret != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    fn absent_or_err(err: io::Error) -> io::Result<Option<Vec<u8>>> {
        if err.raw_os_error() == Some(libc::ENODATA) {
            Ok(None)
        } else {
            Err(err)
        }
    }
}

/// Fallback for platforms without Linux xattr syscalls (development builds).
#[cfg(not(target_os = "linux"))]
mod sys {
    use std::io;
    use std::path::Path;

    fn unsupported() -> io::Error {
        io::Error::new(io::ErrorKind::Unsupported, "extended attributes are only supported on linux")
    }

    pub(super) fn set(_path: &Path, _key: &str, _value: &[u8]) -> io::Result<()> {
        Err(unsupported())
    }

    pub(super) fn get(_path: &Path, _key: &str) -> io::Result<Option<Vec<u8>>> {
        Err(unsupported())
    }

    pub(super) fn remove(_path: &Path, _key: &str) -> io::Result<()> {
        Err(unsupported())
    }
}

impl XattrOps for SystemXattr {
    fn set(&self, path: &Path, key: &str, value: &[u8]) -> io::Result<()> {
        sys::set(path, key, value)
    }

    fn get(&self, path: &Path, key: &str) -> io::Result<Option<Vec<u8>>> {
        sys::get(path, key)
    }

    fn remove(&self, path: &Path, key: &str) -> io::Result<()> {
        sys::remove(path, key)
    }
}

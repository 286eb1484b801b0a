//! Fakes for the filesystem seams of the validator.

use crate::brick::device::{DeviceId, DeviceIdentity};
use crate::brick::error::{BrickError, BrickResult, XattrOp};
use crate::brick::xattr::XattrOps;
use std::collections::HashMap;
use std::fs::Metadata;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory xattrs with per-call failure injection.
#[derive(Debug, Default)]
pub(crate) struct FakeXattr {
    attrs: Mutex<HashMap<(PathBuf, String), Vec<u8>>>,
    failures: HashMap<(XattrOp, String), i32>,
}

impl FakeXattr {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Make every `op` on `key` fail with `errno`.
    pub(crate) fn failing(mut self, op: XattrOp, key: &str, errno: i32) -> Self {
        self.failures.insert((op, key.to_string()), errno);
        self
    }

    pub(crate) fn with_attr(self, path: &Path, key: &str, value: &[u8]) -> Self {
        self.attrs.lock().unwrap().insert((path.to_path_buf(), key.to_string()), value.to_vec());
        self
    }

    pub(crate) fn value(&self, path: &Path, key: &str) -> Option<Vec<u8>> {
        self.attrs.lock().unwrap().get(&(path.to_path_buf(), key.to_string())).cloned()
    }

    fn check(&self, op: XattrOp, key: &str) -> io::Result<()> {
        match self.failures.get(&(op, key.to_string())) {
            Some(&errno) => Err(io::Error::from_raw_os_error(errno)),
            None => Ok(()),
        }
    }
}

impl XattrOps for FakeXattr {
    fn set(&self, path: &Path, key: &str, value: &[u8]) -> io::Result<()> {
        self.check(XattrOp::Set, key)?;
        self.attrs.lock().unwrap().insert((path.to_path_buf(), key.to_string()), value.to_vec());
        Ok(())
    }

    fn get(&self, path: &Path, key: &str) -> io::Result<Option<Vec<u8>>> {
        self.check(XattrOp::Get, key)?;
        Ok(self.value(path, key))
    }

    fn remove(&self, path: &Path, key: &str) -> io::Result<()> {
        self.check(XattrOp::Remove, key)?;
        match self.attrs.lock().unwrap().remove(&(path.to_path_buf(), key.to_string())) {
            Some(_) => Ok(()),
            None => Err(io::Error::from_raw_os_error(libc::ENODATA)),
        }
    }
}

/// Lets a test keep inspecting the fake after handing it to a validator.
impl XattrOps for Arc<FakeXattr> {
    fn set(&self, path: &Path, key: &str, value: &[u8]) -> io::Result<()> {
        self.as_ref().set(path, key, value)
    }

    fn get(&self, path: &Path, key: &str) -> io::Result<Option<Vec<u8>>> {
        self.as_ref().get(path, key)
    }

    fn remove(&self, path: &Path, key: &str) -> io::Result<()> {
        self.as_ref().remove(path, key)
    }
}

/// Assigns device ids by inode so tests can lay out "mounts" inside a tempdir.
#[derive(Debug)]
pub(crate) struct FakeDevices {
    by_ino: HashMap<u64, Option<u64>>,
    default: u64,
}

impl FakeDevices {
    /// Every object not explicitly mapped lives on device `default`.
    pub(crate) fn new(default: u64) -> Self {
        Self { by_ino: HashMap::new(), default }
    }

    pub(crate) fn on(mut self, path: &Path, dev: u64) -> Self {
        let ino = std::fs::symlink_metadata(path).unwrap().ino();
        self.by_ino.insert(ino, Some(dev));
        self
    }

    /// Pretend the platform exposes no device id for `path`.
    pub(crate) fn unknown(mut self, path: &Path) -> Self {
        let ino = std::fs::symlink_metadata(path).unwrap().ino();
        self.by_ino.insert(ino, None);
        self
    }
}

impl DeviceIdentity for FakeDevices {
    fn device_id(&self, metadata: &Metadata, path: &Path) -> BrickResult<DeviceId> {
        match self.by_ino.get(&metadata.ino()) {
            Some(Some(dev)) => Ok(DeviceId(*dev)),
            Some(None) => Err(BrickError::DeviceIdNotFound { path: path.to_path_buf() }),
            None => Ok(DeviceId(self.default)),
        }
    }
}

/// `<tmp>/mnt/disk1` with `<tmp>` standing in for `/`.
pub(crate) struct Layout {
    _tmp: tempfile::TempDir,
    pub root: PathBuf,
    pub disk: PathBuf,
}

impl Layout {
    pub(crate) fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().to_path_buf();
        let disk = root.join("mnt").join("disk1");
        std::fs::create_dir_all(&disk).unwrap();
        Self { _tmp: tmp, root, disk }
    }

    /// `/` and `/mnt` on device 1; the disk and anything created under it on
    /// device 2.
    pub(crate) fn devices(&self) -> FakeDevices {
        FakeDevices::new(2).on(&self.root, 1).on(&self.root.join("mnt"), 1)
    }
}

//! Admission checks run before a directory is accepted as a brick.
//!
//! Order matters and every step is fail-fast: path lengths, mount boundary
//! (plus the bookkeeping directory), xattr support, existing ownership, and
//! finally the volume-id stamp.

pub(crate) mod device;
pub(crate) mod error;
pub(crate) mod host_path;
pub(crate) mod mount;
pub(crate) mod path_length;
pub(crate) mod probe;
pub(crate) mod usage;
pub(crate) mod validator;
pub(crate) mod xattr;

pub(crate) use device::StatDeviceIdentity;
pub(crate) use error::BrickError;
pub(crate) use host_path::parse_host_and_brick_path;
pub(crate) use path_length::resolve_brick_path;
pub(crate) use validator::{Acceptance, BrickRequest, BrickValidator, VolumeId};
pub(crate) use xattr::SystemXattr;

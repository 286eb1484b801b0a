/// Default path of the node-local config file.
pub(super) const DEFAULT_CONFIG_PATH: &str = "/etc/brickguard/brickguard.cfg";

/// Default port the daemon listens on (localhost only).
pub(super) const DEFAULT_PORT: u16 = 7092;

/// Filesystem root that bricks must not share a device with.
pub(super) const DEFAULT_SYSTEM_ROOT: &str = "/";

/// Whether API callers may bypass the mount-boundary and in-use checks.
pub(super) const DEFAULT_ALLOW_FORCE: bool = true;

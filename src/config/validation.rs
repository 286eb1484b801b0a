use super::settings::AppConfig;
use anyhow::Result;
use std::path::Path;

impl AppConfig {
    /// Validate configuration values are sane.
    pub(crate) fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.port > 0, "Port must be > 0");
        anyhow::ensure!(
            Path::new(&self.system_root).is_absolute(),
            "system_root must be an absolute path, got '{}'",
            self.system_root
        );
        Ok(())
    }
}

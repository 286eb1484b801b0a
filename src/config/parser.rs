use super::settings::AppConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

fn parse_bool(value: &str) -> bool {
    value == "yes" || value == "true" || value == "1"
}

impl AppConfig {
    /// Parse the simple KEY="VALUE" config format.
    pub(crate) fn parse_ini(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                match key {
                    "PORT" => {
                        if let Ok(v) = value.parse() {
                            self.port = v;
                        }
                    }
                    "SYSTEM_ROOT" => {
                        if !value.is_empty() {
                            self.system_root = value.to_string();
                        }
                    }
                    "ALLOW_FORCE" => {
                        self.allow_force = parse_bool(value);
                    }
                    _ => {} // Ignore unknown keys
                }
            }
        }
    }

    /// Save current config back to the INI file.
    pub fn save(&self) -> Result<()> {
        let contents = format!(
            r#"# brickguard configuration
# Auto-generated, edit via the settings API
PORT="{}"
SYSTEM_ROOT="{}"
ALLOW_FORCE="{}"
"#,
            self.port,
            self.system_root,
            if self.allow_force { "yes" } else { "no" },
        );

        if let Some(parent) = Path::new(&self.config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.config_path, contents)
            .with_context(|| format!("Failed to write config to {}", self.config_path))?;

        Ok(())
    }
}

//! Config inspection command.

use std::io::Write;

use crate::config::{self, Config};

/// Print the effective config, optionally writing a default file first
pub fn cmd_config<W: Write>(effective: &Config, init: bool, out: &mut W) -> anyhow::Result<()> {
    let path = config::config_path();

    if init {
        match &path {
            Some(p) if p.exists() => writeln!(out, "Config file already exists: {}", p.display())?,
            _ => {
                let written = config::save(&Config::default())?;
                writeln!(out, "Wrote default config to {}", written.display())?;
            }
        }
    }

    match &path {
        Some(p) => writeln!(out, "# {}", p.display())?,
        None => writeln!(out, "# (no config directory on this platform)")?,
    }
    write!(out, "{}", toml::to_string_pretty(effective)?)?;
    Ok(())
}

//! Persistent user settings (default DAT path).
//!
//! The settings file is `~/.config/romid/settings.toml`:
//!
//! ```toml
//! [catalog]
//! default_dat = "/path/to/No-Intro.dat"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use crate::error::LibError;

/// Canonical path to the settings file: `~/.config/romid/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("romid").join("settings.toml")
}

/// Resolve the DAT path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `catalog.default_dat` in `settings.toml`
///
/// Returns `Ok(None)` when neither is set.
pub fn resolve_dat_path(cli_override: Option<PathBuf>) -> Result<Option<PathBuf>, LibError> {
    if let Some(p) = cli_override {
        return Ok(Some(p));
    }
    load_dat_path(&settings_path())
}

/// Read `catalog.default_dat` from a settings file, if set.
///
/// A missing file is not an error; a file that exists but is not valid TOML is.
pub fn load_dat_path(settings: &Path) -> Result<Option<PathBuf>, LibError> {
    let contents = match std::fs::read_to_string(settings) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let doc: toml::Value = contents
        .parse()
        .map_err(|e| LibError::settings(format!("{}: {e}", settings.display())))?;

    let dat = doc
        .get("catalog")
        .and_then(|c| c.get("default_dat"))
        .and_then(|d| d.as_str());
    Ok(match dat {
        Some(d) if !d.is_empty() => Some(PathBuf::from(d)),
        _ => None,
    })
}

/// Save (or clear) the default DAT path in a settings file.
///
/// Uses `toml::Value` for a surgical update so unrelated keys are preserved.
pub fn save_dat_path(settings: &Path, dat: Option<&Path>) -> Result<(), LibError> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => contents
            .parse()
            .map_err(|e| LibError::settings(format!("{}: {e}", settings.display())))?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => toml::Value::Table(Default::default()),
        Err(e) => return Err(e.into()),
    };

    // Ensure [catalog] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| LibError::settings("settings.toml root is not a table"))?;
    let catalog = table
        .entry("catalog")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let catalog_table = catalog
        .as_table_mut()
        .ok_or_else(|| LibError::settings("[catalog] is not a table"))?;

    match dat {
        Some(p) => {
            catalog_table.insert(
                "default_dat".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            catalog_table.remove("default_dat");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(|e| LibError::settings(e.to_string()))?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

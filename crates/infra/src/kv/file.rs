//! File-backed key-value store.
//!
//! One file per key under an application data directory. Writes go through a
//! temp file and rename so a crash mid-write leaves the previous value intact.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::kv::KeyValueStore;

#[derive(Debug, Clone)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Open a store rooted at `{app_data_dir}/opsdeck`.
    ///
    /// Returns `None` when no data directory can be resolved or created; the
    /// caller is expected to fall back to a memory-only store.
    pub fn open_default() -> Option<Self> {
        match default_dir() {
            Ok(dir) => Some(Self { dir }),
            Err(err) => {
                tracing::warn!("no data directory for file store: {err:?}");
                None
            }
        }
    }

    /// Open a store rooted at an explicit directory (used by tests).
    pub fn open_at(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create store directory at {dir:?}"))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are dotted namespaces; keep them filesystem-safe.
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(file)
    }

    fn write(&self, path: &Path, value: &str) -> anyhow::Result<()> {
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, value).with_context(|| format!("failed to write {tmp:?}"))?;
        fs::rename(&tmp, path).with_context(|| format!("failed to move {tmp:?} into place"))?;
        Ok(())
    }
}

impl KeyValueStore for FileKv {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!("failed to read {path:?}: {err}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let path = self.path_for(key);
        if let Err(err) = self.write(&path, value) {
            tracing::warn!("dropping write for {key:?}: {err:?}");
        }
    }
}

/// Resolve `{app_data_dir}/opsdeck`, creating it if needed.
fn default_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory")?;

    let mut dir = base;
    dir.push("opsdeck");

    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory at {dir:?}"))?;

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_value() {
        let tmp = tempfile::tempdir().unwrap();
        let kv = FileKv::open_at(tmp.path()).unwrap();

        kv.set("opsdeck.datasets.rows", "{}");
        assert_eq!(kv.get("opsdeck.datasets.rows"), Some("{}".to_string()));
    }

    #[test]
    fn missing_key_is_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let kv = FileKv::open_at(tmp.path()).unwrap();

        assert_eq!(kv.get("opsdeck.procurement.list"), None);
    }

    #[test]
    fn keys_with_separators_stay_inside_the_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let kv = FileKv::open_at(tmp.path()).unwrap();

        kv.set("../escape", "x");
        assert_eq!(kv.get("../escape"), Some("x".to_string()));
        assert!(!tmp.path().parent().unwrap().join("escape").exists());
    }
}

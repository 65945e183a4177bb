use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::config::CardConfig;

/// Supplier of raw, encoded frame bytes by asset name.
pub trait FrameSource: Sync {
    /// Fetch the encoded bytes of one asset.
    fn fetch(&self, name: &str) -> anyhow::Result<Vec<u8>>;
}

/// Reads frame assets from a directory on disk.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FrameSource for DirSource {
    fn fetch(&self, name: &str) -> anyhow::Result<Vec<u8>> {
        let path = self.root.join(name);
        std::fs::read(&path).with_context(|| format!("read asset '{}'", path.display()))
    }
}

/// Asset names for every cache slot, using the 1-based positional scheme.
pub fn frame_asset_names(cfg: &CardConfig) -> Vec<String> {
    (1..=cfg.frames_count)
        .map(|n| format!("{}{n}.{}", cfg.asset_prefix, cfg.asset_extension))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;

use std::sync::Arc;

use rayon::prelude::*;

use crate::{
    assets::{
        decode::encode_frame,
        source::{FrameSource, frame_asset_names},
    },
    foundation::{
        config::CardConfig,
        core::FrameIndex,
        error::{LenticardError, LenticardResult},
    },
};

/// One display-ready frame: a self-contained JPEG plus its pixel size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedFrame {
    /// Asset name the frame was loaded from.
    pub name: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Re-encoded JPEG bytes.
    pub jpeg: Arc<Vec<u8>>,
}

/// Immutable, randomly addressable set of preloaded frames.
///
/// Built once by [`FrameCache::preload`]; clones share the same frames.
#[derive(Clone, Debug, Default)]
pub struct FrameCache {
    frames: Arc<[CachedFrame]>,
}

impl FrameCache {
    /// Fetch, decode and re-encode every configured frame.
    ///
    /// All-or-nothing: if any slot fails, the lowest failing slot is reported and no cache
    /// is produced. Slots are processed in parallel. The config is validated first, so an
    /// oversized frame count fails before any asset is fetched.
    #[tracing::instrument(skip(cfg, source), fields(frames = cfg.frames_count))]
    pub fn preload(cfg: &CardConfig, source: &dyn FrameSource) -> LenticardResult<Self> {
        cfg.validate()?;
        let names = frame_asset_names(cfg);
        let results: Vec<LenticardResult<CachedFrame>> = names
            .par_iter()
            .map(|name| {
                let bytes = source
                    .fetch(name)
                    .map_err(|e| LenticardError::asset_preload(name, e))?;
                encode_frame(name, &bytes, cfg.jpeg_quality)
                    .map_err(|e| LenticardError::asset_preload(name, anyhow::Error::new(e)))
            })
            .collect();

        let frames = results.into_iter().collect::<LenticardResult<Vec<_>>>()?;
        tracing::info!(frames = frames.len(), "frame cache ready");
        Ok(Self::from_frames(frames))
    }

    pub fn from_frames(frames: Vec<CachedFrame>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    pub fn get(&self, index: FrameIndex) -> Option<&CachedFrame> {
        self.frames.get(index.0)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FrameIndex, &CachedFrame)> {
        self.frames
            .iter()
            .enumerate()
            .map(|(i, f)| (FrameIndex(i), f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/cache.rs"]
mod tests;

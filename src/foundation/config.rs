use std::{path::Path, time::Duration};

use anyhow::Context;

use crate::foundation::error::{LenticardError, LenticardResult};

/// Length of the cross-fade the display layer plays between frames.
pub const TRANSITION_ANIMATION_MS: u64 = 330;
/// Dead time after a presented frame; outlasts the cross-fade by half again.
pub const DEFAULT_COOLDOWN_MS: u64 = TRANSITION_ANIMATION_MS + TRANSITION_ANIMATION_MS / 2;
/// Grace period before the liveness watchdog reports a missing motion signal.
pub const DEFAULT_GRACE_MS: u64 = 1000;
pub const DEFAULT_FRAMES_COUNT: usize = 6;
/// Largest frame set a card may preload.
pub const MAX_FRAMES_COUNT: usize = 1024;

const FRAMES_COUNT_KEY: &str = "frames-count=";

/// Startup parameters for a card session.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardConfig {
    /// Number of frame assets to preload.
    pub frames_count: usize,
    /// Cooldown after a presented transition, in milliseconds.
    pub cooldown_ms: u64,
    /// Liveness grace period, in milliseconds.
    pub grace_ms: u64,
    /// Asset name prefix; slot `i` is `{prefix}{i + 1}.{extension}`.
    pub asset_prefix: String,
    /// Asset file extension, without the dot.
    pub asset_extension: String,
    /// JPEG quality used when re-encoding cached frames.
    pub jpeg_quality: u8,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            frames_count: DEFAULT_FRAMES_COUNT,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            grace_ms: DEFAULT_GRACE_MS,
            asset_prefix: "frame-".to_owned(),
            asset_extension: "jpg".to_owned(),
            jpeg_quality: 92,
        }
    }
}

impl CardConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> LenticardResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self =
            serde_json::from_str(&text).map_err(|e| LenticardError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply a URL-style query string (`?frames-count=8&...`).
    ///
    /// Only the first `frames-count=` followed by at least one ASCII digit is honored;
    /// anything else leaves the current count untouched.
    pub fn apply_query(&mut self, query: &str) -> LenticardResult<()> {
        let Some(digits) = find_frames_count(query) else {
            return Ok(());
        };
        self.frames_count = digits.parse::<usize>().map_err(|_| {
            LenticardError::validation(format!("frames-count '{digits}' is out of range"))
        })?;
        Ok(())
    }

    pub fn validate(&self) -> LenticardResult<()> {
        if self.frames_count > MAX_FRAMES_COUNT {
            return Err(LenticardError::validation(format!(
                "frames_count must be <= {MAX_FRAMES_COUNT}, got {}",
                self.frames_count
            )));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(LenticardError::validation("jpeg_quality must be in 1..=100"));
        }
        if self.cooldown_ms == 0 {
            return Err(LenticardError::validation("cooldown_ms must be > 0"));
        }
        if self.grace_ms == 0 {
            return Err(LenticardError::validation("grace_ms must be > 0"));
        }
        if self.asset_extension.is_empty() {
            return Err(LenticardError::validation("asset_extension must be non-empty"));
        }
        Ok(())
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }
}

fn find_frames_count(query: &str) -> Option<&str> {
    let mut rest = query;
    while let Some(pos) = rest.find(FRAMES_COUNT_KEY) {
        let after = &rest[pos + FRAMES_COUNT_KEY.len()..];
        let end = after
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after.len());
        if end > 0 {
            return Some(&after[..end]);
        }
        rest = after;
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;

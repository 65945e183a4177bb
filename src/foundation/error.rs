/// Convenience result type used across lenticard.
pub type LenticardResult<T> = Result<T, LenticardError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum LenticardError {
    /// The host cannot deliver motion samples; nothing is initialized.
    #[error("Device not supported! :(")]
    DeviceUnsupported,

    /// One of the frame assets could not be fetched, decoded or re-encoded.
    #[error("Cannot load \"{asset}\"")]
    AssetPreload {
        /// Name of the offending asset.
        asset: String,
        /// Underlying fetch/decode failure.
        #[source]
        source: anyhow::Error,
    },

    /// Image load for an admitted transition failed. Absorbed by the session.
    #[error("transition load error: {0}")]
    TransitionLoad(String),

    /// No structurally valid motion sample arrived within the grace period.
    #[error("Something went wrong...")]
    NoMotionSignal,

    /// Invalid user-provided configuration, trace or CLI data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LenticardError {
    /// Build a [`LenticardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LenticardError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`LenticardError::AssetPreload`] value.
    pub fn asset_preload(asset: impl Into<String>, source: anyhow::Error) -> Self {
        Self::AssetPreload {
            asset: asset.into(),
            source,
        }
    }

    /// Build a [`LenticardError::TransitionLoad`] value.
    pub fn transition_load(msg: impl Into<String>) -> Self {
        Self::TransitionLoad(msg.into())
    }

    /// `true` for kinds that stop initialization.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DeviceUnsupported | Self::AssetPreload { .. } | Self::Validation(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("mount id must not be empty")]
    EmptyMountId,
    #[error("mount id {0:?} contains whitespace")]
    WhitespaceInMountId(String),
    #[error("mount id {0:?} must not start with '#'")]
    SelectorMountId(String),
    #[cfg(feature = "serde")]
    #[error("malformed config json: {0}")]
    Json(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    /// The mount element was absent and the policy is [`MissingMountPolicy::Abort`].
    ///
    /// [`MissingMountPolicy::Abort`]: crate::config::MissingMountPolicy::Abort
    #[error("Root element #{id} not found")]
    MountMissing { id: String },
    #[error("could not create fallback mount #{id}: {reason}")]
    FallbackFailed { id: String, reason: String },
    #[error("invalid bootstrap config: {0}")]
    Config(#[from] ConfigError),
    #[error("render failed: {0}")]
    Render(String),
}

impl BootstrapError {
    /// Whether this error was already reported to the console when it was raised.
    pub fn already_logged(&self) -> bool {
        matches!(self, BootstrapError::MountMissing { .. })
    }
}

use thiserror::Error;

use crate::outcome::Outcome;
use crate::resource::CacheError;

use super::SceneState;

/// Result of a scene lifecycle operation.
pub type SceneResult = Outcome<(), SceneError>;

/// Failure causes a scene lifecycle operation may report.
///
/// Every variant renders a complete message through `Display`, so callers that
/// only log or show the error never need to match on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("{}", or_fallback(.0, "Scene error occurred"))]
    Generic(String),

    /// An empty message renders "Resource loading failed", not the generic
    /// "Scene error occurred".
    #[error("{}", or_fallback(.0, "Resource loading failed"))]
    ResourceLoad(String),

    #[error("{}", or_fallback(.0, "Invalid state transition"))]
    InvalidStateTransition(String),

    /// Render-object setup failed; wraps the underlying error text.
    #[error("Failed to activate scene due to VAO creation error: {0}")]
    VaoCreation(String),

    #[error("Failed to setup vertex layout")]
    VertexLayout,

    /// Names the texture that failed.
    #[error("Failed to load texture: {0}")]
    TextureLoad(String),
}

fn or_fallback<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    if message.is_empty() { fallback } else { message }
}

impl SceneError {
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic(message.into())
    }

    /// Resource-load failure with the default message.
    pub fn resource_load() -> Self {
        Self::ResourceLoad(String::new())
    }

    /// Invalid-transition failure with the default message.
    pub fn invalid_transition() -> Self {
        Self::InvalidStateTransition(String::new())
    }

    /// Invalid-transition failure naming the rejected operation and the state
    /// it was attempted in.
    pub fn invalid_transition_for(operation: &str, state: SceneState) -> Self {
        Self::InvalidStateTransition(format!("cannot {operation} a scene that is {state}"))
    }

    pub fn vao_creation(error: impl Into<String>) -> Self {
        Self::VaoCreation(error.into())
    }

    pub fn texture_load(name: impl Into<String>) -> Self {
        Self::TextureLoad(name.into())
    }

    /// Human-readable description of the failure.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl From<CacheError> for SceneError {
    fn from(err: CacheError) -> Self {
        Self::ResourceLoad(err.to_string())
    }
}

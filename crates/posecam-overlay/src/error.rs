use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// No surface is attached yet, or it has been torn down.
    SurfaceNotReady,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceNotReady => write!(f, "drawing surface is not ready"),
        }
    }
}

impl std::error::Error for RenderError {}

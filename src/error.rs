//! Error types for plant generation and rendering.

/// Failure while interpreting a symbol sequence.
///
/// Interpretation stops at the offending symbol. Geometry emitted before it
/// stays in the accumulator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlantError {
    /// `]` with nothing saved on the turtle stack.
    #[error("unbalanced bracket: pop with empty stack at symbol {index}")]
    UnbalancedBracket { index: usize },

    /// `[` would push past the configured maximum depth.
    #[error("stack depth limit {limit} exceeded at symbol {index}")]
    StackDepthExceeded { index: usize, limit: usize },
}

/// Failure reported by a [`Renderer`](crate::renderer::Renderer).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Device, context or adapter could not be acquired.
    #[error("renderer initialization failed: {0}")]
    Initialization(String),

    #[error("texture atlas has zero size ({width}x{height})")]
    EmptyAtlas { width: u32, height: u32 },

    /// `draw` was called before any mesh was uploaded.
    #[error("no mesh uploaded")]
    NotUploaded,
}

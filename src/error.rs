use thiserror::Error;

/// Failures of the vertex pipeline. All of them are fatal: they mean the
/// attribute layout and the buffers produced by the game disagree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("no vertex attributes were declared")]
    EmptyLayout,
    #[error("vertex attribute `{0}` is required but was not declared")]
    MissingAttribute(&'static str),
    #[error("vertex attribute `{name}` needs {expected} components, got {actual}")]
    AttributeSize {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("draw called before the attribute layout was finalized")]
    LayoutNotFinalized,
    #[error("vertex buffer of {len} floats is not a whole number of {stride}-float vertices")]
    BufferSize { len: usize, stride: usize },
    #[error("draw of {expected} vertices requested but buffer holds {actual}")]
    PrimitiveCount { expected: usize, actual: usize },
}

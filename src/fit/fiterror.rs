use thiserror::Error;

#[derive(Debug, Error)]
pub enum FitError {
    #[error("point set is empty")]
    EmptyPointSet,

    #[error("matrix must be square to compute its inverse ({rows}x{cols} given)")]
    NotSquare {
        rows: usize,
        cols: usize
    },

    #[error("matrix is singular and has no inverse")]
    Singular,

    #[error("least-squares solve failed: {0}")]
    Solve(String),

    #[error("no triangle with positive area among {0} points")]
    NoTriangle(usize),

    #[error("sample step {0} must be positive and large enough to advance x")]
    InvalidSampleStep(f64),

    #[error("sample range bounds must be finite, got [{x_start}, {x_end}]")]
    InvalidSampleRange {
        x_start: f64,
        x_end: f64
    },

    #[error(transparent)]
    Io(#[from] std::io::Error)
}

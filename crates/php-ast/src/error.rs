use std::fmt;

/// Which argument of a slice fell outside the part range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceBound {
    Offset,
    Length,
}

impl fmt::Display for SliceBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceBound::Offset => write!(f, "Offset"),
            SliceBound::Length => write!(f, "Length"),
        }
    }
}

/// Node and name errors
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// `value` is the argument as the caller passed it, before normalization
    #[error("{bound} {value} is out of bounds")]
    OutOfBounds { bound: SliceBound, value: isize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NodeError {
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, NodeError::OutOfBounds { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, NodeError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, NodeError>;

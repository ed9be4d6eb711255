use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidDimensions { row_bytes: usize, height: usize },
    SizeMismatch { expected: usize, actual: usize },
    InvalidStride,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { row_bytes, height } => {
                write!(f, "invalid dimensions: {row_bytes} bytes x {height} rows")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidStride => write!(f, "invalid stride"),
        }
    }
}

impl std::error::Error for Error {}

use thiserror::Error;

/// Every way a list operation can fail.
///
/// Failures are reported before the chain is touched, so a list that
/// returned one of these is exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// An absent value was supplied where a real value was required.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    /// The index falls outside the operation's valid range.
    #[error("index {index} is out of range for a list of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// The requested element does not exist.
    #[error("no such element: {reason}")]
    NoSuchElement { reason: &'static str },
}

impl ListError {
    pub fn invalid_argument(reason: &'static str) -> Self {
        Self::InvalidArgument { reason }
    }

    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    pub fn no_such_element(reason: &'static str) -> Self {
        Self::NoSuchElement { reason }
    }

    /// Short name of the failure kind, stable across message changes.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "InvalidArgument",
            Self::IndexOutOfRange { .. } => "IndexOutOfRange",
            Self::NoSuchElement { .. } => "NoSuchElement",
        }
    }
}

pub type Result<T> = std::result::Result<T, ListError>;

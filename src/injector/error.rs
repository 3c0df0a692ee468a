use std::fmt;
use std::num::ParseIntError;

/// Which of the two page layouts an extractor was reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Active,
    Deactivated,
}

impl Layout {
    pub fn from_active(active: bool) -> Self {
        if active {
            Layout::Active
        } else {
            Layout::Deactivated
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Active => f.write_str("active"),
            Layout::Deactivated => f.write_str("deactivated"),
        }
    }
}

/// Error type for field injection.
#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    /// An expected element or attribute is not on the page.
    #[error("cannot find {field} ({detail})")]
    MissingField { field: &'static str, detail: String },

    /// The element exists but holds no text once cleaned.
    #[error("cannot find {field} (length == 0) ({layout} layout)")]
    EmptyField { field: &'static str, layout: Layout },

    /// Text was found but is not a valid number.
    #[error("failed to parse {field} from {value:?}")]
    Parse {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A source that must be unique matched some other number of times.
    #[error("expected exactly one {what}, found {count}")]
    AmbiguousSource { what: &'static str, count: usize },

    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// Result type alias for injection operations.
pub type Result<T> = std::result::Result<T, InjectError>;

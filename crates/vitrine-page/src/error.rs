//! Error types for page behavior
//!
//! Nothing on the page is fatal. These errors exist so that callers can
//! decide what to log and skip; the web layer never propagates them into
//! the browser as exceptions, except from an explicit config mount.

/// Errors that can occur while driving page behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// A carousel was built over an empty slide sequence
    NoSlides,

    /// A slide index outside the sequence was requested
    SlideOutOfRange {
        /// The requested zero-based index
        index: usize,
        /// The actual number of slides
        count: usize,
    },

    /// A one-based slide number (as shown on the dots) outside `1..=count`
    InvalidSlideNumber {
        /// The requested one-based number
        number: usize,
        /// The actual number of slides
        count: usize,
    },

    /// A configuration value failed validation
    InvalidConfig {
        /// Dotted path of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Configuration JSON could not be parsed
    ConfigParse(String),
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSlides => write!(f, "carousel has no slides"),
            Self::SlideOutOfRange { index, count } => {
                write!(f, "slide index {} out of range (count: {})", index, count)
            }
            Self::InvalidSlideNumber { number, count } => {
                write!(f, "slide number {} out of range 1..={}", number, count)
            }
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::ConfigParse(msg) => write!(f, "config parse error: {}", msg),
        }
    }
}

impl std::error::Error for PageError {}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}

/// Result type alias for page operations
pub type PageResult<T> = Result<T, PageError>;

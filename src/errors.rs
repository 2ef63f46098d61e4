use thiserror::Error;

use crate::models::tree::ElementType;

/// Represents the ways an element tree can violate the normalizer's input contract.
///
/// Every variant describes malformed input; none is a transient condition.
/// Normalization stops at the first one encountered.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// The color parser rejected a color string.
    #[error("Invalid color `{value}`: {reason}")]
    InvalidColor { value: String, reason: String },

    /// A string position is not a whole percentage such as `"50%"`.
    #[error("Invalid position `{0}`: expected a number or a percentage like \"50%\"")]
    InvalidPosition(String),

    /// Text content of a shape the text normalizer does not support.
    #[error("Invalid text child: {0}")]
    InvalidTextChild(String),

    /// A visual element other than `line` has no `style` prop.
    #[error("`{0}` element is missing its required `style` prop")]
    MissingStyle(ElementType),

    /// An element appeared where only visual objects (or table cells) are
    /// allowed, or its `type` tag is not one of the known element tags.
    /// Carries the tag as written.
    #[error("`{0}` element is not a recognized object kind here")]
    UnknownNodeKind(String),

    /// A master slide has no `name` prop.
    #[error("`master-slide` element is missing its required `name` prop")]
    MissingName,

    /// Two master slides share a name and the normalizer was told to reject that.
    #[error("Duplicate master slide name: {0}")]
    DuplicateMasterName(String),

    /// A presentation child that is neither a slide nor a master slide, when
    /// the normalizer was told to reject those.
    #[error("`{0}` element cannot be a direct child of a presentation")]
    UnexpectedChild(ElementType),

    /// The element tree could not be read from, or written to, JSON.
    #[error("Failed to (de)serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A type alias for `Result<T, NormalizeError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, NormalizeError>;

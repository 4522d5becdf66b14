//! Error types for the question model and its configuration.
//!
//! `ValidationError` is the only failure a `Question` or `Choice` constructor
//! can produce. A failed constructor never yields a partially built value.

use thiserror::Error;

/// A field failed its constraint while building a `Question` or `Choice`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The question title was empty or whitespace only.
    #[error("question title must not be empty")]
    EmptyTitle,

    /// The question title exceeded its length bound.
    #[error("question title is {len} characters long, at most {max} allowed")]
    TitleTooLong { len: usize, max: usize },

    /// Points were zero or negative.
    #[error("points must be a positive integer, got {0}")]
    NonPositivePoints(i64),

    /// Points did not fit the stored representation.
    #[error("points value {0} is out of range")]
    PointsOutOfRange(i64),

    /// The choice text was empty or whitespace only.
    #[error("choice text must not be empty")]
    EmptyChoiceText,

    /// The choice text exceeded its length bound.
    #[error("choice text is {len} characters long, at most {max} allowed")]
    ChoiceTextTooLong { len: usize, max: usize },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyTitle | ValidationError::TitleTooLong { .. } => "title",
            ValidationError::NonPositivePoints(_) | ValidationError::PointsOutOfRange(_) => {
                "points"
            }
            ValidationError::EmptyChoiceText | ValidationError::ChoiceTextTooLong { .. } => "text",
        }
    }
}

/// Errors raised by `QuizkitConfig::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A length limit was set to zero, which would reject every input.
    #[error("limit `{0}` must be greater than zero")]
    ZeroLimit(&'static str),

    /// `default_points` was set to zero.
    #[error("default_points must be greater than zero")]
    ZeroDefaultPoints,
}

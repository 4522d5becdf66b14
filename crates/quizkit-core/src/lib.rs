//! quizkit-core — Quiz question model, validation, and question-set loading.
//!
//! This crate defines the `Question`/`Choice` data model, the validation
//! rules enforced when they are constructed, and the TOML question-set
//! format built on top of them.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;

pub use config::{load_config, load_config_from, Limits, QuizkitConfig};
pub use error::{ConfigError, ValidationError};
pub use model::{Choice, Question, QuestionId, QuestionSet};

//! Core data model types for quizkit.
//!
//! A `Question` owns an ordered list of `Choice`s. Both are validated when
//! they are built and never change afterwards, except that a question can
//! grow new choices through `Question::add_choice`.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::config::Limits;
use crate::error::ValidationError;

/// Unique identifier of a `Question`.
///
/// Random v4 UUIDs, so ids stay distinct across threads and processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct QuestionId(Uuid);

impl QuestionId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quiz prompt with a point value and its candidate answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    choices: Vec<Choice>,
    #[serde(skip)]
    limits: Limits,
}

impl Question {
    /// Points given to a question when none are specified.
    pub const DEFAULT_POINTS: u32 = 1;

    /// Create a question worth `DEFAULT_POINTS`.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_points(title, i64::from(Self::DEFAULT_POINTS))
    }

    /// Create a question with an explicit point value.
    ///
    /// `points` is signed so that zero and negative input can be rejected
    /// rather than being unrepresentable at the call site.
    pub fn with_points(title: impl Into<String>, points: i64) -> Result<Self, ValidationError> {
        Self::with_limits(title, points, Limits::default())
    }

    /// Create a question validated against custom `limits`.
    ///
    /// Choices later added to this question are checked against the same
    /// limits.
    pub fn with_limits(
        title: impl Into<String>,
        points: i64,
        limits: Limits,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title, &limits)?;
        let points = validate_points(points)?;

        let question = Self {
            id: QuestionId::generate(),
            title,
            points,
            choices: Vec::new(),
            limits,
        };
        tracing::debug!(id = %question.id, points, "created question");
        Ok(question)
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Choices in the order they were added.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Validate `text` and append a new choice, returning the appended choice.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<&Choice, ValidationError> {
        let choice = Choice::with_limits(text, is_correct, &self.limits)?;
        tracing::debug!(
            question = %self.id,
            index = self.choices.len(),
            is_correct,
            "added choice"
        );
        self.choices.push(choice);
        Ok(&self.choices[self.choices.len() - 1])
    }

    /// Choices flagged as correct, in insertion order.
    pub fn correct_choices(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter().filter(|c| c.is_correct)
    }

    pub fn has_correct_choice(&self) -> bool {
        self.choices.iter().any(|c| c.is_correct)
    }
}

/// A candidate answer belonging to exactly one `Question`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    text: String,
    is_correct: bool,
}

impl Choice {
    /// Create a choice checked against the default limits.
    pub fn new(text: impl Into<String>, is_correct: bool) -> Result<Self, ValidationError> {
        Self::with_limits(text, is_correct, &Limits::default())
    }

    /// Create a choice checked against custom `limits`.
    pub fn with_limits(
        text: impl Into<String>,
        is_correct: bool,
        limits: &Limits,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        validate_choice_text(&text, limits)?;
        Ok(Self { text, is_correct })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// A named collection of validated questions, as loaded from a question-set file.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionSet {
    /// Human-readable name.
    pub name: String,
    /// Description of this question set.
    pub description: String,
    /// Questions in file order.
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Sum of the point values of every question.
    pub fn total_points(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.points)).sum()
    }
}

fn validate_title(title: &str, limits: &Limits) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let len = title.chars().count();
    if len > limits.max_title_len {
        return Err(ValidationError::TitleTooLong {
            len,
            max: limits.max_title_len,
        });
    }
    Ok(())
}

fn validate_points(points: i64) -> Result<u32, ValidationError> {
    if points <= 0 {
        return Err(ValidationError::NonPositivePoints(points));
    }
    u32::try_from(points).map_err(|_| ValidationError::PointsOutOfRange(points))
}

fn validate_choice_text(text: &str, limits: &Limits) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyChoiceText);
    }
    let len = text.chars().count();
    if len > limits.max_choice_text_len {
        return Err(ValidationError::ChoiceTextTooLong {
            len,
            max: limits.max_choice_text_len,
        });
    }
    Ok(())
}

//! TOML question-set parser.
//!
//! Loads question sets from TOML files and directories. Every question and
//! choice goes through the validating constructors, so a loaded
//! `QuestionSet` only ever holds valid questions.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::QuizkitConfig;
use crate::model::{Question, QuestionSet};

/// Intermediate TOML structure for parsing question-set files.
#[derive(Debug, Deserialize)]
struct TomlQuestionFile {
    question_set: TomlQuestionSetHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestionSetHeader {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    default_points: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    title: String,
    #[serde(default)]
    points: Option<i64>,
    #[serde(default)]
    choices: Vec<TomlChoice>,
}

#[derive(Debug, Deserialize)]
struct TomlChoice {
    text: String,
    #[serde(default)]
    correct: bool,
}

/// Parse a single TOML file into a `QuestionSet`.
pub fn parse_question_set(path: &Path, config: &QuizkitConfig) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question set file: {}", path.display()))?;

    parse_question_set_str(&content, path, config)
}

/// Parse a TOML string into a `QuestionSet` (useful for testing).
pub fn parse_question_set_str(
    content: &str,
    source_path: &Path,
    config: &QuizkitConfig,
) -> Result<QuestionSet> {
    let parsed: TomlQuestionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let default_points = parsed
        .question_set
        .default_points
        .unwrap_or_else(|| i64::from(config.default_points));

    let questions = parsed
        .questions
        .into_iter()
        .enumerate()
        .map(|(idx, q)| {
            build_question(q, default_points, config).with_context(|| {
                format!(
                    "invalid question #{} in {}",
                    idx + 1,
                    source_path.display()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        "loaded {} question(s) from {}",
        questions.len(),
        source_path.display()
    );

    Ok(QuestionSet {
        name: parsed.question_set.name,
        description: parsed.question_set.description,
        questions,
    })
}

fn build_question(
    q: TomlQuestion,
    default_points: i64,
    config: &QuizkitConfig,
) -> Result<Question> {
    let mut question =
        Question::with_limits(q.title, q.points.unwrap_or(default_points), config.limits)?;

    for (idx, choice) in q.choices.into_iter().enumerate() {
        question
            .add_choice(choice.text, choice.correct)
            .with_context(|| format!("invalid choice #{}", idx + 1))?;
    }

    Ok(question)
}

/// Recursively load all `.toml` question-set files from a directory.
pub fn load_question_directory(dir: &Path, config: &QuizkitConfig) -> Result<Vec<QuestionSet>> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_question_directory(&path, config)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_set(&path, config) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// A non-fatal finding about an otherwise valid question set.
#[derive(Debug, Clone)]
pub struct LintWarning {
    /// 1-based position of the question in its set (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Check a question set for issues that validation deliberately allows.
pub fn lint_question_set(set: &QuestionSet) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    if set.name.trim().is_empty() {
        warnings.push(LintWarning {
            question: None,
            message: "question set has no name".into(),
        });
    }

    let mut seen_titles = HashSet::new();
    for (idx, question) in set.questions.iter().enumerate() {
        let position = Some(idx + 1);

        if !seen_titles.insert(question.title()) {
            warnings.push(LintWarning {
                question: position,
                message: format!("duplicate question title: {}", question.title()),
            });
        }

        if question.choices().is_empty() {
            warnings.push(LintWarning {
                question: position,
                message: "question has no choices".into(),
            });
        } else if !question.has_correct_choice() {
            warnings.push(LintWarning {
                question: position,
                message: "question has no correct choice".into(),
            });
        }

        let mut seen_texts = HashSet::new();
        for choice in question.choices() {
            if !seen_texts.insert(choice.text()) {
                warnings.push(LintWarning {
                    question: position,
                    message: format!("duplicate choice text: {}", choice.text()),
                });
            }
        }
    }

    warnings
}

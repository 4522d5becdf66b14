//! The `quizkit validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizkit_core::parser::{lint_question_set, load_question_directory, parse_question_set};

pub fn execute(questions_path: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = quizkit_core::load_config_from(config_path.as_deref())?;
    tracing::debug!(?config, "validating {}", questions_path.display());

    let sets = if questions_path.is_dir() {
        load_question_directory(&questions_path, &config)?
    } else {
        vec![parse_question_set(&questions_path, &config)?]
    };

    let mut total_warnings = 0;

    for set in &sets {
        println!("Question set: {} ({} questions)", set.name, set.len());

        let warnings = lint_question_set(set);
        for w in &warnings {
            let prefix = w
                .question
                .map(|n| format!("  [#{n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All question sets valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

//! The `quizkit init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizkit.toml").exists() {
        println!("quizkit.toml already exists, skipping.");
    } else {
        std::fs::write("quizkit.toml", SAMPLE_CONFIG)?;
        println!("Created quizkit.toml");
    }

    std::fs::create_dir_all("question-sets")?;
    let example_path = std::path::Path::new("question-sets/example.toml");
    if example_path.exists() {
        println!("question-sets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUESTION_SET)?;
        println!("Created question-sets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit question-sets/example.toml");
    println!("  2. Run: quizkit validate --questions question-sets");
    println!("  3. Run: quizkit show --questions question-sets/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizkit configuration

default_points = 1

[limits]
max_title_len = 200
max_choice_text_len = 100
"#;

const EXAMPLE_QUESTION_SET: &str = r#"[question_set]
name = "Example Question Set"
description = "A small question set to get started"

[[questions]]
title = "2 + 2 = ?"

[[questions.choices]]
text = "3"

[[questions.choices]]
text = "4"
correct = true

[[questions.choices]]
text = "5"

[[questions]]
title = "Capital of France?"
points = 2

[[questions.choices]]
text = "Paris"
correct = true

[[questions.choices]]
text = "London"

[[questions.choices]]
text = "Berlin"
"#;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use quizkit_core::parser::{lint_question_set, parse_question_set_str};

    #[test]
    fn example_question_set_is_clean() {
        let config = quizkit_core::config::parse_config_str(SAMPLE_CONFIG).unwrap();
        let set =
            parse_question_set_str(EXAMPLE_QUESTION_SET, Path::new("example.toml"), &config)
                .unwrap();
        assert_eq!(set.len(), 2);
        assert!(lint_question_set(&set).is_empty());
    }
}

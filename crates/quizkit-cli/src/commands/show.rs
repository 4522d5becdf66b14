//! The `quizkit show` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizkit_core::parser::parse_question_set;
use quizkit_core::QuestionSet;

pub fn execute(
    questions_path: PathBuf,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = quizkit_core::load_config_from(config_path.as_deref())?;
    let set = parse_question_set(&questions_path, &config)?;

    match format.as_str() {
        "text" => print_table(&set),
        "json" => println!("{}", serde_json::to_string_pretty(&set)?),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}

fn print_table(set: &QuestionSet) {
    println!("{}", set.name);
    if !set.description.is_empty() {
        println!("{}", set.description);
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Points", "Choice", "Correct"]);

    for (idx, question) in set.questions.iter().enumerate() {
        let number = (idx + 1).to_string();
        if question.choices().is_empty() {
            table.add_row(vec![
                Cell::new(&number),
                Cell::new(question.title()),
                Cell::new(question.points()),
                Cell::new("-"),
                Cell::new(""),
            ]);
            continue;
        }
        for (choice_idx, choice) in question.choices().iter().enumerate() {
            let (number, title, points) = if choice_idx == 0 {
                (
                    number.clone(),
                    question.title().to_string(),
                    question.points().to_string(),
                )
            } else {
                (String::new(), String::new(), String::new())
            };
            table.add_row(vec![
                Cell::new(number),
                Cell::new(title),
                Cell::new(points),
                Cell::new(choice.text()),
                Cell::new(if choice.is_correct() { "yes" } else { "" }),
            ]);
        }
    }

    println!("{table}");
    println!(
        "{} question(s), {} point(s) total",
        set.len(),
        set.total_points()
    );
}

/// Interactive questionnaire over stdin/stdout.
use std::io::{BufRead, Write};

use guidance_core::model::{ChoiceLabel, Question, ResponseSet};

/// Prompt every question in order and collect exactly one answer each.
///
/// Labels are accepted case-insensitively; anything else re-prompts. An
/// input stream that ends before the last question is an error, since the
/// scorer requires a complete response set.
pub fn run_form<R: BufRead, W: Write>(
    questions: &[Question],
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<ResponseSet> {
    let mut responses = ResponseSet::default();

    for question in questions {
        writeln!(output)?;
        writeln!(output, "Q{}: {}", question.id, question.prompt)?;
        for (label, text) in &question.choices {
            writeln!(output, "  {label}) {text}")?;
        }

        loop {
            write!(output, "Your answer [A-D]: ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                anyhow::bail!(
                    "input ended before question {} was answered",
                    question.id
                );
            }
            match line.trim().parse::<ChoiceLabel>() {
                Ok(label) => {
                    responses.insert(question.id, label);
                    break;
                }
                Err(_) => writeln!(output, "Please enter A, B, C or D.")?,
            }
        }
    }

    Ok(responses)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::io::Cursor;

    use super::*;

    fn question(id: u32) -> Question {
        Question {
            id,
            prompt: format!("prompt {id}"),
            choices: BTreeMap::from([
                (ChoiceLabel::A, "alpha".to_string()),
                (ChoiceLabel::B, "beta".to_string()),
                (ChoiceLabel::C, "gamma".to_string()),
                (ChoiceLabel::D, "delta".to_string()),
            ]),
        }
    }

    #[test]
    fn collects_one_answer_per_question() {
        let questions = vec![question(1), question(2)];
        let mut input = Cursor::new("a\nD\n");
        let mut output = Vec::new();

        let responses = run_form(&questions, &mut input, &mut output).unwrap();

        let expected: ResponseSet = [(1, ChoiceLabel::A), (2, ChoiceLabel::D)]
            .into_iter()
            .collect();
        assert_eq!(responses, expected);
        assert!(responses.validate_complete(&questions).is_ok());
    }

    #[test]
    fn invalid_input_reprompts() {
        let questions = vec![question(1)];
        let mut input = Cursor::new("x\n\nB\n");
        let mut output = Vec::new();

        let responses = run_form(&questions, &mut input, &mut output).unwrap();

        let expected: ResponseSet = [(1, ChoiceLabel::B)].into_iter().collect();
        assert_eq!(responses, expected);

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("Please enter A, B, C or D."));
    }

    #[test]
    fn truncated_input_is_an_error() {
        let questions = vec![question(1), question(2)];
        let mut input = Cursor::new("A\n");
        let mut output = Vec::new();

        let err = run_form(&questions, &mut input, &mut output).unwrap_err();
        assert!(err.to_string().contains("question 2"));
    }
}

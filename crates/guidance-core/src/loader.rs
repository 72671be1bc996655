/// Loads the questionnaire tables from JSON files.
///
/// Weight strings are parsed into [`Weight`] here, once, so the scoring
/// loop never touches raw strings. Tables are loaded at startup and
/// treated as read-only for the process lifetime.
use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::GuidanceError;
use crate::model::{
    ChoiceLabel, GuidanceRecord, GuidanceTables, Question, Subject, Weight, WeightTable,
};

pub const QUESTIONS_FILE: &str = "questions.json";
pub const WEIGHTS_FILE: &str = "weights.json";

/// File name of the guidance table for a subject.
pub fn guidance_file(subject: Subject) -> &'static str {
    match subject {
        Subject::Stem => "stem.json",
        Subject::Humanities => "humanities.json",
        Subject::Arts => "arts.json",
    }
}

/// Everything the scorer needs, loaded and validated.
#[derive(Debug, Clone)]
pub struct Tables {
    pub questions: Vec<Question>,
    pub weights: WeightTable,
    pub guidance: GuidanceTables,
}

/// Raw weights row as stored on disk, before weight strings are parsed.
#[derive(Debug, Deserialize)]
struct WeightRow {
    id: u32,
    weights: std::collections::BTreeMap<ChoiceLabel, String>,
}

/// Parse the questions table. Ids must be positive and unique, and every
/// question must carry all four choices.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, GuidanceError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for question in &questions {
        if question.id == 0 {
            return Err(GuidanceError::Table(
                "question id must be positive".to_string(),
            ));
        }
        if !seen.insert(question.id) {
            return Err(GuidanceError::DuplicateQuestion {
                question_id: question.id,
            });
        }
        for label in ChoiceLabel::ALL {
            if !question.choices.contains_key(&label) {
                return Err(GuidanceError::Table(format!(
                    "question {} is missing choice {label}",
                    question.id
                )));
            }
        }
    }

    Ok(questions)
}

/// Parse the weights table against an already-loaded question list.
///
/// Rows for unknown question ids are skipped with a warning; a question
/// left without a weight for any of its choices is an error, since the
/// scorer would hit it on the first submission choosing that option.
pub fn parse_weights(json: &str, questions: &[Question]) -> Result<WeightTable, GuidanceError> {
    let rows: Vec<WeightRow> = serde_json::from_str(json)?;
    let known: HashSet<u32> = questions.iter().map(|q| q.id).collect();

    let mut table = WeightTable::default();
    for row in rows {
        if !known.contains(&row.id) {
            warn!(question_id = row.id, "weight row for unknown question, skipping");
            continue;
        }
        for (label, raw) in row.weights {
            let weight: Weight =
                raw.parse().map_err(|source| GuidanceError::InvalidWeight {
                    question_id: row.id,
                    label,
                    value: raw.clone(),
                    source,
                })?;
            table.insert(row.id, label, weight);
        }
    }

    for question in questions {
        for label in ChoiceLabel::ALL {
            if table.get(question.id, label).is_none() {
                return Err(GuidanceError::UnknownQuestion {
                    question_id: question.id,
                    label,
                });
            }
        }
    }

    Ok(table)
}

/// Parse one subject's guidance table.
pub fn parse_guidance(json: &str) -> Result<Vec<GuidanceRecord>, GuidanceError> {
    let records: Vec<GuidanceRecord> = serde_json::from_str(json)?;
    for record in &records {
        if record.role_type.trim().is_empty() || record.career_line.trim().is_empty() {
            return Err(GuidanceError::Table(
                "guidance record with empty role type or career line".to_string(),
            ));
        }
    }
    Ok(records)
}

/// Load and validate all tables from a data directory.
pub fn load_tables(dir: &Path) -> Result<Tables, GuidanceError> {
    let questions = parse_questions(&std::fs::read_to_string(dir.join(QUESTIONS_FILE))?)?;
    let weights = parse_weights(
        &std::fs::read_to_string(dir.join(WEIGHTS_FILE))?,
        &questions,
    )?;

    let guidance = GuidanceTables {
        stem: parse_guidance(&std::fs::read_to_string(
            dir.join(guidance_file(Subject::Stem)),
        )?)?,
        humanities: parse_guidance(&std::fs::read_to_string(
            dir.join(guidance_file(Subject::Humanities)),
        )?)?,
        arts: parse_guidance(&std::fs::read_to_string(
            dir.join(guidance_file(Subject::Arts)),
        )?)?,
    };

    info!(
        questions = questions.len(),
        weighted_questions = weights.question_count(),
        guidance_records = guidance.record_count(),
        "tables loaded"
    );

    Ok(Tables {
        questions,
        weights,
        guidance,
    })
}

/// Scoring pass over a complete response set.
///
/// Each response bumps exactly one subject counter; responses whose weight
/// is composite additionally bump one role-type and one career-line
/// counter. Score maps are built fresh per run, so nothing carries over
/// between submissions. BTreeMaps keep iteration order deterministic,
/// which makes the tie-break policy below reproducible.
use std::collections::BTreeMap;

use crate::error::GuidanceError;
use crate::model::{OptionSubjectMap, ResponseSet, Subject, Weight, WeightTable};

/// The three score maps produced by one scoring run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub subjects: BTreeMap<Subject, u32>,
    pub role_types: BTreeMap<String, u32>,
    pub career_lines: BTreeMap<String, u32>,
}

/// Tally a response set against the subject map and weight table.
///
/// Role-type and career-line keys are taken from the weights verbatim; no
/// case or whitespace normalization happens here. The matcher compares
/// case-insensitively later.
pub fn score(
    responses: &ResponseSet,
    subject_map: &OptionSubjectMap,
    weights: &WeightTable,
) -> Result<Tally, GuidanceError> {
    let mut tally = Tally::default();

    for (question_id, label) in responses.iter() {
        let subject = subject_map
            .subject_for(label)
            .ok_or_else(|| GuidanceError::UnknownOption {
                label: label.to_string(),
            })?;
        *tally.subjects.entry(subject).or_insert(0) += 1;

        let weight = weights
            .get(question_id, label)
            .ok_or(GuidanceError::UnknownQuestion { question_id, label })?;
        if let Weight::Composite {
            role_type,
            career_line,
        } = weight
        {
            *tally.role_types.entry(role_type.clone()).or_insert(0) += 1;
            *tally.career_lines.entry(career_line.clone()).or_insert(0) += 1;
        }
    }

    Ok(tally)
}

/// How to resolve ties when several keys share the maximum count.
///
/// The score maps are ordered, so both policies are deterministic across
/// runs with identical input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Prefer the lowest-ordered key among the tied maximum.
    LowestKey,
    /// Prefer the highest-ordered key among the tied maximum.
    HighestKey,
}

/// Pick the key with the maximum count from a score map.
///
/// `dimension` names the map in the `EmptyScoreMap` error, which is a real
/// outcome: the role-type and career-line maps stay empty when no response
/// carried a composite weight.
pub fn top_key<'a, K: Ord>(
    scores: &'a BTreeMap<K, u32>,
    tie_break: TieBreak,
    dimension: &'static str,
) -> Result<&'a K, GuidanceError> {
    let mut best: Option<(&K, u32)> = None;
    for (key, &count) in scores {
        let replace = match best {
            None => true,
            Some((_, best_count)) => match tie_break {
                TieBreak::LowestKey => count > best_count,
                TieBreak::HighestKey => count >= best_count,
            },
        };
        if replace {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
        .ok_or(GuidanceError::EmptyScoreMap { dimension })
}

/// End-to-end assessment of one submission: validate the response set,
/// tally the three score maps, pick the top key in each, then look up the
/// guidance record for the resulting combination.
use tracing::info;

use crate::error::GuidanceError;
use crate::matcher;
use crate::model::{
    GuidanceRecord, GuidanceTables, OptionSubjectMap, Question, ResponseSet, Subject,
    WeightTable,
};
use crate::scorer::{self, Tally, TieBreak};

/// Tie-break used by the pipeline. Lowest-ordered key wins, so a tie
/// between "Analytical" and "Creative" resolves to "Analytical" on every
/// run.
pub const PIPELINE_TIE_BREAK: TieBreak = TieBreak::LowestKey;

/// Outcome of one assessment run.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub top_subject: Subject,
    pub top_role_type: String,
    pub top_career_line: String,
    /// `None` when no guidance row matched the top combination.
    pub guidance: Option<GuidanceRecord>,
    pub tally: Tally,
}

pub fn assess(
    responses: &ResponseSet,
    questions: &[Question],
    subject_map: &OptionSubjectMap,
    weights: &WeightTable,
    tables: &GuidanceTables,
) -> Result<Assessment, GuidanceError> {
    responses.validate_complete(questions)?;

    let tally = scorer::score(responses, subject_map, weights)?;

    let top_subject = *scorer::top_key(&tally.subjects, PIPELINE_TIE_BREAK, "subject")?;
    let top_role_type =
        scorer::top_key(&tally.role_types, PIPELINE_TIE_BREAK, "role type")?.clone();
    let top_career_line =
        scorer::top_key(&tally.career_lines, PIPELINE_TIE_BREAK, "career line")?.clone();

    let guidance =
        matcher::find_guidance(tables, top_subject, &top_role_type, &top_career_line).cloned();

    info!(
        subject = %top_subject,
        role_type = %top_role_type,
        career_line = %top_career_line,
        matched = guidance.is_some(),
        "assessment complete"
    );

    Ok(Assessment {
        top_subject,
        top_role_type,
        top_career_line,
        guidance,
        tally,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::model::{ChoiceLabel, GuidanceRecord};

    fn question(id: u32, prompt: &str) -> Question {
        Question {
            id,
            prompt: prompt.to_string(),
            choices: BTreeMap::from([
                (ChoiceLabel::A, "first".to_string()),
                (ChoiceLabel::B, "second".to_string()),
                (ChoiceLabel::C, "third".to_string()),
                (ChoiceLabel::D, "fourth".to_string()),
            ]),
        }
    }

    fn fixture() -> (Vec<Question>, WeightTable, GuidanceTables) {
        let questions = vec![
            question(1, "Pick an afternoon activity"),
            question(2, "Pick a school project"),
            question(3, "Pick a club"),
        ];

        let mut weights = WeightTable::default();
        weights.insert(1, ChoiceLabel::A, "Analytical:Engineering".parse().unwrap());
        weights.insert(1, ChoiceLabel::B, "Creative:Design".parse().unwrap());
        weights.insert(1, ChoiceLabel::C, "General".parse().unwrap());
        weights.insert(1, ChoiceLabel::D, "General".parse().unwrap());
        weights.insert(2, ChoiceLabel::A, "Analytical:Research".parse().unwrap());
        weights.insert(2, ChoiceLabel::B, "Creative:Media".parse().unwrap());
        weights.insert(2, ChoiceLabel::C, "General".parse().unwrap());
        weights.insert(2, ChoiceLabel::D, "General".parse().unwrap());
        weights.insert(3, ChoiceLabel::A, "Analytical:Engineering".parse().unwrap());
        weights.insert(3, ChoiceLabel::B, "Creative:Design".parse().unwrap());
        weights.insert(3, ChoiceLabel::C, "General".parse().unwrap());
        weights.insert(3, ChoiceLabel::D, "General".parse().unwrap());

        let tables = GuidanceTables {
            stem: vec![GuidanceRecord {
                role_type: "analytical".to_string(),
                career_line: "engineering".to_string(),
                career_options: "Software Engineer, Data Engineer".to_string(),
                entry_designations: "Graduate Engineer Trainee".to_string(),
                message: "Strong fit for building systems.".to_string(),
                universities: "IIT Delhi, ETH Zurich".to_string(),
                companies: "ISRO, Google".to_string(),
            }],
            humanities: Vec::new(),
            arts: Vec::new(),
        };

        (questions, weights, tables)
    }

    #[test]
    fn full_pipeline_matches_guidance_case_insensitively() {
        let (questions, weights, tables) = fixture();
        let responses: ResponseSet = [
            (1, ChoiceLabel::A),
            (2, ChoiceLabel::A),
            (3, ChoiceLabel::A),
        ]
        .into_iter()
        .collect();

        let assessment = assess(
            &responses,
            &questions,
            &OptionSubjectMap::default(),
            &weights,
            &tables,
        )
        .unwrap();

        assert_eq!(assessment.top_subject, Subject::Stem);
        assert_eq!(assessment.top_role_type, "Analytical");
        assert_eq!(assessment.top_career_line, "Engineering");
        // Table keys are lower-case; the match is still found.
        let guidance = assessment.guidance.unwrap();
        assert_eq!(guidance.entry_designations, "Graduate Engineer Trainee");
    }

    #[test]
    fn unmatched_combination_yields_no_guidance_not_an_error() {
        let (questions, weights, tables) = fixture();
        // All B: Arts subject, Creative role, Design/Media career. The
        // arts table is empty, so nothing matches.
        let responses: ResponseSet = [
            (1, ChoiceLabel::B),
            (2, ChoiceLabel::B),
            (3, ChoiceLabel::B),
        ]
        .into_iter()
        .collect();

        let assessment = assess(
            &responses,
            &questions,
            &OptionSubjectMap::default(),
            &weights,
            &tables,
        )
        .unwrap();

        assert_eq!(assessment.top_subject, Subject::Arts);
        assert!(assessment.guidance.is_none());
    }

    #[test]
    fn all_plain_weights_fail_with_empty_score_map() {
        let (questions, weights, tables) = fixture();
        // All C: every weight is the plain "General" category, so the
        // role-type map never gains an entry.
        let responses: ResponseSet = [
            (1, ChoiceLabel::C),
            (2, ChoiceLabel::C),
            (3, ChoiceLabel::C),
        ]
        .into_iter()
        .collect();

        let err = assess(
            &responses,
            &questions,
            &OptionSubjectMap::default(),
            &weights,
            &tables,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            GuidanceError::EmptyScoreMap {
                dimension: "role type"
            }
        ));
    }

    #[test]
    fn incomplete_submission_is_rejected() {
        let (questions, weights, tables) = fixture();
        let responses: ResponseSet = [(1, ChoiceLabel::A)].into_iter().collect();

        let err = assess(
            &responses,
            &questions,
            &OptionSubjectMap::default(),
            &weights,
            &tables,
        )
        .unwrap_err();

        assert!(matches!(err, GuidanceError::MissingResponse { .. }));
    }

    #[test]
    fn identical_submissions_produce_identical_assessments() {
        let (questions, weights, tables) = fixture();
        let responses: ResponseSet = [
            (1, ChoiceLabel::A),
            (2, ChoiceLabel::B),
            (3, ChoiceLabel::A),
        ]
        .into_iter()
        .collect();

        let subject_map = OptionSubjectMap::default();
        let first = assess(&responses, &questions, &subject_map, &weights, &tables).unwrap();
        let second = assess(&responses, &questions, &subject_map, &weights, &tables).unwrap();

        assert_eq!(first.top_subject, second.top_subject);
        assert_eq!(first.top_role_type, second.top_role_type);
        assert_eq!(first.top_career_line, second.top_career_line);
        assert_eq!(first.guidance, second.guidance);
        assert_eq!(first.tally, second.tally);
    }
}

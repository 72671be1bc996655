use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GuidanceError, WeightParseError};

/// One of the four fixed answer labels presented for every question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ChoiceLabel {
    A,
    B,
    C,
    D,
}

impl ChoiceLabel {
    pub const ALL: [ChoiceLabel; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for ChoiceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChoiceLabel {
    type Err = GuidanceError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            other => Err(GuidanceError::UnknownOption {
                label: other.to_string(),
            }),
        }
    }
}

/// Top-level domain bucket a response is attributed to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Subject {
    #[serde(rename = "STEM")]
    Stem,
    Humanities,
    Arts,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Self::Stem, Self::Humanities, Self::Arts];
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stem => "STEM",
            Self::Humanities => "Humanities",
            Self::Arts => "Arts",
        })
    }
}

/// A single multiple-choice question with four labeled choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Positive, unique question number.
    pub id: u32,
    pub prompt: String,
    /// Choice text per label. Loading verifies all four labels are present.
    pub choices: BTreeMap<ChoiceLabel, String>,
}

/// A parsed answer weight.
///
/// The raw tables encode weights as either a plain category label or a
/// composite `"<RoleType>:<CareerLine>"` string. Parsing happens once at
/// the loading boundary so the scoring loop never splits strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Weight {
    /// Contributes only to the subject tally.
    Category(String),
    /// Contributes one count each to the role-type and career-line tallies.
    Composite {
        role_type: String,
        career_line: String,
    },
}

impl FromStr for Weight {
    type Err = WeightParseError;

    /// Strings with more than one separator, or with a blank side, are
    /// rejected rather than truncated.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(WeightParseError::Empty);
        }
        let mut parts = raw.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(category), None, _) => Ok(Self::Category(category.to_string())),
            (Some(role_type), Some(career_line), None) => {
                let role_type = role_type.trim();
                let career_line = career_line.trim();
                if role_type.is_empty() || career_line.is_empty() {
                    return Err(WeightParseError::BlankPart);
                }
                Ok(Self::Composite {
                    role_type: role_type.to_string(),
                    career_line: career_line.to_string(),
                })
            }
            _ => Err(WeightParseError::ExtraSeparator),
        }
    }
}

/// Parsed answer weights, indexed by (question id, choice label).
#[derive(Debug, Clone, Default)]
pub struct WeightTable {
    entries: HashMap<u32, BTreeMap<ChoiceLabel, Weight>>,
}

impl WeightTable {
    pub fn insert(&mut self, question_id: u32, label: ChoiceLabel, weight: Weight) {
        self.entries
            .entry(question_id)
            .or_default()
            .insert(label, weight);
    }

    pub fn get(&self, question_id: u32, label: ChoiceLabel) -> Option<&Weight> {
        self.entries.get(&question_id)?.get(&label)
    }

    /// Number of questions with at least one weight entry.
    pub fn question_count(&self) -> usize {
        self.entries.len()
    }
}

/// Fixed mapping from choice label to subject category.
///
/// Built once at startup and never mutated afterwards; the scorer only
/// reads it, so sharing between concurrent readers is safe.
#[derive(Debug, Clone)]
pub struct OptionSubjectMap {
    entries: BTreeMap<ChoiceLabel, Subject>,
}

impl OptionSubjectMap {
    pub fn new(entries: BTreeMap<ChoiceLabel, Subject>) -> Self {
        Self { entries }
    }

    pub fn subject_for(&self, label: ChoiceLabel) -> Option<Subject> {
        self.entries.get(&label).copied()
    }
}

impl Default for OptionSubjectMap {
    /// The standard mapping: A maps to STEM, B to Arts, and both C and D
    /// to Humanities.
    fn default() -> Self {
        Self::new(BTreeMap::from([
            (ChoiceLabel::A, Subject::Stem),
            (ChoiceLabel::B, Subject::Arts),
            (ChoiceLabel::C, Subject::Humanities),
            (ChoiceLabel::D, Subject::Humanities),
        ]))
    }
}

/// One row of career-guidance text, keyed by role type and career line
/// within a subject's table. Both keys match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceRecord {
    pub role_type: String,
    pub career_line: String,
    pub career_options: String,
    pub entry_designations: String,
    pub message: String,
    pub universities: String,
    pub companies: String,
}

/// The three per-subject guidance tables.
#[derive(Debug, Clone, Default)]
pub struct GuidanceTables {
    pub stem: Vec<GuidanceRecord>,
    pub humanities: Vec<GuidanceRecord>,
    pub arts: Vec<GuidanceRecord>,
}

impl GuidanceTables {
    pub fn for_subject(&self, subject: Subject) -> &[GuidanceRecord] {
        match subject {
            Subject::Stem => &self.stem,
            Subject::Humanities => &self.humanities,
            Subject::Arts => &self.arts,
        }
    }

    pub fn record_count(&self) -> usize {
        self.stem.len() + self.humanities.len() + self.arts.len()
    }
}

/// One chosen label per question, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSet {
    entries: BTreeMap<u32, ChoiceLabel>,
}

impl ResponseSet {
    /// Record an answer. Returns the previous answer if the question was
    /// already answered.
    pub fn insert(&mut self, question_id: u32, label: ChoiceLabel) -> Option<ChoiceLabel> {
        self.entries.insert(question_id, label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, ChoiceLabel)> + '_ {
        self.entries.iter().map(|(&id, &label)| (id, label))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Verify the set holds exactly one answer per known question: every
    /// question answered, no answers for unknown question ids.
    pub fn validate_complete(&self, questions: &[Question]) -> Result<(), GuidanceError> {
        for question in questions {
            if !self.entries.contains_key(&question.id) {
                return Err(GuidanceError::MissingResponse {
                    question_id: question.id,
                });
            }
        }
        for (&question_id, &label) in &self.entries {
            if !questions.iter().any(|q| q.id == question_id) {
                return Err(GuidanceError::UnknownQuestion { question_id, label });
            }
        }
        Ok(())
    }
}

impl FromIterator<(u32, ChoiceLabel)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (u32, ChoiceLabel)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

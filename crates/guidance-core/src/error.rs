/// Error types for table loading and scoring.
///
/// An unmatched (role type, career line) pair in the guidance tables is
/// deliberately NOT an error: the matcher returns `None` and the caller
/// shows a friendly notice. Everything below indicates malformed input
/// tables or an incomplete submission and halts the run with a diagnostic.
use crate::model::ChoiceLabel;

#[derive(Debug, thiserror::Error)]
pub enum GuidanceError {
    #[error("option '{label}' is not mapped to any subject")]
    UnknownOption { label: String },

    #[error("no answer weight for question {question_id} option {label}")]
    UnknownQuestion {
        question_id: u32,
        label: ChoiceLabel,
    },

    #[error("cannot pick a top {dimension}: the score map is empty")]
    EmptyScoreMap { dimension: &'static str },

    #[error("no response recorded for question {question_id}")]
    MissingResponse { question_id: u32 },

    #[error("invalid weight '{value}' for question {question_id} option {label}: {source}")]
    InvalidWeight {
        question_id: u32,
        label: ChoiceLabel,
        value: String,
        #[source]
        source: WeightParseError,
    },

    #[error("duplicate question id {question_id}")]
    DuplicateQuestion { question_id: u32 },

    #[error("table error: {0}")]
    Table(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse table file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures when parsing a raw weight string into a [`crate::model::Weight`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeightParseError {
    #[error("weight string is empty")]
    Empty,

    #[error("more than one ':' separator")]
    ExtraSeparator,

    #[error("role type and career line must both be non-empty")]
    BlankPart,
}

/// Guidance lookup over the per-subject tables.
use crate::model::{GuidanceRecord, GuidanceTables, Subject};

/// Find the guidance record for the computed top values.
///
/// Selects the table for `subject` and returns the first row whose role
/// type and career line both equal the targets, ignoring ASCII case.
/// `None` means no row matched, which is a normal outcome the caller
/// presents to the user rather than an error.
pub fn find_guidance<'a>(
    tables: &'a GuidanceTables,
    subject: Subject,
    role_type: &str,
    career_line: &str,
) -> Option<&'a GuidanceRecord> {
    tables.for_subject(subject).iter().find(|record| {
        record.role_type.eq_ignore_ascii_case(role_type)
            && record.career_line.eq_ignore_ascii_case(career_line)
    })
}

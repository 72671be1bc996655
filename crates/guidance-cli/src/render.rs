/// Renders the assessment report to the output stream.
use std::io::Write;

use guidance_core::report::Assessment;

pub fn render_report<W: Write>(assessment: &Assessment, output: &mut W) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Your Career Alignment Summary")?;
    writeln!(output, "-----------------------------")?;
    writeln!(output, "Top Subject Inclination: {}", assessment.top_subject)?;
    writeln!(output, "Best Fit Role Type:      {}", assessment.top_role_type)?;
    writeln!(output, "Ideal Career Line:       {}", assessment.top_career_line)?;
    writeln!(output)?;

    match &assessment.guidance {
        Some(record) => {
            writeln!(output, "Based on your answers, here is your personalized guidance:")?;
            writeln!(output, "  Example Career Options:   {}", record.career_options)?;
            writeln!(output, "  Entry-Level Designations: {}", record.entry_designations)?;
            writeln!(output, "  Message:                  {}", record.message)?;
            writeln!(output, "  Top Universities:         {}", record.universities)?;
            writeln!(output, "  Potential Companies:      {}", record.companies)?;
        }
        None => {
            writeln!(
                output,
                "No perfect match found for this combination. Try again or revise the guidance tables."
            )?;
        }
    }

    Ok(())
}

mod config;
mod form;
mod render;

use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use guidance_core::loader;
use guidance_core::model::OptionSubjectMap;
use guidance_core::report;

use config::Config;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the questionnaire and the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_env()?;
    info!(data_dir = %config.data_dir.display(), "configuration loaded");

    let tables = loader::load_tables(&config.data_dir)?;
    let subject_map = OptionSubjectMap::default();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    writeln!(output, "Career Guidance Questionnaire")?;
    writeln!(
        output,
        "Answer each question to discover your career path, role type and subject inclination."
    )?;

    let responses = form::run_form(&tables.questions, &mut input, &mut output)?;
    info!(answers = responses.len(), "form submitted");

    let assessment = report::assess(
        &responses,
        &tables.questions,
        &subject_map,
        &tables.weights,
        &tables.guidance,
    )?;

    render::render_report(&assessment, &mut output)?;
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use questionnaire::{QuestionnaireError, onboarding};
use questionnaire_dialoguer::DialoguerBackend;
use questionnaire_ratatui::RatatuiBackend;

mod cli;
mod summary;

use cli::{BackendKind, Cli};
use summary::Summary;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file (truncated on each run) so it never draws over the UI
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&cli.log_file)
        .with_context(|| format!("Failed to open log file {}", cli.log_file.display()))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    info!("Starting questionnaire with {:?} backend", cli.backend);
    let questions = onboarding()?;

    let result = match cli.backend {
        BackendKind::Tui => questions.run(RatatuiBackend::new().with_title(&cli.title)),
        BackendKind::Prompt => {
            let backend = if cli.plain {
                DialoguerBackend::plain()
            } else {
                DialoguerBackend::new()
            };
            questions.run(backend)
        }
    };

    let answers = match result {
        Ok(answers) => answers,
        Err(QuestionnaireError::Cancelled) => {
            info!("Cancelled by user");
            println!("Questionnaire cancelled.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let summary = Summary::new(&questions, &answers);
    if cli.json {
        println!("{}", summary.to_json()?);
    } else {
        print!("{summary}");
    }

    Ok(())
}

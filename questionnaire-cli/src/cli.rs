use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "questionnaire")]
#[command(about = "Answer the onboarding questionnaire one question at a time")]
pub struct Cli {
    /// How to present the questions
    #[arg(long, value_enum, default_value_t = BackendKind::Tui)]
    pub backend: BackendKind,

    /// Title shown above the questions (full-screen backend only)
    #[arg(long, default_value = "Welcome")]
    pub title: String,

    /// Disable colors in the prompt backend
    #[arg(long)]
    pub plain: bool,

    /// Where to write the log; the terminal is owned by the UI
    #[arg(long, default_value = "questionnaire.log")]
    pub log_file: PathBuf,

    /// Print the answers as JSON instead of a readable summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// Full-screen terminal UI
    Tui,
    /// Line-by-line prompts
    Prompt,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["questionnaire"]).unwrap();
        assert_eq!(cli.backend, BackendKind::Tui);
        assert_eq!(cli.title, "Welcome");
        assert_eq!(cli.log_file, PathBuf::from("questionnaire.log"));
        assert!(!cli.json);
        assert!(!cli.plain);
    }

    #[test]
    fn prompt_backend_with_json() {
        let cli =
            Cli::try_parse_from(["questionnaire", "--backend", "prompt", "--json", "--plain"])
                .unwrap();
        assert_eq!(cli.backend, BackendKind::Prompt);
        assert!(cli.json);
        assert!(cli.plain);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(Cli::try_parse_from(["questionnaire", "--backend", "gui"]).is_err());
    }
}

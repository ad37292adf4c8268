//! The built-in onboarding questionnaire in the ratatui backend.
//!
//! Run with: cargo run -p questionnaire-ratatui --example onboarding

use questionnaire::onboarding;
use questionnaire_ratatui::{RatatuiBackend, Theme};
use ratatui::style::Color;

fn main() -> anyhow::Result<()> {
    let theme = Theme {
        primary: Color::LightMagenta,
        highlight: Color::LightYellow,
        ..Theme::default()
    };
    let backend = RatatuiBackend::new()
        .with_title("Welcome aboard")
        .with_theme(theme);

    let questions = onboarding()?;
    let answers = questions.run(backend)?;

    println!("\n=== Answers ===");
    for question in &questions {
        let answer = answers.get(question.id()).unwrap_or("(skipped)");
        println!("{}: {}", question.prompt(), answer);
    }

    Ok(())
}

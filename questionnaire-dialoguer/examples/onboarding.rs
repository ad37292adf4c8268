//! The built-in onboarding questionnaire as plain CLI prompts.
//!
//! Run with: cargo run -p questionnaire-dialoguer --example onboarding

use questionnaire::onboarding;
use questionnaire_dialoguer::DialoguerBackend;

fn main() -> anyhow::Result<()> {
    let answers = onboarding()?.run(DialoguerBackend::new())?;
    println!("{answers:#?}");
    Ok(())
}

use clap::Args;
use onboarding_relay::config::AppConfig;
use onboarding_relay::error::AppError;
use onboarding_relay::evaluation::{AlloyApplicantPayload, AlloyClient, ApplicantSubmission};
use onboarding_relay::telemetry;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Applicant JSON file using the onboarding form field names
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the Alloy payload instead of submitting it
    #[arg(long)]
    pub(crate) dry_run: bool,
}

pub(crate) async fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let submission = read_submission(&args.input)?;

    if args.dry_run {
        let payload = AlloyApplicantPayload::from(submission);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    if !config.alloy.has_credentials() {
        warn!("ALLOY_WORKFLOW_TOKEN or ALLOY_WORKFLOW_SECRET is not set");
    }

    let client = AlloyClient::new(config.alloy)?;
    let response = client.evaluate(submission).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn read_submission(path: &Path) -> Result<ApplicantSubmission, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

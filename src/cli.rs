use crate::engine::RemoteEngine;
use crate::error::LeetError;
use crate::model::{DisplayPayload, EngineConfig, ExecutionMode};
use crate::params::{self, RawParams};
use crate::session::SessionState;
use crate::{export, orchestrator, panel, text_summary};
use anyhow::Result;
use clap::Parser;
use rand::RngCore;
use std::time::Duration;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "leetspeak-cli",
    version,
    about = "Leetspeak text obfuscation through a remote transformation engine"
)]
pub struct Cli {
    /// Text to transform. Empty or absent text is silently ignored.
    pub text: Option<String>,

    /// Substitution rule-set, passed through to the engine (e.g. basic,
    /// intermediate, advanced)
    #[arg(long, default_value = "basic")]
    pub mode: String,

    /// Enumerate every possible transformed variant instead of one random one
    #[arg(long)]
    pub all: bool,

    /// Per substitution-type chance that the type is applied, 0 to 1
    #[arg(long)]
    pub probability: Option<f64>,

    /// Fraction of eligible positions actually substituted, 0 to 1
    #[arg(long)]
    pub frequency: Option<f64>,

    /// Use --uniform true or --uniform false: same substitute for every
    /// occurrence of a character
    #[arg(long, action = clap::ArgAction::Set)]
    pub uniform: Option<bool>,

    /// Print the result payload as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Write the full result set to a file named after the input
    #[arg(long)]
    pub download: bool,

    /// Directory the download artifact is written to
    #[arg(long, default_value = ".")]
    pub download_dir: std::path::PathBuf,

    /// Base URL of the transformation service
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub base_url: String,

    /// Engine request timeout
    #[arg(long, default_value = "30s")]
    pub engine_timeout: humantime::Duration,

    /// Print the parameter panel for the selected mode and exit
    #[arg(long)]
    pub print_panel: bool,
}

pub async fn run(args: Cli) -> Result<()> {
    if args.print_panel {
        let selector = if args.all {
            ExecutionMode::Exhaustive
        } else {
            ExecutionMode::Random
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&panel::parameter_panel(selector))?
        );
        return Ok(());
    }

    let mut session = SessionState::new();

    match params::validate(raw_params(&args)) {
        Ok(request) => {
            let engine = RemoteEngine::new(build_config(&args)).map_err(LeetError::Engine)?;
            let mode = request.execution.mode();
            let payload = orchestrator::submit(&engine, &request, &mut session).await?;
            render(&args, mode, &payload, &session)?;
        }
        Err(err) if err.is_silent() => {
            tracing::debug!("empty input text, nothing to submit");
        }
        Err(err) => return Err(err.into()),
    }

    if let Some(artifact) = export::download(args.download, &session)? {
        let path = export::write_artifact(&args.download_dir, &artifact)?;
        eprintln!("Saved: {}", path.display());
    }

    Ok(())
}

/// Map CLI flags onto the raw parameter record. The execution mode is the
/// explicit `--all` selector, never inferred from which values are present.
fn raw_params(args: &Cli) -> RawParams {
    RawParams {
        text: args.text.clone(),
        mode: args.mode.clone(),
        exhaustive: args.all,
        probability: args.probability,
        frequency: args.frequency,
        uniform: args.uniform,
    }
}

/// Generate a random correlation id for the engine request.
fn gen_request_id() -> String {
    let mut b = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut b);
    u64::from_le_bytes(b).to_string()
}

/// Build an `EngineConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> EngineConfig {
    EngineConfig {
        base_url: args.base_url.clone(),
        request_id: gen_request_id(),
        request_timeout: Duration::from(args.engine_timeout),
        user_agent: format!("leetspeak-cli/{}", env!("CARGO_PKG_VERSION")),
    }
}

fn render(
    args: &Cli,
    mode: ExecutionMode,
    payload: &DisplayPayload,
    session: &SessionState,
) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(payload)?);
    } else {
        for line in text_summary::build_text_summary(mode, payload, session).lines {
            println!("{line}");
        }
    }
    Ok(())
}

//! Terminal page for the weather alerts widget.
//!
//! Each state code given on the command line, or each line read from stdin,
//! runs one fetch cycle and paints the outcome.

mod terminal;
mod transport;

use std::io::{self, Write};
use std::time::Duration;

use alerts_core::{AlertsConfig, FetchController, FetchOutcome, Transport, ViewState};
use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use terminal::TerminalPage;
use transport::UreqTransport;

const TIMEOUT_ENV: &str = "ALERTS_TIMEOUT_SECS";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = AlertsConfig::from_env();
    let timeout = timeout_from_env()?;
    tracing::info!(base_url = %config.base_url, ?timeout, "alerts host starting");

    let controller = FetchController::new(&config, UreqTransport::new(timeout));
    let page = TerminalPage::new();
    page.surface().apply(&ViewState::Idle);
    let mut stdout = io::stdout();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        let mut failed = 0;
        for arg in &args {
            if let FetchOutcome::Failed(_) = run_cycle(&controller, &page, arg, &mut stdout).await? {
                failed += 1;
            }
        }
        if failed > 0 {
            anyhow::bail!("{failed} of {} lookups failed", args.len());
        }
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt(&mut stdout)?;
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        run_cycle(&controller, &page, &line, &mut stdout).await?;
        prompt(&mut stdout)?;
    }
    Ok(())
}

fn timeout_from_env() -> anyhow::Result<Duration> {
    match std::env::var(TIMEOUT_ENV) {
        Ok(raw) => {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{TIMEOUT_ENV} must be a whole number of seconds, got {raw:?}"))?;
            Ok(Duration::from_secs(secs))
        }
        Err(_) => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
    }
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "state> ")?;
    out.flush()
}

/// Load `line` into the input, run one cycle, and paint whichever region
/// changed.
async fn run_cycle<T: Transport>(
    controller: &FetchController<T>,
    page: &TerminalPage,
    line: &str,
    out: &mut impl Write,
) -> anyhow::Result<FetchOutcome> {
    page.input.load(line);
    let outcome = controller.handle_fetch(&page.surface()).await;
    match &outcome {
        FetchOutcome::Rendered { .. } => page.results.paint(out)?,
        FetchOutcome::Failed(_) => page.error.paint(out)?,
        FetchOutcome::Busy | FetchOutcome::NoInput => {}
    }
    out.flush()?;
    Ok(outcome)
}

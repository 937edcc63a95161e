use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use futures::future::{BoxFuture, FutureExt, OptionFuture};
use reqwest::Url;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use verinews::config::{DEFAULT_ENDPOINT, DEFAULT_VERIFY_PATH};
use verinews::presenter::{HEADING, SUBTITLE};
use verinews::*;

#[derive(Parser)]
#[command(name = "verinews", version, about = "Check whether a news headline or article looks fake or factual")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
    /// Base URL of the verification server
    #[arg(long, env = "VERINEWS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: Url,
    #[arg(long, default_value = DEFAULT_VERIFY_PATH)]
    verify_path: String,
    /// Give up on a request after this many milliseconds (default: never)
    #[arg(long)]
    timeout_ms: Option<u64>,
    /// Print panel state as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Cmd {
    /// Verify one piece of text (argument, --file, or stdin)
    Check { text: Option<String>, #[arg(long, conflicts_with = "text")] file: Option<PathBuf> },
    /// Interactive panel: each line is analyzed, `:edit <text>` only edits, `:submit` resubmits, `:quit` exits
    Repl,
}

enum Line {
    Analyze(String),
    Edit(String),
    Submit,
    Quit,
}

impl Line {
    fn parse(raw: &str) -> Self {
        match raw.trim_end() {
            ":quit" | ":q" => Line::Quit,
            ":submit" => Line::Submit,
            s => match s.strip_prefix(":edit") {
                Some(rest) => Line::Edit(rest.trim_start().to_string()),
                None => Line::Analyze(s.to_string()),
            },
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut cfg = ClientConfig::new(cli.endpoint);
    cfg.verify_path = cli.verify_path;
    cfg.timeout = cli.timeout_ms.map(Duration::from_millis);
    let verifier = HttpVerifier::new(&cfg).context("building HTTP client")?;
    tracing::debug!(url = %verifier.url(), "verification endpoint");

    match cli.cmd {
        Cmd::Check { text, file } => check(&verifier, read_input(text, file).await?, cli.json).await,
        Cmd::Repl => repl(&verifier, cli.json).await.map(|_| ExitCode::SUCCESS),
    }
}

async fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(t) = text { return Ok(t); }
    if let Some(path) = file {
        return tokio::fs::read_to_string(&path).await.with_context(|| format!("reading {}", path.display()));
    }
    let mut buf = String::new();
    tokio::io::stdin().read_to_string(&mut buf).await.context("reading stdin")?;
    Ok(buf)
}

fn show(panel: &VerificationPanel, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(panel.status())?);
    } else {
        let view = render(panel);
        let text = view.to_string();
        if !text.is_empty() { println!("{text}\n"); }
    }
    Ok(())
}

async fn check(verifier: &dyn Verifier, text: String, json: bool) -> Result<ExitCode> {
    let mut panel = VerificationPanel::with_input(text);
    if let Some(submission) = panel.begin_submit() {
        if !json { eprintln!("{}", render(&panel).button.label); }
        let outcome = submission.run(verifier).await;
        panel.complete(outcome);
    }
    show(&panel, json)?;
    Ok(if panel.failure().is_some() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

async fn repl(verifier: &dyn Verifier, json: bool) -> Result<()> {
    if !json { println!("{HEADING}\n{SUBTITLE}\n"); }
    let mut panel = VerificationPanel::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight: Option<BoxFuture<'_, Outcome>> = None;

    loop {
        tokio::select! {
            Some(outcome) = OptionFuture::from(in_flight.as_mut()), if in_flight.is_some() => {
                in_flight = None;
                panel.complete(outcome);
                show(&panel, json)?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let submit = match Line::parse(&line) {
                    Line::Quit => break,
                    Line::Edit(text) => { panel.set_input(text); false }
                    Line::Analyze(text) => { panel.set_input(text); true }
                    Line::Submit => true,
                };
                if !submit { continue; }
                if panel.is_busy() {
                    eprintln!("(still analyzing; draft saved)");
                    continue;
                }
                match panel.begin_submit() {
                    Some(submission) => {
                        in_flight = Some(submission.run(verifier).boxed());
                        if !json { eprintln!("{}", render(&panel).button.label); }
                    }
                    None => show(&panel, json)?,
                }
            }
        }
    }

    // an in-flight request always runs to completion
    if let Some(fut) = in_flight.take() {
        panel.complete(fut.await);
        show(&panel, json)?;
    }
    Ok(())
}

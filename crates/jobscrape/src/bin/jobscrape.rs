// ABOUTME: CLI binary for the job-posting content extractor.
// ABOUTME: Extracts job descriptions from URLs or saved HTML files and prints text or JSON.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use cvadapt_jobscrape::{extract_html, Client, ExtractionResult, JobSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "jobscrape")]
#[command(about = "Extract job descriptions from LinkedIn, Indeed and Reed postings")]
struct Args {
    /// Output the full extraction result as JSON instead of the text
    #[arg(long = "json")]
    json_output: bool,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Saved HTML file to extract from (requires --url)
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Posting URL the HTML file was saved from (required with --html)
    #[arg(long = "url")]
    url: Option<String>,

    /// Only report whether each URL is a supported job board; nothing is fetched
    #[arg(long = "check")]
    check: bool,

    /// Total request timeout in seconds
    #[arg(long = "timeout", default_value_t = 30)]
    timeout_secs: u64,

    /// Override the browser User-Agent sent with requests
    #[arg(long = "user-agent")]
    user_agent: Option<String>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// Job posting URLs to extract
    #[arg()]
    urls: Vec<String>,
}

fn validate(args: &Args) -> Result<()> {
    if args.html.is_some() && args.url.is_none() {
        bail!("--url is required when using --html");
    }
    if args.url.is_some() && args.html.is_none() {
        bail!("--url only applies with --html; pass job URLs as positional arguments");
    }
    if args.html.is_some() && !args.urls.is_empty() {
        bail!("cannot use both --html and positional URLs");
    }
    if args.html.is_none() && args.urls.is_empty() {
        bail!("at least one URL is required, or use --html with --url");
    }
    if args.check && args.html.is_some() {
        bail!("--check only applies to positional URLs");
    }
    Ok(())
}

fn format_output(results: &[ExtractionResult], json_output: bool) -> Result<String> {
    if json_output {
        let json = if results.len() == 1 {
            serde_json::to_string_pretty(&results[0])?
        } else {
            serde_json::to_string_pretty(results)?
        };
        return Ok(json);
    }

    Ok(results
        .iter()
        .map(|r| r.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n"))
}

fn check_urls(urls: &[String]) -> bool {
    let mut all_supported = true;
    for url in urls {
        match JobSource::from_url(url) {
            Some(source) => println!("{}\tsupported ({})", url, source),
            None => {
                println!("{}\tunsupported", url);
                all_supported = false;
            }
        }
    }
    all_supported
}

/// Extraction never fails on content, so an empty page is only worth a warning.
fn warn_if_empty(result: &ExtractionResult) {
    if result.is_empty() {
        eprintln!("warning: no description text extracted from {}", result.url);
    }
}

/// Runs the command. Returns false when any input failed.
async fn run(args: Args) -> Result<bool> {
    validate(&args)?;

    if args.check {
        return Ok(check_urls(&args.urls));
    }

    let start = Instant::now();
    let mut results: Vec<ExtractionResult> = Vec::new();
    let mut ok = true;

    if let (Some(html_path), Some(url)) = (&args.html, &args.url) {
        let html = fs::read_to_string(html_path)
            .with_context(|| format!("error reading file {:?}", html_path))?;
        match extract_html(&html, url) {
            Ok(result) => {
                warn_if_empty(&result);
                results.push(result);
            }
            Err(e) => {
                eprintln!("error extracting {}: {}", url, e);
                ok = false;
            }
        }
    } else {
        let mut builder = Client::builder().timeout(Duration::from_secs(args.timeout_secs));
        if let Some(ua) = &args.user_agent {
            builder = builder.user_agent(ua);
        }
        let client = builder.build();

        for url in &args.urls {
            match client.extract_detailed(url).await {
                Ok(result) => {
                    warn_if_empty(&result);
                    results.push(result);
                }
                Err(e) => {
                    eprintln!("error extracting {}: {}", url, e);
                    ok = false;
                }
            }
        }
    }

    let elapsed = start.elapsed();

    if !results.is_empty() {
        let output = format_output(&results, args.json_output)?;
        match &args.output {
            Some(path) => fs::write(path, &output)
                .with_context(|| format!("error writing to {:?}", path))?,
            None => println!("{}", output),
        }
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    Ok(ok)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(Args::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

use crate::progress::AuditTicker;
use clap::ArgMatches;
use colored::Colorize;
use seolens_client::{AuditClient, validate_url};
use seolens_core::report::{generate_text_report, report_filename, save_report};
use seolens_core::view::{AuditView, render};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL (e.g., https://example.com)";
pub const NO_EXPORT_DATA_MESSAGE: &str = "No audit data available to export";

/// What a line typed at the shell prompt means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Audit(String),
    Export(Option<PathBuf>),
    New,
    Help,
    Quit,
    Empty,
}

pub fn parse_shell_command(line: &str) -> ShellCommand {
    let line = line.trim();
    if line.is_empty() {
        return ShellCommand::Empty;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "export" => {
            let path = (!rest.is_empty()).then(|| PathBuf::from(expand_path(rest)));
            ShellCommand::Export(path)
        }
        "new" | "reset" => ShellCommand::New,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => ShellCommand::Audit(line.to_string()),
    }
}

/// Tilde-expand a user-supplied path.
pub fn expand_path(raw: &str) -> String {
    shellexpand::tilde(raw).into_owned()
}

fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

/// Run the request cycle with the cosmetic ticker alongside. The ticker is
/// stopped unconditionally once the request settles, success or not.
async fn run_audit(
    client: &AuditClient,
    url: &str,
    show_progress: bool,
) -> Result<AuditView, String> {
    let ticker = show_progress.then(AuditTicker::start);

    let outcome = client.audit(url).await;

    if let Some(ticker) = ticker {
        ticker.stop();
    }

    match outcome {
        Ok(result) => Ok(AuditView::from_result(&result)),
        Err(e) => Err(format!("Audit failed: {}", e.user_message())),
    }
}

fn default_report_path() -> PathBuf {
    PathBuf::from(report_filename(chrono::Local::now().date_naive()))
}

fn export_report(view: &AuditView, path: &Path) {
    let report = generate_text_report(view);
    match save_report(&report, path) {
        Ok(()) => println!(
            "{} Report saved to {}",
            "✓".green().bold(),
            path.display().to_string().bright_white()
        ),
        Err(e) => print_error(&format!("Could not save report: {}", e)),
    }
}

pub async fn handle_audit(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let url = sub_matches.get_one::<String>("url").unwrap().trim();
    let server = sub_matches.get_one::<Url>("server").unwrap();
    let timeout = *sub_matches.get_one::<u64>("timeout").unwrap_or(&30);
    let output = sub_matches.get_one::<PathBuf>("output");
    let export = sub_matches.get_flag("export");
    let show_progress = !sub_matches.get_flag("no-progress");

    if !validate_url(url) {
        print_error(INVALID_URL_MESSAGE);
        std::process::exit(1);
    }

    debug!("Using audit backend at {}", server);

    let client = AuditClient::with_timeout(server.clone(), timeout);
    client.prime().await;

    let view = match run_audit(&client, url, show_progress).await {
        Ok(view) => view,
        Err(message) => {
            print_error(&message);
            std::process::exit(1);
        }
    };

    print!("{}", render(&view));

    if export || output.is_some() {
        let path = output.cloned().unwrap_or_else(default_report_path);
        export_report(&view, &path);
    }
}

pub async fn handle_shell(sub_matches: &ArgMatches) -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let server = sub_matches.get_one::<Url>("server").unwrap();
    let timeout = *sub_matches.get_one::<u64>("timeout").unwrap_or(&30);

    let client = AuditClient::with_timeout(server.clone(), timeout);
    client.prime().await;

    println!("Auditing against {}", server.as_str().bright_white());
    println!(
        "Type a URL to audit it, {} for commands.\n",
        "help".bright_cyan()
    );

    // The one owner of the current audit; replaced wholesale per submission.
    let mut current: Option<AuditView> = None;

    loop {
        let Some(line) = read_prompt_line()? else {
            break; // stdin closed
        };

        match parse_shell_command(&line) {
            ShellCommand::Empty => {}
            ShellCommand::Help => print_shell_help(),
            ShellCommand::Quit => break,
            ShellCommand::New => {
                current = None;
                println!("Results cleared. Enter a URL to start a new audit.\n");
            }
            ShellCommand::Export(path) => match &current {
                Some(view) => {
                    let path = path.unwrap_or_else(default_report_path);
                    export_report(view, &path);
                }
                None => print_error(NO_EXPORT_DATA_MESSAGE),
            },
            ShellCommand::Audit(url) => {
                if !validate_url(&url) {
                    print_error(INVALID_URL_MESSAGE);
                    continue;
                }
                match run_audit(&client, &url, true).await {
                    Ok(view) => {
                        print!("{}", render(&view));
                        current = Some(view);
                    }
                    Err(message) => print_error(&message),
                }
            }
        }
    }

    Ok(())
}

fn read_prompt_line() -> anyhow::Result<Option<String>> {
    print!("{} ", "seolens>".bright_cyan().bold());
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None); // EOF
    }
    Ok(Some(line))
}

fn print_shell_help() {
    println!(
        "  {}          audit the given URL",
        "<url>".bright_cyan()
    );
    println!(
        "  {}  export the current report (default: seo-audit-<date>.txt)",
        "export [path]".bright_cyan()
    );
    println!(
        "  {}            discard results and start over",
        "new".bright_cyan()
    );
    println!("  {}           leave the shell", "quit".bright_cyan());
    println!();
}

use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("seolens")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("seolens")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("audit")
                .about("Run an SEO audit for a single URL and render the results")
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The URL to audit"),
                )
                .arg(
                    arg!(-s --"server" <URL>)
                        .required(false)
                        .help("Base URL of the audit backend")
                        .value_parser(clap::value_parser!(Url))
                        .default_value("http://127.0.0.1:8000/"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("30"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Export the plain-text report to this path")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(--"export")
                        .required(false)
                        .help("Export the report as seo-audit-<date>.txt in the current directory")
                        .action(clap::ArgAction::SetTrue)
                        .conflicts_with("output"),
                )
                .arg(
                    arg!(--"no-progress")
                        .required(false)
                        .help("Disable the progress bar")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("shell")
                .about(
                    "Start an interactive session: audit URLs, export reports and start \
                over without leaving the prompt",
                )
                .arg(
                    arg!(-s --"server" <URL>)
                        .required(false)
                        .help("Base URL of the audit backend")
                        .value_parser(clap::value_parser!(Url))
                        .default_value("http://127.0.0.1:8000/"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("30"),
                ),
        )
}

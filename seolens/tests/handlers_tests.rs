use seolens::commands::command_argument_builder;
use seolens::handlers::{ShellCommand, expand_path, parse_shell_command};
use std::path::PathBuf;
use url::Url;

// ============================================================================
// Shell command parsing
// ============================================================================

#[test]
fn test_parse_empty_and_whitespace() {
    assert_eq!(parse_shell_command(""), ShellCommand::Empty);
    assert_eq!(parse_shell_command("   \n"), ShellCommand::Empty);
}

#[test]
fn test_parse_help() {
    assert_eq!(parse_shell_command("help"), ShellCommand::Help);
    assert_eq!(parse_shell_command("?"), ShellCommand::Help);
}

#[test]
fn test_parse_quit_variants() {
    assert_eq!(parse_shell_command("quit"), ShellCommand::Quit);
    assert_eq!(parse_shell_command("exit"), ShellCommand::Quit);
    assert_eq!(parse_shell_command("EXIT"), ShellCommand::Quit);
}

#[test]
fn test_parse_new_and_reset() {
    assert_eq!(parse_shell_command("new"), ShellCommand::New);
    assert_eq!(parse_shell_command("reset"), ShellCommand::New);
}

#[test]
fn test_parse_export_without_path() {
    assert_eq!(parse_shell_command("export"), ShellCommand::Export(None));
}

#[test]
fn test_parse_export_with_path() {
    assert_eq!(
        parse_shell_command("export report.txt"),
        ShellCommand::Export(Some(PathBuf::from("report.txt")))
    );
}

#[test]
fn test_parse_export_expands_tilde() {
    let ShellCommand::Export(Some(path)) = parse_shell_command("export ~/audit.txt") else {
        panic!("expected an export command with a path");
    };
    assert!(!path.to_string_lossy().starts_with('~'));
    assert!(path.to_string_lossy().ends_with("audit.txt"));
}

#[test]
fn test_anything_else_is_an_audit_request() {
    assert_eq!(
        parse_shell_command("https://example.com"),
        ShellCommand::Audit("https://example.com".to_string())
    );
    assert_eq!(
        parse_shell_command("  not-a-url  "),
        ShellCommand::Audit("not-a-url".to_string())
    );
}

#[test]
fn test_expand_path_leaves_plain_paths_alone() {
    assert_eq!(expand_path("reports/audit.txt"), "reports/audit.txt");
}

// ============================================================================
// Argument parsing
// ============================================================================

#[test]
fn test_audit_requires_a_url() {
    let result = command_argument_builder()
        .try_get_matches_from(["seolens", "audit"]);
    assert!(result.is_err());
}

#[test]
fn test_audit_defaults() {
    let matches = command_argument_builder()
        .try_get_matches_from(["seolens", "audit", "-u", "https://example.com"])
        .unwrap();
    let (_, sub) = matches.subcommand().unwrap();

    assert_eq!(
        sub.get_one::<String>("url").unwrap(),
        "https://example.com"
    );
    assert_eq!(
        sub.get_one::<Url>("server").unwrap().as_str(),
        "http://127.0.0.1:8000/"
    );
    assert_eq!(*sub.get_one::<u64>("timeout").unwrap(), 30);
    assert!(!sub.get_flag("export"));
    assert!(!sub.get_flag("no-progress"));
}

#[test]
fn test_audit_export_conflicts_with_output() {
    let result = command_argument_builder().try_get_matches_from([
        "seolens",
        "audit",
        "-u",
        "https://example.com",
        "--export",
        "-o",
        "report.txt",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_shell_accepts_server_override() {
    let matches = command_argument_builder()
        .try_get_matches_from(["seolens", "shell", "-s", "https://audit.internal/"])
        .unwrap();
    let (name, sub) = matches.subcommand().unwrap();

    assert_eq!(name, "shell");
    assert_eq!(
        sub.get_one::<Url>("server").unwrap().as_str(),
        "https://audit.internal/"
    );
}

use seolens::commands::command_argument_builder;
use seolens::handlers;
use seolens_core::print_banner;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    match chosen_command.subcommand() {
        None => {
            // No subcommand provided, just show the banner
        }
        Some(("audit", primary_command)) => handlers::handle_audit(primary_command).await,
        Some(("shell", primary_command)) => {
            if let Err(e) = handlers::handle_shell(primary_command).await {
                eprintln!("Error running shell: {}", e);
                std::process::exit(1);
            }
        }
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

pub mod checks;
pub mod report;
pub mod view;

use colored::Colorize;

const BANNER: &str = r#"
                _
 ___ ___  ___  | | ___ _ __  ___
/ __/ _ \/ _ \ | |/ _ \ '_ \/ __|
\__ \  __/ (_) || |  __/ | | \__ \
|___/\___|\___/ |_|\___|_| |_|___/
"#;

pub fn print_banner() {
    println!("{}", BANNER.bright_cyan());
    println!(
        "  {} {}",
        "seolens".bright_white().bold(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
    println!("  {}\n", "SEO audits from your terminal".dimmed());
}

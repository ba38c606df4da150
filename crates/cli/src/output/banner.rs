use colored::Colorize;

const LOGO: &[&str] = &[
    r"    __ _ _ __ ___  _ __ ___| | __ _ _   _ ",
    r"   / _` | '_ ` _ \| '__/ _ \ |/ _` | | | |",
    r"  | (_| | | | | | | | |  __/ | (_| | |_| |",
    r"   \__,_|_| |_| |_|_|  \___|_|\__,_|\__, |",
    r"                                    |___/ ",
    r"      ░░ Alertmanager notification relay ░░",
];

pub fn print_banner() {
    for (i, line) in LOGO.iter().enumerate() {
        let color = if i + 1 == LOGO.len() {
            colored::Color::BrightWhite
        } else {
            colored::Color::Cyan
        };
        println!("{}", line.color(color).bold());
    }
}

pub fn print_version_block(version: &str) {
    print_banner();
    println!();
    println!("  {} {}", "Version".dimmed(), version.bright_cyan().bold());
    println!(
        "  {} {}",
        "   Arch".dimmed(),
        std::env::consts::ARCH.bright_white()
    );
    println!(
        "  {} {}",
        "     OS".dimmed(),
        std::env::consts::OS.bright_white()
    );
    println!();
}

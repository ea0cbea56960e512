//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     RadioReddit                                       ║
║     subreddit posts in, mp3s and playlists out        ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(subreddits: &[String], listing_type: &str, mp3_dir: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Subreddits: {}", subreddits.join(", "));
    println!("  Listing: {}", listing_type);
    println!("  Directory: {}", mp3_dir);
    println!();
}

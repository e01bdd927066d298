use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::github::types::PullRequest;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a stuck PR as one report line:
/// `- #<number> <title> (Last updated: <date>)`
pub fn format_stuck_line(pr: &PullRequest, use_colors: bool) -> String {
    let date = pr.updated_at.format("%Y-%m-%d");
    if use_colors {
        format!(
            "- {} {} ({})",
            format!("#{}", pr.number).cyan(),
            pr.title_or_untitled().bold(),
            format!("Last updated: {date}").dimmed()
        )
    } else {
        format!(
            "- #{} {} (Last updated: {date})",
            pr.number,
            pr.title_or_untitled()
        )
    }
}

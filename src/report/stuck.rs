use chrono::{DateTime, Duration, Utc};

use crate::error::Result;
use crate::github::{list_pull_requests, ListFilter, PullRequest, Repo, StateFilter, Transport};
use crate::output::formatter::{format_stuck_line, should_use_colors};
use crate::progress;

/// Select open PRs whose last update is strictly older than `threshold_days`.
/// The comparison is an exact duration, so a PR idle for 7 days and one hour
/// exceeds a 7-day threshold. API ordering is preserved.
pub fn stuck_pull_requests(
    open_prs: &[PullRequest],
    threshold_days: i64,
    now: DateTime<Utc>,
) -> Vec<&PullRequest> {
    // A threshold too large for chrono to represent cannot be exceeded.
    let Some(threshold) = Duration::try_days(threshold_days) else {
        return Vec::new();
    };

    open_prs
        .iter()
        .filter(|pr| now - pr.updated_at > threshold)
        .collect()
}

/// Fetch all open PRs and print those stuck for more than `threshold_days`.
pub async fn run<T: Transport>(transport: &T, repo: &Repo, threshold_days: i64) -> Result<()> {
    print!("Fetching open PRs stuck for more than {threshold_days} days...");
    let open_prs = progress::while_waiting(list_pull_requests(
        transport,
        repo,
        ListFilter {
            state: StateFilter::Open,
            ..Default::default()
        },
    ))
    .await?;

    let stuck = stuck_pull_requests(&open_prs, threshold_days, Utc::now());
    println!("PRs stuck for more than {threshold_days} days: {}", stuck.len());

    let use_colors = should_use_colors();
    for pr in stuck {
        println!("{}", format_stuck_line(pr, use_colors));
    }

    Ok(())
}

use chrono::{Duration, Utc};

use crate::error::Result;
use crate::github::{list_pull_requests, ListFilter, Repo, StateFilter, Transport};
use crate::progress;

const LAST_WEEK_DAYS: i64 = 7;

/// Print how many PRs were opened and how many were closed in the trailing
/// week. Two sequential fetches, each wrapped in the progress indicator.
pub async fn run<T: Transport>(transport: &T, repo: &Repo) -> Result<()> {
    let window_start = Utc::now() - Duration::days(LAST_WEEK_DAYS);

    print!("Fetching PRs opened in the last week...");
    let opened = progress::while_waiting(list_pull_requests(
        transport,
        repo,
        ListFilter {
            created_after: Some(window_start),
            ..Default::default()
        },
    ))
    .await?;
    println!("PRs opened in the last week: {}", opened.len());

    print!("Fetching PRs closed in the last week...");
    let closed = progress::while_waiting(list_pull_requests(
        transport,
        repo,
        ListFilter {
            state: StateFilter::Closed,
            closed_after: Some(window_start),
            ..Default::default()
        },
    ))
    .await?;
    println!("PRs closed in the last week: {}", closed.len());

    Ok(())
}

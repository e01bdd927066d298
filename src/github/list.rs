use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::github::client::Transport;
use crate::github::types::{PullRequest, Repo};

const API_BASE: &str = "https://api.github.com";
const PAGE_SIZE: usize = 100;

/// State filter forwarded to the listing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl StateFilter {
    fn as_query(self) -> &'static str {
        match self {
            StateFilter::All => "all",
            StateFilter::Open => "open",
            StateFilter::Closed => "closed",
        }
    }
}

/// Options for one listing operation. The time windows are applied after
/// pagination completes, not sent to the API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFilter {
    pub state: StateFilter,
    pub created_after: Option<DateTime<Utc>>,
    pub closed_after: Option<DateTime<Utc>>,
}

/// Fetch every page of pull requests for `repo`, then apply the time-window
/// filters. All-or-nothing: any transport or parse failure aborts the whole
/// listing and accumulated pages are discarded.
///
/// Pagination stops on an empty page or the first page shorter than the
/// requested size. A page of exactly [`PAGE_SIZE`] records triggers one more
/// round trip to confirm exhaustion.
pub async fn list_pull_requests<T: Transport>(
    transport: &T,
    repo: &Repo,
    filter: ListFilter,
) -> Result<Vec<PullRequest>> {
    let mut prs = Vec::new();
    let mut page: u32 = 1;

    loop {
        let url = format!(
            "{API_BASE}/repos/{owner}/{name}/pulls?state={state}&per_page={PAGE_SIZE}&page={page}",
            owner = repo.owner,
            name = repo.name,
            state = filter.state.as_query(),
        );

        let body = transport.get(&url).await?;
        let page_prs: Vec<PullRequest> = serde_json::from_str(&body)?;

        if page_prs.is_empty() {
            break;
        }

        let last_page = page_prs.len() < PAGE_SIZE;
        prs.extend(page_prs);
        if last_page {
            break;
        }

        page += 1;
    }

    if let Some(cutoff) = filter.created_after {
        prs.retain(|pr| pr.created_at >= cutoff);
    }
    if let Some(cutoff) = filter.closed_after {
        prs.retain(|pr| pr.closed_at.is_some_and(|closed| closed >= cutoff));
    }

    Ok(prs)
}

pub mod client;
pub mod list;
pub mod types;

pub use client::{GitHubClient, Transport};
pub use list::{list_pull_requests, ListFilter, StateFilter};
pub use types::{PullRequest, Repo};

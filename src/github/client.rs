use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::error::{Error, Result};

/// Seam between the pagination engine and the network. Implemented by
/// [`GitHubClient`] in production and by scripted doubles in tests.
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Authenticated GitHub API client. Holds one reusable `reqwest::Client`
/// for the lifetime of a tool invocation; every request carries the
/// product `User-Agent` and the `Authorization: token ...` header set
/// here once.
#[derive(Debug)]
pub struct GitHubClient {
    http: reqwest::Client,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("token {token}"))
            .map_err(|_| Error::InvalidToken)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .default_headers(headers)
            .build()?;

        Ok(Self { http })
    }
}

impl Transport for GitHubClient {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

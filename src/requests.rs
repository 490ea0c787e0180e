use anyhow::Context;
use log::debug;
use reqwest::{Client, ClientBuilder, Response};

use crate::fetcher::Fetcher;

pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    pub fn new() -> anyhow::Result<Self> {
        let client = ClientBuilder::new().build()?;
        Ok(Self { client })
    }

    pub async fn fetch_url_response(&self, url: &str) -> anyhow::Result<Response> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response)
    }

    pub async fn fetch_url_body(&self, url: &str) -> anyhow::Result<String> {
        let response = self.fetch_url_response(url).await?;
        let body = response.text().await?;
        Ok(body)
    }
}

/// Hands back the raw page body. Parsing is left to whoever consumes it.
pub struct PageFetcher {
    request_client: RequestClient,
}

impl PageFetcher {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            request_client: RequestClient::new()?,
        })
    }
}

impl Fetcher for PageFetcher {
    type Output = String;

    async fn get_data(&self, url: &str, default: String) -> anyhow::Result<String> {
        let body = self
            .request_client
            .fetch_url_body(url)
            .await
            .with_context(|| format!("failed to fetch {url}"))?;
        if body.trim().is_empty() {
            debug!("empty page at {url}, using default");
            return Ok(default);
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_default_tls() {
        assert!(RequestClient::new().is_ok());
    }

    #[tokio::test]
    #[ignore] // hits the live portal
    async fn fetches_a_live_meal_page() {
        let fetcher = PageFetcher::new().unwrap();
        let url = "https://stu.sen.go.kr/sts_sci_md00_001.do?schulCode=B100000658&schulCrseScCode=4&schulKndScCode=04&ay=&mm=&";
        let body = fetcher.get_data(url, String::new()).await.unwrap();
        assert!(!body.is_empty());
    }
}

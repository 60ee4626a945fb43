use reqwest::{header, Client};
use tokio_retry::{
    strategy::{jitter, ExponentialBackoff},
    Retry,
};

use crate::{
    config::{BASE_URL, USER_AGENT},
    error::{Error, Result},
};

#[derive(Debug, Clone)]
pub struct ImdbClient {
    client: Client,
}

impl ImdbClient {
    pub fn new() -> Result<Self> {
        let user_agent = header::HeaderValue::from_static(USER_AGENT);
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    pub fn get_base_url() -> String {
        BASE_URL.to_string()
    }

    /// Turns a site-relative `href` into a full URL.
    pub fn absolute_url(href: &str) -> String {
        if href.starts_with("http") {
            return href.to_string();
        }
        ImdbClient::get_base_url() + href
    }

    pub async fn get_html_from_url(&self, url: &str) -> Result<String> {
        let retry_strategy = ExponentialBackoff::from_millis(10).map(jitter).take(5);
        Retry::spawn(retry_strategy, || async move {
            self.get_html_from_url_no_retry(url).await
        })
        .await
    }

    async fn get_html_from_url_no_retry(&self, url: &str) -> Result<String> {
        log::debug!("Getting HTML for url: {}", url);
        let resp = self.client.get(url).send().await.map_err(|e| {
            Error::Http(format!(
                "Failed to get HTML for url: {}. Received error: {:?}",
                url, e
            ))
        })?;

        if resp.status() == 404 {
            return Err(Error::Http(format!("404 page not found: {}", url)));
        }

        resp.text().await.map_err(|e| {
            Error::Http(format!(
                "Failed to get text from url {}. Error was {}",
                url, e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_links_get_the_base_url() {
        assert_eq!(
            ImdbClient::absolute_url("/name/nm3918035/"),
            "https://www.imdb.com/name/nm3918035/"
        );
        assert_eq!(
            ImdbClient::absolute_url("https://www.imdb.com/title/tt1/"),
            "https://www.imdb.com/title/tt1/"
        );
    }

    #[test]
    fn client_builds() {
        assert!(ImdbClient::new().is_ok());
    }
}

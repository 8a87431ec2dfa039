use crate::domain::ports::Gateway;
use crate::utils::error::{GatewayError, Result, ServiceError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// `reqwest`-backed gateway: `GET <url>?param=<token>[&city=<location>]`.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
}

impl HttpGateway {
    pub fn new(timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| ServiceError::Config {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn fetch(
        &self,
        url: &str,
        param: &str,
        location: Option<&str>,
    ) -> std::result::Result<serde_json::Value, GatewayError> {
        let mut query = vec![("param", param)];
        if let Some(city) = location {
            query.push(("city", city));
        }

        tracing::debug!("Making upstream request to: {} ({:?})", url, query);
        let response = self.client.get(url).query(&query).send().await?;
        tracing::debug!("Upstream response status: {}", response.status());

        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_sends_param_and_city() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/temp")
                .query_param("param", "temp")
                .query_param("city", "Oslo");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"value": 268.4}));
        });

        let gateway = HttpGateway::new(5).unwrap();
        let body = gateway
            .fetch(&server.url("/temp"), "temp", Some("Oslo"))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(body["value"], 268.4);
    }

    #[tokio::test]
    async fn test_http_error_status_fails() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/pressure");
            then.status(503);
        });

        let gateway = HttpGateway::new(5).unwrap();
        let err = gateway
            .fetch(&server.url("/pressure"), "pressure", None)
            .await
            .unwrap_err();

        mock.assert();
        assert!(matches!(err, GatewayError::Transport(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_non_json_body_fails_to_decode() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pollutant");
            then.status(200).body("<html>maintenance</html>");
        });

        let gateway = HttpGateway::new(5).unwrap();
        let err = gateway
            .fetch(&server.url("/pollutant"), "aqi", None)
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Decode(_)));
    }
}

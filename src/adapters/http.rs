use crate::domain::model::{CalculationRequest, CalculationResponse, ParameterRanges};
use crate::domain::ports::Backend;
use crate::utils::error::{EkmanError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const CALCULATE_PATH: &str = "calculate_ekman";
pub const PARAMETERS_PATH: &str = "get_parameters";

/// Remote calculation server reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        validate_url("client.endpoint", endpoint)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EkmanError::ServerStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResponse> {
        let url = self.url(CALCULATE_PATH);
        tracing::debug!("POST {} with {:?}", url, request);

        let response = self.client.post(&url).json(request).send().await?;
        Self::decode(response).await
    }

    async fn parameter_ranges(&self) -> Result<ParameterRanges> {
        let url = self.url(PARAMETERS_PATH);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("http://localhost:5001/", Duration::from_secs(5)).unwrap();
        assert_eq!(backend.url(CALCULATE_PATH), "http://localhost:5001/calculate_ekman");
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        assert!(HttpBackend::new("ftp://localhost", Duration::from_secs(5)).is_err());
    }
}

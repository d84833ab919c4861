use super::{GenerationTransport, TransportError};
use crate::services::gemini::GenerateContentRequest;
use async_trait::async_trait;
use reqwest::Client;

/// reqwest-backed transport.
///
/// No timeout is set here; a caller that needs one builds the [`Client`]
/// itself and passes it to [`HttpTransport::with_client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GenerationTransport for HttpTransport {
    async fn send(
        &self,
        url: &str,
        request: &GenerateContentRequest,
    ) -> Result<String, TransportError> {
        let response = self.client.post(url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            return Err(TransportError::Status { status, body });
        }

        Ok(response.text().await?)
    }
}

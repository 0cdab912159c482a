//! ViperPay transaction API client.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::ClientError;
use crate::objects::transaction::{TransactionRequest, TransactionResult};

/// Typed HTTP client for the ViperPay **transactions API**.
///
/// Every request carries `Authorization: Bearer {api_key}`.
#[derive(Debug, Clone)]
pub struct ViperPayClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl ViperPayClient {
    /// Create a new `ViperPayClient`.
    ///
    /// * `base_url` – root URL of the gateway API (e.g. `https://api.viperpay.example/v1/`).
    ///   Endpoint paths are joined relative to it, so keep the trailing slash.
    /// * `api_key` – the merchant's secret API key.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// Build the underlying `reqwest::Client` with a total request timeout.
    pub fn with_timeout(self, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(self.with_http_client(client))
    }

    /// The gateway root this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST transactions` – create a PIX transaction.
    pub async fn create_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionResult, ClientError> {
        let url = self.base_url.join("transactions")?;

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        parse_response(resp).await
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(%status, "ViperPay rejected the request");
        return Err(ClientError::Api { status, body });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn sandbox_request() -> TransactionRequest {
        serde_json::from_value(serde_json::json!({
            "external_id": "passport-1-abcdefghi",
            "total_amount": 10.0,
            "payment_method": "PIX",
            "webhook_url": "https://webhook.site/unique-id",
            "items": [],
            "ip": "127.0.0.1",
            "customer": {
                "name": "Test User",
                "email": "test@example.com",
                "phone": "11999999999",
                "document_type": "CPF",
                "document": "11144477735"
            }
        }))
        .unwrap()
    }

    /// Serve a single connection with a canned HTTP response.
    async fn serve_once(status_line: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        Url::parse(&format!("http://{addr}/")).unwrap()
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) {
        let mut received = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            received.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&received);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if received.len() >= header_end + 4 + content_length {
                    return;
                }
            }
        }
    }

    #[test]
    fn test_endpoint_joins_relative_to_base() {
        let client = ViperPayClient::new(
            Url::parse("https://api.viperpay.example/v1/").unwrap(),
            "sk_test",
        );
        let url = client.base_url().join("transactions").unwrap();
        assert_eq!(url.as_str(), "https://api.viperpay.example/v1/transactions");
    }

    #[tokio::test]
    async fn test_unreachable_gateway_is_http_error() {
        let client = ViperPayClient::new(Url::parse("http://127.0.0.1:9/").unwrap(), "sk_test")
            .with_timeout(Duration::from_secs(2))
            .unwrap();

        let err = client.create_transaction(&sandbox_request()).await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let base_url = serve_once("502 Bad Gateway", "upstream unavailable").await;
        let client = ViperPayClient::new(base_url, "sk_test");

        let err = client.create_transaction(&sandbox_request()).await.unwrap_err();
        match &err {
            ClientError::Api { status, body } => {
                assert_eq!(*status, reqwest::StatusCode::BAD_GATEWAY);
                assert_eq!(body, "upstream unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "api error: status 502 Bad Gateway, body: upstream unavailable"
        );
    }

    #[tokio::test]
    async fn test_undecodable_body_is_json_error() {
        let base_url = serve_once("200 OK", "not json").await;
        let client = ViperPayClient::new(base_url, "sk_test");

        let err = client.create_transaction(&sandbox_request()).await.unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));
        assert!(err.to_string().starts_with("json error: "));
    }

    #[tokio::test]
    async fn test_success_decodes_transaction() {
        let base_url = serve_once(
            "201 Created",
            r#"{"id":"vp_1","external_id":"passport-1-abcdefghi","status":"PENDING","total_value":10.0,"pix":{"payload":"000201"},"payment_method":"PIX","hasError":false}"#,
        )
        .await;
        let client = ViperPayClient::new(base_url, "sk_test");

        let result = client.create_transaction(&sandbox_request()).await.unwrap();
        assert_eq!(result.id, "vp_1");
        assert_eq!(result.pix.unwrap().payload, "000201");
    }
}

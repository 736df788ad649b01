//! Service catalog client
//!
//! Fetches the full list of services from the remote catalog in one
//! `POST` request.

use crate::catalog::error::CatalogError;
use crate::catalog::record::ServiceRecord;
use async_trait::async_trait;

/// Source of service records
///
/// The view controller only depends on this trait, so tests can swap the
/// HTTP client for an in-memory catalog.
#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    /// Fetch every service record the catalog knows about
    async fn fetch_services(&self) -> Result<Vec<ServiceRecord>, CatalogError>;
}

/// HTTP-backed catalog
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalog {
    /// Create a catalog client for the given endpoint
    ///
    /// The `reqwest::Client` is shared so connections are pooled.
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Endpoint this client posts to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ServiceCatalog for HttpCatalog {
    async fn fetch_services(&self) -> Result<Vec<ServiceRecord>, CatalogError> {
        tracing::debug!(url = %self.url, "Fetching service catalog");

        let response = self.client.post(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            tracing::error!(
                status_code = status.as_u16(),
                error_body = %body,
                "Service catalog returned error status"
            );

            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let services: Vec<ServiceRecord> = serde_json::from_str(&body)?;

        tracing::debug!(
            count = services.len(),
            "Successfully received service catalog"
        );

        Ok(services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::ServiceId;
    use mockito::Server;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_fetch_services_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"id": 1, "category": "Food", "name": "Pelmeni", "price": 420},
                    {"id": 2, "category": "Drinks", "name": "Kvass"}
                ]"#,
            )
            .create_async()
            .await;

        let catalog = HttpCatalog::new(reqwest::Client::new(), format!("{}/api/v1", server.url()));
        let result = catalog.fetch_services().await;

        mock.assert_async().await;
        let services = result.unwrap();
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].id, ServiceId::Number(1));
        assert_eq!(services[1].category_key(), "Drinks");
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_services_empty_array() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let catalog = HttpCatalog::new(reqwest::Client::new(), format!("{}/api/v1", server.url()));
        let services = catalog.fetch_services().await.unwrap();

        mock.assert_async().await;
        assert!(services.is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_services_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1")
            .with_status(503)
            .with_body("maintenance")
            .create_async()
            .await;

        let catalog = HttpCatalog::new(reqwest::Client::new(), format!("{}/api/v1", server.url()));
        let result = catalog.fetch_services().await;

        mock.assert_async().await;
        match result {
            Err(CatalogError::Status { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_services_invalid_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1")
            .with_status(200)
            .with_body("This is not JSON")
            .create_async()
            .await;

        let catalog = HttpCatalog::new(reqwest::Client::new(), format!("{}/api/v1", server.url()));
        let result = catalog.fetch_services().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_services_object_instead_of_array() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1")
            .with_status(200)
            .with_body(r#"{"services": []}"#)
            .create_async()
            .await;

        let catalog = HttpCatalog::new(reqwest::Client::new(), format!("{}/api/v1", server.url()));
        let result = catalog.fetch_services().await;

        mock.assert_async().await;
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse service catalog response"));
    }

    #[tokio::test]
    async fn test_fetch_services_connection_refused() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let catalog = HttpCatalog::new(reqwest::Client::new(), "http://127.0.0.1:9/api/v1");
        let result = catalog.fetch_services().await;
        assert!(matches!(result, Err(CatalogError::Request(_))));
    }

    #[test]
    fn test_url_is_kept_verbatim() {
        let catalog = HttpCatalog::new(reqwest::Client::new(), "https://menuapp.ru/api/v1");
        assert_eq!(catalog.url(), "https://menuapp.ru/api/v1");
    }
}

//! reqwest-backed directory client.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{CustomerId, CustomerRecord},
    protocol::{CreateCustomerRequest, DeleteCustomerQuery, CUSTOMER_PATH, LIST_CUSTOMERS_PATH},
};
use tracing::debug;
use url::Url;

use crate::{error::DirectoryError, DirectoryClient};

pub struct HttpDirectoryClient {
    http: Client,
    base_url: Url,
}

impl HttpDirectoryClient {
    pub fn new(base_url: &str) -> Result<Self, DirectoryError> {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self, DirectoryError> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, DirectoryError> {
        Ok(self.base_url.join(path)?)
    }
}

/// Parses `raw` and makes sure its path ends with `/`, otherwise `Url::join`
/// would replace the last path segment instead of appending to it.
pub fn normalize_base_url(raw: &str) -> Result<Url, DirectoryError> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

async fn ensure_success(response: Response) -> Result<Response, DirectoryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(DirectoryError::Rejected {
        status: status.as_u16(),
        body,
    })
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, DirectoryError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, DirectoryError> {
        let url = self.endpoint(LIST_CUSTOMERS_PATH)?;
        let response = self.http.get(url).send().await?;
        let customers: Vec<CustomerRecord> = decode_json(ensure_success(response).await?).await?;
        debug!(count = customers.len(), "listed customers");
        Ok(customers)
    }

    async fn create_customer(
        &self,
        request: &CreateCustomerRequest,
    ) -> Result<CustomerRecord, DirectoryError> {
        let url = self.endpoint(CUSTOMER_PATH)?;
        let response = self.http.post(url).json(request).send().await?;
        let created: CustomerRecord = decode_json(ensure_success(response).await?).await?;
        debug!(customer_id = %created.id, "created customer");
        Ok(created)
    }

    async fn delete_customer(&self, id: &CustomerId) -> Result<(), DirectoryError> {
        let url = self.endpoint(CUSTOMER_PATH)?;
        let response = self
            .http
            .delete(url)
            .query(&DeleteCustomerQuery { id: id.clone() })
            .send()
            .await?;
        ensure_success(response).await?;
        debug!(customer_id = %id, "deleted customer");
        Ok(())
    }
}

//! HTTP client for the staff server REST API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
use shared::models::{DataResponse, Employee, EmployeePayload, EmployeeQuery, PaginatedResponse};

use crate::{ClientConfig, ClientError, ClientResult, EmployeeApi};

const EMPLOYEES: &str = "api/employees";

/// HTTP client for making requests to the staff server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.get(self.url(path))).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    /// Make a DELETE request, expecting an empty success body
    pub async fn delete_path(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(ClientError::from_response(status, &text));
        }
        Ok(())
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::debug!(%status, body = %text, "Request failed");
            return Err(ClientError::from_response(status, &text));
        }

        serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("{e}: {text}")))
    }
}

#[async_trait]
impl EmployeeApi for HttpClient {
    async fn list(&self, query: &EmployeeQuery) -> ClientResult<PaginatedResponse<Employee>> {
        self.send(self.client.get(self.url(EMPLOYEES)).query(query))
            .await
    }

    async fn get(&self, id: i64) -> ClientResult<Employee> {
        let response: DataResponse<Employee> = self.get_json(&format!("{EMPLOYEES}/{id}")).await?;
        Ok(response.data)
    }

    async fn create(&self, payload: &EmployeePayload) -> ClientResult<Employee> {
        let response: DataResponse<Employee> = self.post_json(EMPLOYEES, payload).await?;
        Ok(response.data)
    }

    async fn update(&self, id: i64, payload: &EmployeePayload) -> ClientResult<Employee> {
        let response: DataResponse<Employee> =
            self.put_json(&format!("{EMPLOYEES}/{id}"), payload).await?;
        Ok(response.data)
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.delete_path(&format!("{EMPLOYEES}/{id}")).await
    }
}

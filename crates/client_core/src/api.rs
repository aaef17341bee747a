use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{Cliente, ClienteDraft},
    protocol::{CreatedClienteResponse, NovoClienteRequest, CLIENTES_PATH},
};
use tracing::debug;

use crate::error::ClientesError;

/// The two calls the screen makes against the `clientes` resource.
#[async_trait]
pub trait ClientesApi: Send + Sync {
    async fn list_clientes(&self) -> Result<Vec<Cliente>, ClientesError>;
    async fn create_cliente(&self, draft: &ClienteDraft) -> Result<Cliente, ClientesError>;
}

#[derive(Clone)]
pub struct HttpClientesApi {
    http: Client,
    server_url: String,
}

impl HttpClientesApi {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{CLIENTES_PATH}", self.server_url.trim_end_matches('/'))
    }

    async fn read_body(response: reqwest::Response) -> Result<String, ClientesError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientesError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl ClientesApi for HttpClientesApi {
    async fn list_clientes(&self) -> Result<Vec<Cliente>, ClientesError> {
        let url = self.endpoint();
        debug!("Requesting: GET {url}");
        let response = self.http.get(&url).send().await?;
        let body = Self::read_body(response).await?;
        let clientes: Vec<Cliente> = serde_json::from_str(&body)?;
        debug!(count = clientes.len(), "decoded clientes list");
        Ok(clientes)
    }

    async fn create_cliente(&self, draft: &ClienteDraft) -> Result<Cliente, ClientesError> {
        let url = self.endpoint();
        debug!("Requesting: POST {url}");
        let response = self
            .http
            .post(&url)
            .json(&NovoClienteRequest::from(draft))
            .send()
            .await?;
        let body = Self::read_body(response).await?;
        let created: CreatedClienteResponse = serde_json::from_str(&body)?;
        Ok(created.into_cliente(draft))
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;

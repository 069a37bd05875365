use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::{extract_message, GatewayError};
use super::traits::Gateway;
use crate::config::{build_auth_header, ApiConfig};
use crate::model::{
    AuthResponse, Credentials, NewComment, NewTicket, Ticket, TicketId, TicketUpdate,
};
use crate::session::TokenStore;

/// Only the id is needed from the create response, which may carry it as
/// `ticket_id`, `id` or both.
#[derive(Deserialize)]
struct CreatedTicket {
    #[serde(default)]
    ticket_id: Option<TicketId>,
    #[serde(default)]
    id: Option<TicketId>,
}

/// reqwest-backed gateway with a fixed base address.
///
/// The bearer token is read from the token store on every request, so a
/// login or logout takes effect on the very next call.
pub struct HttpGateway {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl HttpGateway {
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, GatewayError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)));
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(u64::from(config.timeout_seconds)));
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, authenticated: bool) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method.clone(), url);

        let mut bearer = false;
        if authenticated {
            if let Some((name, value)) = build_auth_header(self.tokens.load().as_ref()) {
                builder = builder.header(name, value);
                bearer = true;
            }
        }

        tracing::debug!(method = %method, path = %path, bearer, "API request");
        builder
    }

    async fn execute(&self, path: &str, builder: RequestBuilder) -> Result<Response, GatewayError> {
        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::from_reqwest(path, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = extract_message(&body);
        tracing::debug!(
            path = %path,
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "API error response"
        );
        Err(GatewayError::Api {
            path: path.to_string(),
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, GatewayError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::from_reqwest(path, e))?;
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    async fn send_empty(&self, method: Method, path: &str) -> Result<(), GatewayError> {
        let builder = self.request(method, path, true);
        self.execute(path, builder).await.map(|_| ())
    }

    async fn send_json<B: Serialize + ?Sized + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        authenticated: bool,
    ) -> Result<Response, GatewayError> {
        let builder = self.request(method, path, authenticated).json(body);
        self.execute(path, builder).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let builder = self.request(Method::GET, path, true);
        let response = self.execute(path, builder).await?;
        Self::decode(path, response).await
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, GatewayError> {
        let response = self
            .send_json(Method::POST, "/login", credentials, false)
            .await?;
        Self::decode("/login", response).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, GatewayError> {
        let response = self
            .send_json(Method::POST, "/register", credentials, false)
            .await?;
        Self::decode("/register", response).await
    }

    async fn list_tickets(&self) -> Result<Vec<Ticket>, GatewayError> {
        self.get_json("/tickets").await
    }

    async fn get_ticket(&self, id: TicketId) -> Result<Ticket, GatewayError> {
        self.get_json(&format!("/tickets/{}", id)).await
    }

    async fn close_ticket(&self, id: TicketId) -> Result<(), GatewayError> {
        self.send_empty(Method::POST, &format!("/tickets/{}/close", id))
            .await
    }

    async fn open_ticket(&self, id: TicketId) -> Result<(), GatewayError> {
        self.send_empty(Method::POST, &format!("/tickets/{}/open", id))
            .await
    }

    async fn delete_ticket(&self, id: TicketId) -> Result<(), GatewayError> {
        self.send_empty(Method::DELETE, &format!("/tickets/{}", id))
            .await
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<TicketId, GatewayError> {
        let response = self
            .send_json(Method::POST, "/tickets", ticket, true)
            .await?;
        let created: CreatedTicket = Self::decode("/tickets", response).await?;
        created
            .ticket_id
            .or(created.id)
            .ok_or_else(|| GatewayError::Decode {
                path: "/tickets".to_string(),
                reason: "create response has no ticket id".to_string(),
            })
    }

    async fn update_ticket(
        &self,
        id: TicketId,
        update: &TicketUpdate,
    ) -> Result<(), GatewayError> {
        let path = format!("/tickets/{}", id);
        self.send_json(Method::PUT, &path, update, true)
            .await
            .map(|_| ())
    }

    async fn add_comment(&self, id: TicketId, comment: &NewComment) -> Result<(), GatewayError> {
        let path = format!("/tickets/{}/comments", id);
        self.send_json(Method::POST, &path, comment, true)
            .await
            .map(|_| ())
    }
}

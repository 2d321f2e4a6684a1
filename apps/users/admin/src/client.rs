//! HTTP client for `/api/users`.

use std::time::Duration;

use domain_users::{CreateUser, MessageResponse, User, UserEnvelope, UserListResponse};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer carrying the API's `{ "error": ... }` body
    #[error("{message} ({status})")]
    Api { status: StatusCode, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct UsersClient {
    http: Client,
    base_url: String,
}

impl UsersClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    pub async fn list(&self) -> Result<Vec<User>, ClientError> {
        let response = self.http.get(&self.base_url).send().await?;
        let list: UserListResponse = parse(response).await?;
        Ok(list.data)
    }

    pub async fn create(&self, input: &CreateUser) -> Result<User, ClientError> {
        let response = self.http.post(&self.base_url).json(input).send().await?;
        let envelope: UserEnvelope = parse(response).await?;
        Ok(envelope.data)
    }

    pub async fn delete(&self, id: i32) -> Result<String, ClientError> {
        let response = self
            .http
            .delete(format!("{}/{}", self.base_url, id))
            .send()
            .await?;
        let body: MessageResponse = parse(response).await?;
        Ok(body.message)
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };

    Err(ClientError::Api { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::spawn_api;

    #[tokio::test]
    async fn test_create_list_delete() {
        let client = UsersClient::new(spawn_api().await).unwrap();
        assert!(client.list().await.unwrap().is_empty());

        let user = client
            .create(&CreateUser::new("Ana Torres", "ana@mail.com"))
            .await
            .unwrap();
        assert_eq!(user.name, "Ana Torres");
        assert_eq!(client.list().await.unwrap(), vec![user.clone()]);

        let message = client.delete(user.id).await.unwrap();
        assert_eq!(message, "Usuario eliminado correctamente");
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_api_errors_carry_server_message() {
        let client = UsersClient::new(spawn_api().await).unwrap();

        match client.delete(999).await {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message, "Usuario no encontrado");
            }
            other => panic!("expected API error, got {other:?}"),
        }

        match client.create(&CreateUser::new("Ana", "")).await {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "name y email son requeridos");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_trailing_slash_is_ignored() {
        let base = format!("{}/", spawn_api().await);
        let client = UsersClient::new(base).unwrap();

        let user = client
            .create(&CreateUser::new("Luis Ramirez", "luis@mail.com"))
            .await
            .unwrap();
        client.delete(user.id).await.unwrap();
    }
}

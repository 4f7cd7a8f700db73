//! # HTTP implementation of [`UserStore`]
//!
//! [`RestStore`] wraps a shared `reqwest::Client` and the resolved backend base URL.
//! It is cheap to clone: the client is reference-counted internally, so the UI keeps
//! one instance and clones it into each spawned request.
//!
//! Record identifiers are appended as a single path segment, so any characters the
//! backend uses in its ids are percent-encoded rather than interpreted as path
//! separators.

use reqwest::{Client, Response, Url};
use serde::Deserialize;
use store::{FormConfig, StoreError, UserPayload, UserRecord, UserStore};

use crate::error::ApiError;

/// Optional body of a failed response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Users backend reached over HTTP.
#[derive(Clone, Debug)]
pub struct RestStore {
    client: Client,
    base_url: String,
}

impl RestStore {
    pub fn new(config: &FormConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use an existing client (custom timeouts, proxies, test servers).
    pub fn with_client(client: Client, config: &FormConfig) -> Self {
        Self {
            client,
            base_url: config.base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/users`
    pub fn users_url(&self) -> Result<Url, ApiError> {
        let raw = format!("{}/api/users", self.base_url);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw,
            reason: e.to_string(),
        })
    }

    /// `{base}/api/users/{id}`
    pub fn user_url(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = self.users_url()?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl {
                url: self.base_url.clone(),
                reason: "URL cannot have path segments".to_string(),
            })?
            .push(id);
        Ok(url)
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let url = self.users_url()?;
        tracing::debug!(%url, "listing users");
        let response = self.client.get(url).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn post_user(&self, payload: &UserPayload) -> Result<(), ApiError> {
        let url = self.users_url()?;
        tracing::debug!(%url, "creating user");
        let response = self.client.post(url).json(payload).send().await?;
        check(response).await?;
        Ok(())
    }

    async fn patch_user(&self, id: &str, payload: &UserPayload) -> Result<(), ApiError> {
        let url = self.user_url(id)?;
        tracing::debug!(%url, "updating user");
        let response = self.client.patch(url).json(payload).send().await?;
        check(response).await?;
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let url = self.user_url(id)?;
        tracing::debug!(%url, "deleting user");
        let response = self.client.delete(url).send().await?;
        check(response).await?;
        Ok(())
    }
}

/// Pass successful responses through; turn anything else into [`ApiError::Status`].
async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    tracing::warn!(status = status.as_u16(), ?message, "backend rejected request");
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

impl UserStore for RestStore {
    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.fetch_users().await?)
    }

    async fn create(&self, payload: &UserPayload) -> Result<(), StoreError> {
        Ok(self.post_user(payload).await?)
    }

    async fn update(&self, id: &str, payload: &UserPayload) -> Result<(), StoreError> {
        Ok(self.patch_user(id, payload).await?)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        Ok(self.delete_user(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;
    use store::{Field, UserForm};

    use super::*;

    fn store_for(server: &MockServer) -> RestStore {
        RestStore::new(&FormConfig::new(server.base_url()))
    }

    fn payload() -> UserPayload {
        UserPayload {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone_number: "+441234567890".to_string(),
            email: "ada@example.com".to_string(),
            address: "London".to_string(),
        }
    }

    #[test]
    fn test_urls() {
        let store = RestStore::new(&FormConfig::new("http://localhost:5000/"));
        assert_eq!(
            store.users_url().unwrap().as_str(),
            "http://localhost:5000/api/users"
        );
        assert_eq!(
            store.user_url("665f1c2a").unwrap().as_str(),
            "http://localhost:5000/api/users/665f1c2a"
        );
        assert_eq!(
            store.user_url("a/b").unwrap().as_str(),
            "http://localhost:5000/api/users/a%2Fb"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let store = RestStore::new(&FormConfig::new("not a url"));
        assert!(matches!(
            store.users_url(),
            Err(ApiError::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_users() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users");
                then.status(200).json_body(json!([
                    {
                        "_id": "1",
                        "firstName": "Ada",
                        "lastName": "Lovelace",
                        "phoneNumber": "+441234567890",
                        "email": "ada@example.com",
                        "address": "London",
                        "__v": 0
                    }
                ]));
            })
            .await;

        let users = store_for(&server).list().await.unwrap();

        mock.assert_async().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id.as_deref(), Some("1"));
        assert_eq!(users[0].email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_create_posts_payload() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/users").json_body(json!({
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "phoneNumber": "+441234567890",
                    "email": "ada@example.com",
                    "address": "London"
                }));
                then.status(201).json_body(json!({ "_id": "new" }));
            })
            .await;

        store_for(&server).create(&payload()).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_patches_by_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH).path("/api/users/42");
                then.status(200);
            })
            .await;

        store_for(&server).update("42", &payload()).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_message_is_kept() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/users");
                then.status(400)
                    .json_body(json!({ "message": "Email already registered" }));
            })
            .await;

        let err = store_for(&server).create(&payload()).await.unwrap_err();

        assert_eq!(
            err,
            StoreError::Rejected {
                status: 400,
                message: Some("Email already registered".to_string()),
            }
        );
        assert_eq!(err.backend_message(), Some("Email already registered"));
    }

    #[tokio::test]
    async fn test_error_without_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/users/9");
                then.status(500).body("Internal Server Error");
            })
            .await;

        let err = store_for(&server).delete("9").await.unwrap_err();

        assert_eq!(
            err,
            StoreError::Rejected {
                status: 500,
                message: None,
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let store = RestStore::new(&FormConfig::new("http://127.0.0.1:9"));
        let err = store.list().await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
    }

    #[tokio::test]
    async fn test_form_submit_against_backend() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/users");
                then.status(201);
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users");
                then.status(200).json_body(json!([
                    { "_id": "1", "firstName": "Ada", "lastName": "Lovelace",
                      "phoneNumber": "+441234567890", "email": "ada@example.com",
                      "address": "London" }
                ]));
            })
            .await;

        let store = store_for(&server);
        let mut form = UserForm::new();
        for field in Field::ALL {
            let p = payload().into_record(None);
            form.set_field(field, p.get(field).to_string());
        }

        assert!(form.submit(&store).await);

        create.assert_async().await;
        list.assert_async().await;
        assert_eq!(form.users().len(), 1);
        assert_eq!(form.message(), Some("User saved successfully!"));
    }

    #[tokio::test]
    async fn test_form_delete_failure_message() {
        let server = MockServer::start_async().await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/users/1");
                then.status(404).json_body(json!({ "message": "not found" }));
            })
            .await;

        let store = store_for(&server);
        let mut form = UserForm::new();

        assert!(!form.delete(&store, "1", |_| true).await);

        delete.assert_async().await;
        assert_eq!(form.message(), Some("Failed to delete user!"));
    }
}

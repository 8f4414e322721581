//
//  restman
//  client/resource.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Generic Resource Accessor
//!
//! [`Resource`] offers CRUD-shaped convenience methods scoped to one
//! collection path (`/users`, `/orders`, ...), delegating every call to a
//! shared [`RestClient`]. It holds no state beyond the path, so creating one
//! per collection is free.
//!
//! Earlier revisions of this accessor sent `PATCH` for both
//! [`Resource::patch`] and [`Resource::put`]; `put` now sends `PUT`. The
//! regression tests in this module pin both methods.

use std::fmt::Display;
use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ParamMap, Response, RestClient};
use crate::error::Error;

/// Typed CRUD accessor for one collection path.
///
/// # Type Parameters
///
/// * `T` - The element type of the collection, decoded from responses
/// * `Id` - The identifier type, rendered into item paths via [`Display`]
///
/// The path is fixed for the resource's lifetime, and the underlying
/// [`RestClient`] is shared, not owned.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use serde::Deserialize;
/// use restman::{Resource, RestClient, StaticTokenProvider};
/// use restman::transport::ReqwestTransport;
///
/// #[derive(Deserialize)]
/// struct User { id: u64, name: String, email: String }
///
/// # async fn example() -> Result<(), restman::Error> {
/// let client = Arc::new(RestClient::new(
///     "https://api.example.com",
///     Arc::new(ReqwestTransport::new()?),
///     Arc::new(StaticTokenProvider::new("Bearer my-token")),
/// ));
///
/// let users: Resource<User, u64> = client.resource("/users");
///
/// let all = users.get_all(None).await?;
/// for user in all.body().into_iter().flatten() {
///     let detail = users.get_by_id(&user.id).await?;
///     println!("{}: {:?}", user.name, detail.body().map(|u| &u.email));
/// }
/// # Ok(())
/// # }
/// ```
pub struct Resource<T, Id> {
    /// Collection path, e.g. `/users`. Fixed for the resource's lifetime.
    path: String,
    /// Shared orchestrator performing the calls.
    client: Arc<RestClient>,
    _marker: PhantomData<fn() -> (T, Id)>,
}

impl<T, Id> Resource<T, Id> {
    /// Creates a resource accessor for `path` backed by `client`.
    ///
    /// Prefer [`RestClient::resource`] when you already hold the client in
    /// an [`Arc`].
    pub fn new(path: impl Into<String>, client: Arc<RestClient>) -> Self {
        Self {
            path: path.into(),
            client,
            _marker: PhantomData,
        }
    }

    /// Returns the collection path this resource is scoped to.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<T, Id> Resource<T, Id>
where
    T: DeserializeOwned,
    Id: Display,
{
    /// Builds the item path `"{path}/{id}"`.
    fn item_path(&self, id: &Id) -> String {
        format!("{}/{}", self.path.trim_end_matches('/'), id)
    }

    /// Fetches one item: GET `"{path}/{id}"`.
    pub async fn get_by_id(&self, id: &Id) -> Result<Response<T>, Error> {
        self.client.get(&self.item_path(id), None).await
    }

    /// Fetches the whole collection: GET `path`, decoded as a sequence.
    ///
    /// # Parameters
    ///
    /// * `query` - Optional query parameters; `None` means none
    pub async fn get_all(&self, query: Option<&ParamMap>) -> Result<Response<Vec<T>>, Error> {
        self.client.get(&self.path, query).await
    }

    /// Creates an item: POST `path` with a JSON body.
    pub async fn post<B: Serialize>(&self, body: &B) -> Result<Response<T>, Error> {
        self.client.post(&self.path, body).await
    }

    /// Partially updates one item: PATCH `"{path}/{id}"` with a JSON body.
    pub async fn patch<B: Serialize>(&self, id: &Id, body: &B) -> Result<Response<T>, Error> {
        let body = serde_json::to_value(body)?;
        self.client
            .request(&self.item_path(id), Method::PATCH, Some(body), None)
            .await
    }

    /// Replaces one item: PUT `"{path}/{id}"` with a JSON body.
    pub async fn put<B: Serialize>(&self, id: &Id, body: &B) -> Result<Response<T>, Error> {
        let body = serde_json::to_value(body)?;
        self.client
            .request(&self.item_path(id), Method::PUT, Some(body), None)
            .await
    }

    /// Deletes one item: DELETE `"{path}/{id}"`.
    pub async fn delete(&self, id: &Id) -> Result<Response<T>, Error> {
        self.client.delete(&self.item_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokenProvider;
    use crate::transport::MockTransport;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: u64,
        name: String,
        email: String,
    }

    fn users_resource(transport: Arc<MockTransport>) -> Resource<User, u64> {
        let client = Arc::new(RestClient::new(
            "https://api.example.test",
            transport as Arc<dyn crate::transport::Transport>,
            Arc::new(StaticTokenProvider::new("Bearer ....")),
        ));
        client.resource("/users")
    }

    #[tokio::test]
    async fn test_get_by_id_issues_get_to_item_path() {
        let transport = Arc::new(MockTransport::new());
        let users = users_resource(Arc::clone(&transport));

        let _ = users.get_by_id(&42).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/users/42");
        assert_eq!(request.url, "https://api.example.test/users/42");
    }

    #[tokio::test]
    async fn test_get_all_issues_get_to_collection_and_decodes_sequence() {
        let body = r#"[
            {"id": 1, "name": "Ada", "email": "ada@example.test"},
            {"id": 2, "name": "Grace", "email": "grace@example.test"}
        ]"#;
        let transport = Arc::new(MockTransport::new().with_body(body));
        let users = users_resource(Arc::clone(&transport));

        let all = users.get_all(None).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/users");

        let decoded = all.body().unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].name, "Ada");
        assert_eq!(decoded[1].id, 2);
    }

    #[tokio::test]
    async fn test_post_issues_post_to_collection() {
        let transport = Arc::new(
            MockTransport::new()
                .with_body(r#"{"id": 3, "name": "Edsger", "email": "ew@example.test"}"#),
        );
        let users = users_resource(Arc::clone(&transport));

        let created = users
            .post(&serde_json::json!({"name": "Edsger", "email": "ew@example.test"}))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/users");
        assert!(request.body.is_some());
        assert_eq!(created.body().unwrap().id, 3);
    }

    #[tokio::test]
    async fn test_patch_sends_patch() {
        let transport = Arc::new(MockTransport::new());
        let users = users_resource(Arc::clone(&transport));

        let _ = users
            .patch(&5, &serde_json::json!({"name": "renamed"}))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.path, "/users/5");
    }

    #[tokio::test]
    async fn test_put_sends_put() {
        // Pins the fix: earlier revisions issued PATCH here.
        let transport = Arc::new(MockTransport::new());
        let users = users_resource(Arc::clone(&transport));

        let _ = users
            .put(&5, &serde_json::json!({"name": "replaced", "email": "r@example.test"}))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/users/5");
    }

    #[tokio::test]
    async fn test_delete_issues_delete_to_item_path() {
        let transport = Arc::new(MockTransport::new());
        let users = users_resource(Arc::clone(&transport));

        let _ = users.delete(&7).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path, "/users/7");
    }

    #[tokio::test]
    async fn test_trailing_slash_on_path_is_normalized() {
        let transport = Arc::new(MockTransport::new());
        let client = Arc::new(RestClient::new(
            "https://api.example.test",
            Arc::clone(&transport) as Arc<dyn crate::transport::Transport>,
            Arc::new(StaticTokenProvider::new("Bearer ....")),
        ));
        let users: Resource<User, u64> = client.resource("/users/");

        let _ = users.get_by_id(&1).await.unwrap();

        assert_eq!(transport.last_request().unwrap().path, "/users/1");
    }
}

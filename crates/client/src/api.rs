//! REST client for the stockroom HTTP API.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use stockroom_core::report::{Report, ReportKind};
use stockroom_core::session::{SessionContext, SessionUser};
use stockroom_core::stats::{LocationCount, StatsSummary};
use stockroom_core::types::DbId;

use crate::error::{api_error, ClientError};
use crate::models::{
    AuthResponse, Deleted, Deployment, Envelope, HealthStatus, Item, ItemInventory,
    LoginRequest, NewItem, RegisterRequest, SearchResults, StockBatch, StockOutRecord,
    StockUnitDetail, StockUpdate, User,
};

const API_PREFIX: &str = "/api/v1";

/// HTTP client for one stockroom server.
///
/// Requests carry the session's bearer token whenever one is signed in.
pub struct StockroomClient {
    client: reqwest::Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl StockroomClient {
    /// Create a client with a fresh, signed-out session.
    ///
    /// * `base_url` - Server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(
            reqwest::Client::new(),
            base_url,
            Arc::new(SessionContext::new()),
        )
    }

    /// Create a client reusing an existing [`reqwest::Client`] and session.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        session: Arc<SessionContext>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    // ---- users ----

    /// Register and sign the new user in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ClientError> {
        let auth: AuthResponse = self
            .send_json(
                Method::POST,
                "/users/register",
                &RegisterRequest {
                    name,
                    email,
                    password,
                },
            )
            .await?;
        Ok(self.start_session(auth))
    }

    /// Log in and sign the user in.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let auth: AuthResponse = self
            .send_json(Method::POST, "/users/login", &LoginRequest { email, password })
            .await?;
        Ok(self.start_session(auth))
    }

    /// Sign out locally. Tokens are stateless, so the server is not called.
    pub fn logout(&self) {
        self.session.sign_out();
    }

    /// The user the server associates with the current token, if any.
    pub async fn current_user(&self) -> Result<Option<User>, ClientError> {
        self.get("/users/current").await
    }

    // ---- items ----

    pub async fn list_items(&self) -> Result<Vec<Item>, ClientError> {
        self.get("/items").await
    }

    pub async fn get_item(&self, id: DbId) -> Result<Item, ClientError> {
        self.get(&format!("/items/{id}")).await
    }

    pub async fn create_item(&self, item: &NewItem) -> Result<Item, ClientError> {
        self.send_json(Method::POST, "/items", item).await
    }

    /// Fails with 409 while the item still has stock.
    pub async fn delete_item(&self, id: DbId) -> Result<Deleted, ClientError> {
        self.send(self.request(Method::DELETE, &format!("/items/{id}")))
            .await
    }

    // ---- stock ----

    pub async fn list_stock(&self) -> Result<Vec<StockUnitDetail>, ClientError> {
        self.get("/stock").await
    }

    pub async fn get_stock(&self, id: DbId) -> Result<StockUnitDetail, ClientError> {
        self.get(&format!("/stock/{id}")).await
    }

    pub async fn add_stock(&self, batch: &StockBatch) -> Result<Vec<StockUnitDetail>, ClientError> {
        self.send_json(Method::POST, "/stock", batch).await
    }

    pub async fn update_stock(
        &self,
        id: DbId,
        update: &StockUpdate,
    ) -> Result<StockUnitDetail, ClientError> {
        self.send_json(Method::PUT, &format!("/stock/{id}"), update)
            .await
    }

    pub async fn delete_stock(&self, id: DbId) -> Result<Deleted, ClientError> {
        self.send(self.request(Method::DELETE, &format!("/stock/{id}")))
            .await
    }

    // ---- stock-out ----

    pub async fn list_stock_out(&self) -> Result<Vec<StockOutRecord>, ClientError> {
        self.get("/stock-out").await
    }

    /// Move a unit out of stock. A unit that was already moved yields 404.
    pub async fn deploy(&self, deployment: &Deployment) -> Result<StockOutRecord, ClientError> {
        self.send_json(Method::POST, "/stock-out", deployment).await
    }

    // ---- aggregates ----

    pub async fn inventory(&self) -> Result<Vec<ItemInventory>, ClientError> {
        self.get("/inventory").await
    }

    pub async fn stats(&self) -> Result<StatsSummary, ClientError> {
        self.get("/stats").await
    }

    pub async fn location_counts(&self) -> Result<Vec<LocationCount>, ClientError> {
        self.get("/stats/locations").await
    }

    /// Server-side search. See [`crate::search::search_local`] for the
    /// offline equivalent.
    pub async fn search(
        &self,
        term: &str,
        category: Option<&str>,
    ) -> Result<SearchResults, ClientError> {
        let mut query = vec![("term", term)];
        if let Some(category) = category {
            query.push(("category", category));
        }
        self.send(self.request(Method::GET, "/search").query(&query))
            .await
    }

    pub async fn report(&self, kind: ReportKind) -> Result<Report, ClientError> {
        self.get(&format!("/reports/{}", kind.as_str())).await
    }

    /// Root-level health check.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<HealthStatus>().await?)
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.session.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.send(self.request(method, path).json(body)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = builder.send().await?;
        Self::parse_envelope(response).await
    }

    fn start_session(&self, auth: AuthResponse) -> User {
        self.session.sign_in(SessionUser {
            id: auth.user.id,
            name: auth.user.name.clone(),
            email: auth.user.email.clone(),
            access_token: Some(auth.access_token),
        });
        tracing::debug!(user_id = auth.user.id, "Session started");
        auth.user
    }

    /// Return the response unchanged on 2xx, or a [`ClientError::Api`]
    /// built from the error envelope.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(api_error(status.as_u16(), &body));
        }
        Ok(response)
    }

    /// Unwrap `{success, data}` from a successful response.
    async fn parse_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<Envelope<T>>().await?.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_under_the_api_prefix() {
        let client = StockroomClient::new("http://localhost:3000/");
        assert_eq!(client.url("/items/3"), "http://localhost:3000/api/v1/items/3");
    }

    #[tokio::test]
    async fn login_state_flows_through_the_shared_session() {
        let session = Arc::new(SessionContext::new());
        let client = StockroomClient::with_client(
            reqwest::Client::new(),
            "http://localhost:3000",
            Arc::clone(&session),
        );
        let mut rx = session.subscribe();

        let user = client.start_session(AuthResponse {
            user: User {
                id: 1,
                name: "Alice".into(),
                email: "alice@example.com".into(),
                created_at: chrono::Utc::now(),
            },
            access_token: "token-abc".into(),
            expires_in: 900,
        });
        assert_eq!(user.id, 1);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().map(|u| u.id), Some(1));
        assert_eq!(session.access_token().as_deref(), Some("token-abc"));

        client.logout();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn unreachable_server_is_a_request_error() {
        // Port 9 (discard) on loopback is closed on test machines.
        let client = StockroomClient::new("http://127.0.0.1:9");
        let err = client.list_items().await.unwrap_err();
        assert!(matches!(err, ClientError::Request(_)));
    }
}

//! A cookie-carrying client that drives the router in-process.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use store::MemoryStore;
use tower::ServiceExt;
use web::{AppState, SessionConfig};

/// The app over in-memory stores, plus a handle on the data store for
/// assertions that bypass HTTP.
pub fn app() -> (Router, MemoryStore) {
    let store = MemoryStore::new();
    let router = web::app(
        AppState::with_store(store.clone()),
        tower_sessions::MemoryStore::default(),
        SessionConfig::ephemeral(),
    );
    (router, store)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn assert_redirect(&self, to: &str) {
        assert!(self.status.is_redirection(), "expected redirect, got {}", self.status);
        assert_eq!(self.location.as_deref(), Some(to));
    }

    /// The anti-forgery token of the first form on the page.
    pub fn csrf_token(&self) -> String {
        self.body
            .split("<input")
            .skip(1)
            .filter_map(|tag| tag.split('>').next())
            .find(|tag| tag.contains(r#"name="csrf_token""#))
            .and_then(|tag| tag.split(r#"value=""#).nth(1))
            .and_then(|rest| rest.split('"').next())
            .map(str::to_string)
            .expect("page has no csrf_token field")
    }
}

/// One browser: remembers the session cookie between requests.
pub struct TestClient {
    router: Router,
    cookie: Option<String>,
}

impl TestClient {
    pub fn new(router: &Router) -> Self {
        Self {
            router: router.clone(),
            cookie: None,
        }
    }

    async fn send(&mut self, request: axum::http::request::Builder, body: Body) -> TestResponse {
        let request = match &self.cookie {
            Some(cookie) => request.header(header::COOKIE, cookie),
            None => request,
        };
        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            let has_value = pair.split_once('=').is_some_and(|(_, v)| !v.is_empty());
            self.cookie = has_value.then(|| pair.to_string());
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            location,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Request::get(uri), Body::empty()).await
    }

    pub async fn post(&mut self, uri: &str, form: &[(&str, &str)]) -> TestResponse {
        let request = Request::post(uri).header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        );
        let body = serde_urlencoded::to_string(form).unwrap();
        self.send(request, Body::from(body)).await
    }

    /// A POST with no body and no content type, as a bare form submission
    /// or a script might send.
    pub async fn post_empty(&mut self, uri: &str) -> TestResponse {
        self.send(Request::post(uri), Body::empty()).await
    }

    /// Fetch `page` for a fresh token, then post `form` with it.
    pub async fn submit(&mut self, page: &str, action: &str, form: &[(&str, &str)]) -> TestResponse {
        let token = self.get(page).await.csrf_token();
        let mut fields = vec![("csrf_token", token.as_str())];
        fields.extend_from_slice(form);
        self.post(action, &fields).await
    }

    pub async fn register(&mut self, username: &str, password: &str) -> TestResponse {
        let email = format!("{username}@example.com");
        self.submit(
            "/register",
            "/register",
            &[
                ("username", username),
                ("password", password),
                ("email", &email),
                ("first_name", "First"),
                ("last_name", "Last"),
            ],
        )
        .await
    }

    pub async fn login(&mut self, username: &str, password: &str) -> TestResponse {
        self.submit(
            "/login",
            "/login",
            &[("username", username), ("password", password)],
        )
        .await
    }
}

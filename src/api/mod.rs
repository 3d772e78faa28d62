use crate::config::EnvConfig;
use crate::models::{CreateArticleRequest, CreateArticleResponse, SessionResponse, SessionUser};
use crate::storage::load_token;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(crate) const ARTICLES_PATH: &str = "/api/articles";
pub(crate) const SESSION_PATH: &str = "/api/session";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Unauthorized,
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    /// HTTP status, when the server answered.
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            status: None,
            message: e.to_string(),
        }
    }

    fn parse(status: reqwest::StatusCode, e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            status: Some(status.as_u16()),
            message: e.to_string(),
        }
    }

    fn unauthorized(body: String) -> Self {
        let message = if body.trim().is_empty() {
            "Unauthorized".to_string()
        } else {
            format!("Unauthorized: {body}")
        };
        Self {
            kind: ApiErrorKind::Unauthorized,
            status: Some(401),
            message,
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            status: Some(status.as_u16()),
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Remote article store used by the submit handler.
pub(crate) trait ArticleApi {
    async fn create_article(&self, req: &CreateArticleRequest)
        -> ApiResult<CreateArticleResponse>;
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            token: None,
        }
    }

    /// Client for the configured API, carrying the stored auth token if any.
    pub fn load_from_storage(config: &EnvConfig) -> Self {
        Self {
            base_url: config.api_url.clone(),
            token: load_token(),
        }
    }

    fn get_auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn request_api<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let client = reqwest::Client::new();
        let mut req = client.request(method, self.url(path));
        if let Some(header) = self.get_auth_header() {
            req = req.header("Authorization", header);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let res = req.send().await.map_err(ApiError::network)?;
        let status = res.status();

        if status.is_success() {
            return res.json().await.map_err(|e| ApiError::parse(status, e));
        }

        let body = res.text().await.unwrap_or_default();
        if status.as_u16() == 401 {
            Err(ApiError::unauthorized(body))
        } else {
            Err(ApiError::http(status, body, "Request failed"))
        }
    }

    /// Look up the current session; an anonymous or rejected session is `None`.
    pub async fn get_session(&self) -> ApiResult<Option<SessionUser>> {
        match self
            .request_api::<SessionResponse, ()>(Method::GET, SESSION_PATH, None)
            .await
        {
            Ok(res) => Ok(res.user),
            Err(e) if e.kind == ApiErrorKind::Unauthorized => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl ArticleApi for ApiClient {
    async fn create_article(
        &self,
        req: &CreateArticleRequest,
    ) -> ApiResult<CreateArticleResponse> {
        self.request_api(Method::POST, ARTICLES_PATH, Some(req)).await
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod server_tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}")
    }

    fn request() -> CreateArticleRequest {
        CreateArticleRequest {
            category_id: 1,
            title: "제목".to_string(),
            content: "본문".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_article_posts_json_body() {
        let app = Router::new().route(
            ARTICLES_PATH,
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({ "categoryId": 1, "title": "제목", "content": "본문" }));
                Json(json!({ "message": "created" }))
            }),
        );
        let client = ApiClient::new(serve(app).await);

        let res = client.create_article(&request()).await.expect("should succeed");
        assert_eq!(res.message, "created");
    }

    #[tokio::test]
    async fn test_create_article_server_error_is_http_error() {
        let app = Router::new().route(
            ARTICLES_PATH,
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "db down") }),
        );
        let client = ApiClient::new(serve(app).await);

        let err = client.create_article(&request()).await.expect_err("should fail");
        assert_eq!(err.kind, ApiErrorKind::Http);
        assert_eq!(err.status, Some(500));
        assert!(err.message.contains("db down"));
    }

    #[tokio::test]
    async fn test_create_article_unauthorized_keeps_server_text() {
        let app = Router::new().route(
            ARTICLES_PATH,
            post(|| async { (StatusCode::UNAUTHORIZED, "token expired for user 42") }),
        );
        let client = ApiClient::new(serve(app).await);

        let err = client.create_article(&request()).await.expect_err("should fail");
        assert_eq!(err.kind, ApiErrorKind::Unauthorized);
        assert_eq!(err.status, Some(401));
        assert!(err.message.contains("token expired for user 42"));
    }

    #[tokio::test]
    async fn test_create_article_unreachable_server_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener addr");
        drop(listener);

        let client = ApiClient::new(format!("http://{addr}"));
        let err = client.create_article(&request()).await.expect_err("should fail");
        assert_eq!(err.kind, ApiErrorKind::Network);
        assert_eq!(err.status, None);
    }

    #[tokio::test]
    async fn test_get_session_sends_bearer_token() {
        let app = Router::new().route(
            SESSION_PATH,
            get(|headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                if auth == "Bearer t1" {
                    (StatusCode::OK, Json(json!({ "user": { "id": 1, "avatar": "/a.png" } })))
                } else {
                    (StatusCode::UNAUTHORIZED, Json(json!({ "error": "no session" })))
                }
            }),
        );
        let base = serve(app).await;

        let mut client = ApiClient::new(base.clone());
        client.token = Some("t1".to_string());
        let user = client.get_session().await.expect("lookup ok").expect("signed in");
        assert_eq!(user.id, 1);
        assert_eq!(user.avatar.as_deref(), Some("/a.png"));

        let anonymous = ApiClient::new(base);
        assert_eq!(anonymous.get_session().await.expect("lookup ok"), None);
    }
}

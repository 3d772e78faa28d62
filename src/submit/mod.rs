use crate::api::{ApiError, ApiErrorKind, ArticleApi};
use crate::models::Draft;

/// User-visible outcome of one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Acknowledgment {
    Created,
    Rejected,
    NetworkFailure,
}

impl Acknowledgment {
    pub fn message(self) -> &'static str {
        match self {
            Acknowledgment::Created => "글이 성공적으로 작성되었습니다.",
            Acknowledgment::Rejected => "글 작성에 실패했습니다. 다시 시도해 주세요.",
            Acknowledgment::NetworkFailure => {
                "네트워크 오류가 발생했습니다. 인터넷 연결을 확인해 주세요."
            }
        }
    }

    pub fn is_success(self) -> bool {
        self == Acknowledgment::Created
    }
}

impl From<&ApiError> for Acknowledgment {
    fn from(e: &ApiError) -> Self {
        match e.kind {
            ApiErrorKind::Http | ApiErrorKind::Unauthorized => Acknowledgment::Rejected,
            // An unreadable success body never reached the user as a response either.
            ApiErrorKind::Network | ApiErrorKind::Parse => Acknowledgment::NetworkFailure,
        }
    }
}

/// Send `draft` to the article API once. No retry; the draft is never modified.
pub(crate) async fn submit_draft(api: &impl ArticleApi, draft: &Draft) -> Acknowledgment {
    let req = draft.to_request();
    tracing::info!(
        category_id = req.category_id,
        title = %req.title,
        content_len = req.content.len(),
        "sending article"
    );

    match api.create_article(&req).await {
        Ok(res) => {
            tracing::info!(message = %res.message, "article created");
            Acknowledgment::Created
        }
        Err(e) => {
            match e.kind {
                ApiErrorKind::Network | ApiErrorKind::Parse => {
                    tracing::error!(error = %e, "network error while creating article")
                }
                _ => tracing::error!(status = ?e.status, error = %e, "failed to create article"),
            }
            Acknowledgment::from(&e)
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::ApiResult;
    use crate::models::{CreateArticleRequest, CreateArticleResponse};
    use std::cell::RefCell;

    /// Answers every request with a fixed outcome and records what it saw.
    struct FakeApi {
        outcome: Result<&'static str, ApiError>,
        seen: RefCell<Vec<CreateArticleRequest>>,
    }

    impl FakeApi {
        fn ok() -> Self {
            Self {
                outcome: Ok("created"),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(kind: ApiErrorKind, status: Option<u16>) -> Self {
            Self {
                outcome: Err(ApiError {
                    kind,
                    status,
                    message: "boom".to_string(),
                }),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl ArticleApi for FakeApi {
        async fn create_article(
            &self,
            req: &CreateArticleRequest,
        ) -> ApiResult<CreateArticleResponse> {
            self.seen.borrow_mut().push(req.clone());
            self.outcome.clone().map(|m| CreateArticleResponse {
                message: m.to_string(),
            })
        }
    }

    fn draft() -> Draft {
        Draft {
            title: "제목".to_string(),
            category: "비즈니스 > 마케팅".to_string(),
            content: "본문\n\n- 하나".to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_is_acknowledged() {
        let api = FakeApi::ok();
        let ack = submit_draft(&api, &draft()).await;
        assert_eq!(ack, Acknowledgment::Created);
        assert!(ack.is_success());

        let seen = api.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].category_id, 5);
        assert_eq!(seen[0].title, "제목");
    }

    #[tokio::test]
    async fn test_server_error_is_rejected_and_draft_kept() {
        let api = FakeApi::failing(ApiErrorKind::Http, Some(500));
        let d = draft();
        let ack = submit_draft(&api, &d).await;
        assert_eq!(ack, Acknowledgment::Rejected);
        assert_eq!(d, draft());
    }

    #[tokio::test]
    async fn test_unauthorized_is_rejected() {
        let api = FakeApi::failing(ApiErrorKind::Unauthorized, Some(401));
        assert_eq!(submit_draft(&api, &draft()).await, Acknowledgment::Rejected);
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_failure() {
        let api = FakeApi::failing(ApiErrorKind::Network, None);
        assert_eq!(
            submit_draft(&api, &draft()).await,
            Acknowledgment::NetworkFailure
        );
    }

    #[tokio::test]
    async fn test_each_submit_sends_exactly_one_request() {
        let api = FakeApi::failing(ApiErrorKind::Http, Some(503));
        submit_draft(&api, &draft()).await;
        submit_draft(&api, &draft()).await;
        assert_eq!(api.seen.borrow().len(), 2);
    }

    async fn serve(status: u16) -> String {
        use axum::http::StatusCode;
        use axum::routing::post;

        let code = StatusCode::from_u16(status).expect("valid status");
        let app = axum::Router::new().route(
            crate::api::ARTICLES_PATH,
            post(move || async move { (code, r#"{"message":"ok"}"#) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_http_200_and_500_through_api_client() {
        let ok = crate::api::ApiClient::new(serve(200).await);
        assert_eq!(submit_draft(&ok, &draft()).await, Acknowledgment::Created);

        let failing = crate::api::ApiClient::new(serve(500).await);
        let d = draft();
        assert_eq!(submit_draft(&failing, &d).await, Acknowledgment::Rejected);
        assert_eq!(d.content, "본문\n\n- 하나");
    }

    #[test]
    fn test_messages_are_distinct() {
        let all = [
            Acknowledgment::Created,
            Acknowledgment::Rejected,
            Acknowledgment::NetworkFailure,
        ];
        for a in all {
            for b in all {
                if a != b {
                    assert_ne!(a.message(), b.message());
                }
            }
        }
    }
}

use crate::category::category_id;
use serde::{Deserialize, Serialize};

/// Unsaved post being edited. Lives only in page state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Draft {
    pub title: String,
    /// Raw label, possibly `"Parent > Child"`.
    pub category: String,
    pub content: String,
}

impl Draft {
    pub fn to_request(&self) -> CreateArticleRequest {
        CreateArticleRequest {
            category_id: category_id(&self.category),
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateArticleRequest {
    pub category_id: u32,
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CreateArticleResponse {
    #[serde(default)]
    pub message: String,
}

/// Signed-in user as reported by the session endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SessionUser {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SessionResponse {
    #[serde(default)]
    pub user: Option<SessionUser>,
}

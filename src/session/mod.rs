use crate::api::ApiResult;
use crate::models::SessionUser;

pub(crate) const DEFAULT_AVATAR: &str = "/images/default-avatar.svg";
pub(crate) const LOGIN_PATH: &str = "/login";

/// Session-dependent part of the header bar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum HeaderChrome {
    #[default]
    Guest,
    Member {
        avatar: Option<String>,
        username: Option<String>,
    },
}

impl HeaderChrome {
    /// Decide header chrome from a session lookup. Lookup failures read as a guest.
    pub fn from_lookup(lookup: ApiResult<Option<SessionUser>>) -> Self {
        match lookup {
            Ok(Some(user)) => HeaderChrome::Member {
                avatar: user.avatar.filter(|a| !a.trim().is_empty()),
                username: user.username.filter(|u| !u.trim().is_empty()),
            },
            Ok(None) => HeaderChrome::Guest,
            Err(e) => {
                tracing::warn!(error = %e, "session lookup failed; rendering guest header");
                HeaderChrome::Guest
            }
        }
    }

    pub fn is_member(&self) -> bool {
        matches!(self, HeaderChrome::Member { .. })
    }

    pub fn avatar_src(&self) -> Option<&str> {
        match self {
            HeaderChrome::Member { avatar, .. } => {
                Some(avatar.as_deref().unwrap_or(DEFAULT_AVATAR))
            }
            HeaderChrome::Guest => None,
        }
    }

    /// Alt text for the avatar image.
    pub fn avatar_alt(&self) -> &str {
        match self {
            HeaderChrome::Member {
                username: Some(name),
                ..
            } => name,
            _ => "avatar",
        }
    }
}

/// Login link that brings the user back to `current_path` afterwards.
pub(crate) fn login_href(current_path: &str) -> String {
    if current_path.is_empty() || current_path == "/" {
        return LOGIN_PATH.to_string();
    }
    format!("{LOGIN_PATH}?next={}", urlencoding::encode(current_path))
}

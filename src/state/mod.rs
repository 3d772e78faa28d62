use crate::api::ApiClient;
use crate::config::EnvConfig;
use crate::session::HeaderChrome;
use leptos::prelude::*;

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,

    /// Decided once per layout render from the session lookup.
    pub header: RwSignal<HeaderChrome>,
}

impl AppState {
    pub fn new(config: &EnvConfig) -> Self {
        let api_client = ApiClient::load_from_storage(config);
        Self {
            api_client: RwSignal::new(api_client),
            header: RwSignal::new(HeaderChrome::Guest),
        }
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);

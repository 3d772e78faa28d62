pub(crate) const TOKEN_KEY: &str = "blog_session_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Auth token written by the login flow; blank values count as absent.
pub(crate) fn load_token() -> Option<String> {
    local_storage()
        .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
        .filter(|t| !t.trim().is_empty())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_load_token_roundtrip() {
        let storage = local_storage().expect("localStorage available");
        let _ = storage.set_item(TOKEN_KEY, "t1");
        assert_eq!(load_token().as_deref(), Some("t1"));

        let _ = storage.set_item(TOKEN_KEY, "  ");
        assert!(load_token().is_none());

        let _ = storage.remove_item(TOKEN_KEY);
        assert!(load_token().is_none());
    }
}

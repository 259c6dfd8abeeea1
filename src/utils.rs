/// Mask an API key for logs and `Debug` output: first 8 characters, then `***`.
pub fn mask_api_key(api_key: &str) -> String {
    let visible: String = api_key.chars().take(8).collect();
    format!("{}***", visible)
}

/// Join a base URL and an absolute path without doubling the slash.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

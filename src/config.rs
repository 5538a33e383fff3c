#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Hosted login page, with a return URL so the user lands back where they
/// clicked Login.
pub fn get_login_url(redirect: &str) -> String {
    format!(
        "{}/login?redirect={}",
        get_backend_url(),
        urlencoding::encode(redirect)
    )
}

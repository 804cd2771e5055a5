//! Dashboard Configuration
//!
//! Endpoint, credentials and default-selection settings. Each value resolves
//! from local storage first, then a compile-time environment override, then
//! the built-in demo default, so a deployment can point the dashboard at
//! another records service without a rebuild.

use web_sys::window;

/// Demo endpoint serving the sample patient collection.
pub const DEFAULT_API_URL: &str = "https://fedskillstest.coalitiontechnologies.workers.dev";

/// Public credentials for the demo endpoint.
const DEFAULT_USERNAME: &str = "coalition";
const DEFAULT_PASSWORD: &str = "skills-test";

/// Patient preselected on startup when present in the fetched roster.
pub const DEFAULT_PATIENT: &str = "Jessica Taylor";

const URL_KEY: &str = "careboard_api_url";
const USERNAME_KEY: &str = "careboard_api_username";
const PASSWORD_KEY: &str = "careboard_api_password";

fn stored(key: &str) -> Option<String> {
    let storage = window()?.local_storage().ok()??;
    storage.get_item(key).ok().flatten()
}

/// Records endpoint, normalized without a trailing slash.
pub fn api_url() -> String {
    stored(URL_KEY)
        .or_else(|| option_env!("CAREBOARD_API_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Credential pair for the Basic authorization header.
pub fn credentials() -> (String, String) {
    let username = stored(USERNAME_KEY)
        .or_else(|| option_env!("CAREBOARD_API_USERNAME").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
    let password = stored(PASSWORD_KEY)
        .or_else(|| option_env!("CAREBOARD_API_PASSWORD").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_PASSWORD.to_string());
    (username, password)
}

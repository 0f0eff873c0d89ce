// HTTP client utilities
use crate::domain::error::WdError;
use reqwest::Client;

/// Create the shared HTTP client.
///
/// There is no retry anywhere in the lookup flow; the request timeout is
/// the only bound on a hung upstream.
pub fn create_client() -> Result<Client, WdError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .timeout(std::time::Duration::from_secs(30))
        .build()?)
}

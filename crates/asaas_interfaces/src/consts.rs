//! Constants shared by the services and the client.

/// Base URL of the sandbox environment.
pub const SANDBOX_BASE_URL: &str = "https://api-sandbox.asaas.com/v3";

/// Base URL of the production environment.
pub const PRODUCTION_BASE_URL: &str = "https://api.asaas.com/v3";

/// Header carrying the API key.
pub const ACCESS_TOKEN_HEADER: &str = "access_token";

/// Placeholder replaced by the resource id in endpoint paths.
pub const ID_PLACEHOLDER: &str = "{id}";

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

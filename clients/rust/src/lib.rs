mod account;
mod base;
mod status;

use account::AccountClient;
pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use restapi_api_structs::dtos::AccountDTO as Account;
pub use restapi_domain::{AccountFields, ID};

/// Account REST API SDK
///
/// The SDK contains methods for interacting with the account REST API.
/// `address` is the root of the server, e.g. `http://localhost:5000`.
#[derive(Clone)]
pub struct RestApiSDK {
    pub account: AccountClient,
    pub status: StatusClient,
}

impl RestApiSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(format!("{}/api", address)));
        let account = AccountClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { account, status }
    }
}

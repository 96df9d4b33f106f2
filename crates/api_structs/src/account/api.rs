use crate::dtos::AccountDTO;
use restapi_domain::{Account, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct AccountPathParams {
    pub id: ID,
}

pub type AccountResponse = AccountDTO;

pub mod get_accounts {
    use super::*;

    pub type APIResponse = Vec<AccountDTO>;

    pub fn to_response(accounts: Vec<Account>) -> APIResponse {
        accounts.into_iter().map(AccountDTO::new).collect()
    }
}

pub mod get_account {
    use super::*;

    pub type PathParams = AccountPathParams;

    pub type APIResponse = AccountResponse;
}

pub mod create_account {
    use super::*;

    pub type RequestBody = AccountDTO;

    pub type APIResponse = AccountResponse;
}

pub mod update_account {
    use super::*;

    pub type PathParams = AccountPathParams;

    pub type RequestBody = AccountDTO;

    pub type APIResponse = AccountResponse;
}

pub mod delete_account {
    use super::*;

    pub type PathParams = AccountPathParams;
}

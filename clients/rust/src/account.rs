use crate::{APIResponse, BaseClient};
use restapi_api_structs::dtos::AccountDTO;
use restapi_api_structs::*;
use restapi_domain::{AccountFields, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AccountClient {
    base: Arc<BaseClient>,
}

impl AccountClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<get_accounts::APIResponse> {
        self.base.get("accounts".into(), StatusCode::OK).await
    }

    pub async fn get(&self, account_id: ID) -> APIResponse<get_account::APIResponse> {
        self.base
            .get(format!("accounts/{}", account_id), StatusCode::OK)
            .await
    }

    pub async fn create(&self, fields: AccountFields) -> APIResponse<create_account::APIResponse> {
        let body: create_account::RequestBody = AccountDTO { id: None, fields };
        self.base
            .post(body, "accounts".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(&self, account_id: ID, fields: AccountFields) -> APIResponse<()> {
        let body: update_account::RequestBody = AccountDTO { id: None, fields };
        self.base
            .put_expect_status(
                body,
                format!("accounts/{}", account_id),
                StatusCode::NO_CONTENT,
            )
            .await
    }

    pub async fn delete(&self, account_id: ID) -> APIResponse<()> {
        self.base
            .delete_expect_status(format!("accounts/{}", account_id), StatusCode::NO_CONTENT)
            .await
    }
}

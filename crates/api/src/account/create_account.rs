use crate::{
    error::RestApiError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use restapi_api_structs::create_account::*;
use restapi_api_structs::dtos::AccountDTO;
use restapi_domain::Account;
use restapi_infra::RestApiContext;

pub async fn create_account_controller(
    ctx: web::Data<RestApiContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, RestApiError> {
    let usecase = CreateAccountUseCase {
        account: body.0.into_account(),
    };

    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::Created().json(AccountDTO::new(account)))
        .map_err(RestApiError::from)
}

#[derive(Debug)]
struct CreateAccountUseCase {
    account: Account,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for RestApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::ResourceOperationFailed,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateAccountUseCase {
    type Response = Account;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateAccount";

    async fn execute(&mut self, ctx: &RestApiContext) -> Result<Self::Response, Self::Error> {
        // The repository decides the id of new accounts
        self.account.id = None;

        ctx.repos
            .accounts
            .save(&self.account)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restapi_domain::{AccountFields, ID};
    use serde_json::json;

    #[actix_web::test]
    async fn ignores_client_provided_id() {
        let ctx = RestApiContext::create_inmemory();
        let mut fields = AccountFields::new();
        fields.insert("name".into(), json!("Alice"));

        let mut usecase = CreateAccountUseCase {
            account: Account::with_id(ID::new(42), fields.clone()),
        };
        let account = usecase.execute(&ctx).await.unwrap();

        assert_eq!(account, Account::with_id(ID::new(1), fields));
        assert!(ctx.repos.accounts.find_by_id(&ID::new(42)).await.is_none());
    }
}

use crate::{
    error::RestApiError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use restapi_api_structs::get_accounts::*;
use restapi_domain::Account;
use restapi_infra::RestApiContext;

pub async fn get_accounts_controller(
    ctx: web::Data<RestApiContext>,
) -> Result<HttpResponse, RestApiError> {
    let usecase = GetAccountsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|accounts| HttpResponse::Ok().json(to_response(accounts)))
        .map_err(RestApiError::from)
}

#[derive(Debug)]
struct GetAccountsUseCase {}

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
impl UseCase for GetAccountsUseCase {
    type Response = Vec<Account>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAccounts";

    async fn execute(&mut self, ctx: &RestApiContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .accounts
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restapi_domain::AccountFields;

    #[actix_web::test]
    async fn lists_nothing_on_empty_store() {
        let ctx = RestApiContext::create_inmemory();
        let res = GetAccountsUseCase {}.execute(&ctx).await;
        assert!(res.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn lists_saved_accounts_in_storage_order() {
        let ctx = RestApiContext::create_inmemory();
        let first = ctx
            .repos
            .accounts
            .save(&Account::new(AccountFields::new()))
            .await
            .unwrap();
        let second = ctx
            .repos
            .accounts
            .save(&Account::new(AccountFields::new()))
            .await
            .unwrap();

        let res = GetAccountsUseCase {}.execute(&ctx).await.unwrap();
        assert_eq!(res, vec![first, second]);
    }
}

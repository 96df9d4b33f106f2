use crate::{
    error::RestApiError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use restapi_api_structs::dtos::AccountDTO;
use restapi_api_structs::get_account::*;
use restapi_domain::{Account, ID};
use restapi_infra::RestApiContext;

pub async fn get_account_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RestApiContext>,
) -> Result<HttpResponse, RestApiError> {
    let usecase = GetAccountUseCase {
        account_id: path_params.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::Ok().json(AccountDTO::new(account)))
        .map_err(RestApiError::from)
}

#[derive(Debug)]
struct GetAccountUseCase {
    account_id: ID,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    AccountNotFound(ID),
}

impl From<UseCaseError> for RestApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::AccountNotFound(_) => Self::ResourceOperationFailed,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetAccountUseCase {
    type Response = Account;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAccount";

    async fn execute(&mut self, ctx: &RestApiContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .accounts
            .find_by_id(&self.account_id)
            .await
            .ok_or(UseCaseError::AccountNotFound(self.account_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restapi_domain::AccountFields;

    #[actix_web::test]
    async fn finds_saved_account() {
        let ctx = RestApiContext::create_inmemory();
        let account = ctx
            .repos
            .accounts
            .save(&Account::new(AccountFields::new()))
            .await
            .unwrap();

        let mut usecase = GetAccountUseCase {
            account_id: account.id.unwrap(),
        };
        assert_eq!(usecase.execute(&ctx).await, Ok(account));
    }

    #[actix_web::test]
    async fn rejects_unknown_id() {
        let ctx = RestApiContext::create_inmemory();
        let mut usecase = GetAccountUseCase {
            account_id: ID::new(999),
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::AccountNotFound(ID::new(999)))
        );
    }
}

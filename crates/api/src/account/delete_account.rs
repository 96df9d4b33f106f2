use crate::{
    error::RestApiError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use restapi_api_structs::delete_account::*;
use restapi_domain::{Account, ID};
use restapi_infra::RestApiContext;

pub async fn delete_account_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RestApiContext>,
) -> Result<HttpResponse, RestApiError> {
    let usecase = DeleteAccountUseCase {
        account_id: path_params.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::NoContent().finish())
        .map_err(RestApiError::from)
}

#[derive(Debug)]
struct DeleteAccountUseCase {
    account_id: ID,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    AccountNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for RestApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::AccountNotFound(_) | UseCaseError::StorageError => {
                Self::ResourceOperationFailed
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteAccountUseCase {
    type Response = Account;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteAccount";

    async fn execute(&mut self, ctx: &RestApiContext) -> Result<Self::Response, Self::Error> {
        let account = match ctx.repos.accounts.find_by_id(&self.account_id).await {
            Some(account) => account,
            None => return Err(UseCaseError::AccountNotFound(self.account_id)),
        };

        ctx.repos
            .accounts
            .delete(&account)
            .await
            .map(|_| account)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restapi_domain::AccountFields;

    #[actix_web::test]
    async fn deletes_saved_account() {
        let ctx = RestApiContext::create_inmemory();
        let account = ctx
            .repos
            .accounts
            .save(&Account::new(AccountFields::new()))
            .await
            .unwrap();
        let account_id = account.id.unwrap();

        let mut usecase = DeleteAccountUseCase { account_id };
        assert_eq!(usecase.execute(&ctx).await, Ok(account));
        assert!(ctx.repos.accounts.find_by_id(&account_id).await.is_none());

        let mut usecase = DeleteAccountUseCase { account_id };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::AccountNotFound(account_id))
        );
    }
}

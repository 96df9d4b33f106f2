use crate::{
    error::RestApiError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use restapi_api_structs::dtos::AccountDTO;
use restapi_api_structs::update_account::*;
use restapi_domain::{Account, Entity, ID};
use restapi_infra::RestApiContext;

/// Replaces the account stored under the path id.
///
/// Responds `204 No Content` but still sends the updated account
/// in the body. Clients of this API rely on it.
pub async fn update_account_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RestApiContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, RestApiError> {
    let usecase = UpdateAccountUseCase {
        account_id: path_params.id,
        account: body.0.into_account(),
    };

    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::NoContent().json(AccountDTO::new(account)))
        .map_err(RestApiError::from)
}

#[derive(Debug)]
struct UpdateAccountUseCase {
    account_id: ID,
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
impl UseCase for UpdateAccountUseCase {
    type Response = Account;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateAccount";

    async fn execute(&mut self, ctx: &RestApiContext) -> Result<Self::Response, Self::Error> {
        self.account.set_id(self.account_id);

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
    use restapi_domain::AccountFields;
    use serde_json::json;

    fn fields(name: &str) -> AccountFields {
        let mut fields = AccountFields::new();
        fields.insert("name".into(), json!(name));
        fields
    }

    #[actix_web::test]
    async fn path_id_wins_over_body_id() {
        let ctx = RestApiContext::create_inmemory();
        let alice = ctx
            .repos
            .accounts
            .save(&Account::new(fields("Alice")))
            .await
            .unwrap();
        let alice_id = alice.id.unwrap();

        let mut usecase = UpdateAccountUseCase {
            account_id: alice_id,
            account: Account::with_id(ID::new(999), fields("Bob")),
        };
        let updated = usecase.execute(&ctx).await.unwrap();

        assert_eq!(updated, Account::with_id(alice_id, fields("Bob")));
        assert_eq!(
            ctx.repos.accounts.find_by_id(&alice_id).await,
            Some(updated)
        );
        assert!(ctx.repos.accounts.find_by_id(&ID::new(999)).await.is_none());
    }

    #[actix_web::test]
    async fn stores_account_under_unknown_id() {
        let ctx = RestApiContext::create_inmemory();
        let mut usecase = UpdateAccountUseCase {
            account_id: ID::new(7),
            account: Account::new(fields("Bob")),
        };
        assert!(usecase.execute(&ctx).await.is_ok());
        assert!(ctx.repos.accounts.find_by_id(&ID::new(7)).await.is_some());
    }
}

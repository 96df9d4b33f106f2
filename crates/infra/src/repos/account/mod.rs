mod inmemory;
mod postgres;

pub use inmemory::InMemoryAccountRepo;
pub use postgres::PostgresAccountRepo;
use restapi_domain::{Account, ID};

#[async_trait::async_trait]
pub trait IAccountRepo: Send + Sync {
    /// All stored accounts in the native order of the storage
    async fn find_all(&self) -> anyhow::Result<Vec<Account>>;
    async fn find_by_id(&self, account_id: &ID) -> Option<Account>;
    /// Inserts the `Account` when it has no id yet and returns it with
    /// the assigned id. Otherwise replaces the stored `Account` with the same id.
    async fn save(&self, account: &Account) -> anyhow::Result<Account>;
    async fn delete(&self, account: &Account) -> anyhow::Result<()>;
}

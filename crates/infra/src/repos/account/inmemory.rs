use super::IAccountRepo;
use crate::repos::shared::inmemory_repo::*;
use anyhow::anyhow;
use restapi_domain::{Account, Entity, ID};
use std::sync::atomic::{AtomicI64, Ordering};

pub struct InMemoryAccountRepo {
    accounts: std::sync::Mutex<Vec<Account>>,
    next_id: AtomicI64,
}

impl InMemoryAccountRepo {
    pub fn new() -> Self {
        Self {
            accounts: std::sync::Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryAccountRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IAccountRepo for InMemoryAccountRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Account>> {
        Ok(find_all(&self.accounts))
    }

    async fn find_by_id(&self, account_id: &ID) -> Option<Account> {
        find(account_id, &self.accounts)
    }

    async fn save(&self, account: &Account) -> anyhow::Result<Account> {
        let mut account = account.clone();
        match account.id {
            Some(id) => {
                // Ids handed out later must not collide with this one
                let next_id = id
                    .next()
                    .ok_or_else(|| anyhow!("Unable to save an account with id: {}", id))?;
                self.next_id.fetch_max(next_id.inner(), Ordering::SeqCst);
            }
            None => {
                let id = self
                    .next_id
                    .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
                    .map_err(|_| anyhow!("No account ids left to assign"))?;
                account.set_id(ID::new(id));
            }
        }
        save(&account, &self.accounts);
        Ok(account)
    }

    async fn delete(&self, account: &Account) -> anyhow::Result<()> {
        let account_id = account
            .id()
            .ok_or_else(|| anyhow!("Unable to delete an account that was never saved"))?;
        delete(account_id, &self.accounts)
            .map(|_| ())
            .ok_or_else(|| anyhow!("No account with id: {} to delete", account_id))
    }
}

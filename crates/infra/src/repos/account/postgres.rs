use super::IAccountRepo;
use anyhow::anyhow;
use restapi_domain::{Account, AccountFields, ID};
use sqlx::{types::Json, FromRow, PgPool};
use tracing::error;

pub struct PostgresAccountRepo {
    pool: PgPool,
}

impl PostgresAccountRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccountRaw {
    account_id: i64,
    fields: Json<AccountFields>,
}

impl From<AccountRaw> for Account {
    fn from(e: AccountRaw) -> Self {
        Self::with_id(ID::new(e.account_id), e.fields.0)
    }
}

#[async_trait::async_trait]
impl IAccountRepo for PostgresAccountRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Account>> {
        let accounts_raw: Vec<AccountRaw> = sqlx::query_as(
            r#"
            SELECT account_id, fields FROM accounts
            ORDER BY account_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all accounts failed. DB returned error: {:?}", e);
            e
        })?;

        Ok(accounts_raw.into_iter().map(|acc| acc.into()).collect())
    }

    async fn find_by_id(&self, account_id: &ID) -> Option<Account> {
        let res: Option<AccountRaw> = sqlx::query_as(
            r#"
            SELECT account_id, fields FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find account with id: {:?} failed. DB returned error: {:?}",
                account_id, e
            );
            e
        })
        .ok()?;
        res.map(|account| account.into())
    }

    async fn save(&self, account: &Account) -> anyhow::Result<Account> {
        let account_id = match account.id {
            Some(account_id) => account_id,
            None => {
                let saved: AccountRaw = sqlx::query_as(
                    r#"
                    INSERT INTO accounts(fields)
                    VALUES($1)
                    RETURNING account_id, fields
                    "#,
                )
                .bind(Json(&account.fields))
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    error!(
                        "Unable to insert account: {:?}. DB returned error: {:?}",
                        account, e
                    );
                    e
                })?;
                return Ok(saved.into());
            }
        };
        if account_id.next().is_none() {
            return Err(anyhow!("Unable to save an account with id: {}", account_id));
        }

        let mut tx = self.pool.begin().await?;

        let saved: AccountRaw = sqlx::query_as(
            r#"
            INSERT INTO accounts(account_id, fields)
            VALUES($1, $2)
            ON CONFLICT (account_id) DO UPDATE
            SET fields = EXCLUDED.fields
            RETURNING account_id, fields
            "#,
        )
        .bind(account_id.inner())
        .bind(Json(&account.fields))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!(
                "Unable to save account: {:?}. DB returned error: {:?}",
                account, e
            );
            e
        })?;

        // Generated ids must not collide with a client chosen one. The
        // sequence only ever moves forward so deleted ids are not handed out again.
        sqlx::query(
            r#"
            SELECT setval('accounts_account_id_seq', $1, true)
            FROM accounts_account_id_seq
            WHERE (is_called AND $1 > last_value)
            OR (NOT is_called AND $1 >= last_value)
            "#,
        )
        .bind(account_id.inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!(
                "Unable to move account id sequence past: {}. DB returned error: {:?}",
                account_id, e
            );
            e
        })?;

        tx.commit().await?;

        Ok(saved.into())
    }

    async fn delete(&self, account: &Account) -> anyhow::Result<()> {
        let account_id = account
            .id
            .ok_or_else(|| anyhow!("Unable to delete an account that was never saved"))?;
        let res = sqlx::query(
            r#"
            DELETE FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.inner())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete account with id: {:?} failed. DB returned error: {:?}",
                account_id, e
            );
            e
        })?;

        if res.rows_affected() == 0 {
            return Err(anyhow!("No account with id: {} to delete", account_id));
        }
        Ok(())
    }
}

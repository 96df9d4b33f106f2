mod account;
mod shared;

pub use account::{IAccountRepo, InMemoryAccountRepo};
use account::PostgresAccountRepo;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub accounts: Arc<dyn IAccountRepo>,
}

impl Repos {
    pub async fn create_postgres(
        connection_string: &str,
        max_connections: u32,
    ) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB EXECUTING MIGRATION ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB EXECUTING MIGRATION ... [done]");

        Ok(Self {
            accounts: Arc::new(PostgresAccountRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            accounts: Arc::new(InMemoryAccountRepo::new()),
        }
    }
}

mod config;
mod repos;

pub use config::Config;
pub use repos::{IAccountRepo, InMemoryAccountRepo, Repos};
use tracing::info;

#[derive(Clone)]
pub struct RestApiContext {
    pub repos: Repos,
    pub config: Config,
}

impl RestApiContext {
    async fn create(config: Config) -> Self {
        let repos = match &config.database_url {
            Some(connection_string) => {
                Repos::create_postgres(connection_string, config.database_max_connections)
                    .await
                    .expect("Postgres credentials must be set and valid")
            }
            None => {
                info!("Did not find DATABASE_URL environment variable. Accounts are going to be kept in memory.");
                Repos::create_inmemory()
            }
        };
        Self { repos, config }
    }

    /// Context backed by an empty in-memory repository
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> RestApiContext {
    RestApiContext::create(Config::new()).await
}

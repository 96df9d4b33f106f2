use tracing::warn;

const DEFAULT_PORT: usize = 5000;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Postgres connection string. Accounts are kept in memory when
    /// this is not set.
    pub database_url: Option<String>,
    /// Size of the Postgres connection pool
    pub database_max_connections: u32,
}

impl Config {
    pub fn new() -> Self {
        Self {
            port: parse_or_default("PORT", std::env::var("PORT").ok(), DEFAULT_PORT),
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            database_max_connections: parse_or_default(
                "DATABASE_MAX_CONNECTIONS",
                std::env::var("DATABASE_MAX_CONNECTIONS").ok(),
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_or_default<T>(name: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match value {
        Some(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, value, default
                );
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_port() {
        assert_eq!(parse_or_default("PORT", None, DEFAULT_PORT), 5000);
        assert_eq!(
            parse_or_default("PORT", Some("not-a-port".into()), DEFAULT_PORT),
            5000
        );
        assert_eq!(
            parse_or_default("PORT", Some("8080".into()), DEFAULT_PORT),
            8080
        );
    }

    #[test]
    fn falls_back_to_default_pool_size() {
        assert_eq!(
            parse_or_default("DATABASE_MAX_CONNECTIONS", Some("-1".into()), 5u32),
            5
        );
        assert_eq!(
            parse_or_default("DATABASE_MAX_CONNECTIONS", Some("12".into()), 5u32),
            12
        );
    }
}

use std::env;

use anyhow::{Context, Result};

/// The server always listens here; the port is not configurable.
pub const PORT: u16 = 4000;

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub skip_migrations: bool,
    pub graphql: GraphqlConfig,
}

#[derive(Clone, Debug)]
pub struct GraphqlConfig {
    /// Serve the GraphiQL explorer on `GET /graphql`.
    pub graphiql: bool,
    pub introspection: bool,
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            graphiql: true,
            introspection: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let flag = |key: &str, default: bool| {
            lookup(key)
                .map(|v| match v.to_lowercase().as_str() {
                    "true" | "1" => true,
                    "false" | "0" => false,
                    _ => default,
                })
                .unwrap_or(default)
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            skip_migrations: flag("SKIP_MIGRATIONS", false),
            graphql: GraphqlConfig {
                graphiql: flag("GRAPHIQL", true),
                introspection: flag("GQL_INTROSPECTION", true),
            },
        })
    }
}

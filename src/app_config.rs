use anyhow::{anyhow, Context};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestGatewayConfig {
    pub url: String,
    pub api_key: String,
    pub table: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayConfig {
    Rest(RestGatewayConfig),
    Postgres { database_url: String },
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub host: String,
    pub gateway: GatewayConfig,
    pub enable_graphiql: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<AppConfig> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<AppConfig> {
        let require = |key: &str| var(key).ok_or_else(|| anyhow!("{} is not set", key));

        let port = var("PORT")
            .map(|x| x.parse::<u16>())
            .unwrap_or(Ok(8080))
            .context("PORT")?;
        let host = var("HOST").unwrap_or_else(|| "localhost".to_owned());
        let gateway = match require("GATEWAY_KIND")?.as_str() {
            "REST" => GatewayConfig::Rest(RestGatewayConfig {
                url: require("REST_URL")?,
                api_key: require("REST_API_KEY")?,
                table: var("REST_TABLE").unwrap_or_else(|| "crewmates".to_owned()),
            }),
            "POSTGRES" => GatewayConfig::Postgres {
                database_url: require("DATABASE_URL")?,
            },
            "MEMORY" => GatewayConfig::Memory,
            _ => Err(anyhow!("Invalid gateway kind"))?,
        };
        let enable_graphiql = var("ENABLE_GRAPHIQL").map(|v| v == "TRUE").unwrap_or(false);

        Ok(AppConfig {
            port,
            host,
            gateway,
            enable_graphiql,
        })
    }
}

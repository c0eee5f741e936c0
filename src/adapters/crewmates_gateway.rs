use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{
    MemoryCrewmatesRepositoryImpl, PgCrewmatesRepositoryImpl, RestCrewmatesRepositoryImpl,
};
use crate::app_config::GatewayConfig;
use crate::entities;
use crate::ports;

/// The configured store, cheap to clone per request.
#[derive(Debug, Clone)]
pub enum CrewmatesGateway {
    Rest(RestCrewmatesRepositoryImpl),
    Postgres(PgCrewmatesRepositoryImpl<PgPool>),
    Memory(MemoryCrewmatesRepositoryImpl),
}

impl CrewmatesGateway {
    pub async fn connect(config: &GatewayConfig) -> anyhow::Result<Self> {
        match config {
            GatewayConfig::Rest(rest) => {
                log::info!("using REST gateway at {}", rest.url);
                Ok(Self::Rest(RestCrewmatesRepositoryImpl::new(
                    reqwest::Client::new(),
                    rest.clone(),
                )))
            }
            GatewayConfig::Postgres { database_url } => {
                log::info!("using Postgres gateway");
                let pool = PgPoolOptions::new()
                    .connect(database_url)
                    .await
                    .context("connect DATABASE_URL")?;
                sqlx::migrate!()
                    .run(&pool)
                    .await
                    .context("run migrations")?;
                Ok(Self::Postgres(PgCrewmatesRepositoryImpl::new(pool)))
            }
            GatewayConfig::Memory => {
                log::warn!("using in-memory gateway, records are lost on restart");
                Ok(Self::Memory(MemoryCrewmatesRepositoryImpl::new()))
            }
        }
    }
}

impl ports::CrewmatesRepository for CrewmatesGateway {
    type Error = anyhow::Error;

    async fn list(&mut self) -> Result<Vec<entities::Crewmate>, Self::Error> {
        match self {
            Self::Rest(repo) => repo.list().await,
            Self::Postgres(repo) => repo.list().await,
            Self::Memory(repo) => repo.list().await,
        }
    }

    async fn get(
        &mut self,
        id: &entities::CrewmateId,
    ) -> Result<Option<entities::Crewmate>, Self::Error> {
        match self {
            Self::Rest(repo) => repo.get(id).await,
            Self::Postgres(repo) => repo.get(id).await,
            Self::Memory(repo) => repo.get(id).await,
        }
    }

    async fn create(
        &mut self,
        fields: entities::CrewmateFields,
    ) -> Result<entities::Crewmate, Self::Error> {
        match self {
            Self::Rest(repo) => repo.create(fields).await,
            Self::Postgres(repo) => repo.create(fields).await,
            Self::Memory(repo) => repo.create(fields).await,
        }
    }

    async fn update(
        &mut self,
        id: &entities::CrewmateId,
        fields: entities::CrewmateFields,
    ) -> Result<Option<entities::Crewmate>, Self::Error> {
        match self {
            Self::Rest(repo) => repo.update(id, fields).await,
            Self::Postgres(repo) => repo.update(id, fields).await,
            Self::Memory(repo) => repo.update(id, fields).await,
        }
    }

    async fn delete(&mut self, id: &entities::CrewmateId) -> Result<(), Self::Error> {
        match self {
            Self::Rest(repo) => repo.delete(id).await,
            Self::Postgres(repo) => repo.delete(id).await,
            Self::Memory(repo) => repo.delete(id).await,
        }
    }
}

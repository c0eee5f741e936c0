use anyhow::Context;
use sqlx::{Acquire, Postgres};

use super::crewmate_model::{CrewmateModel, CrewmatePayload};
use crate::{entities, ports};

/// Direct connection to the table behind the hosted REST endpoint.
#[derive(Debug, Clone)]
pub struct PgCrewmatesRepositoryImpl<A> {
    db: A,
}

impl<A> PgCrewmatesRepositoryImpl<A> {
    pub fn new(db: A) -> Self {
        Self { db }
    }
}

impl<A> ports::CrewmatesRepository for PgCrewmatesRepositoryImpl<A>
where
    A: Send,
    for<'c> &'c A: Acquire<'c, Database = Postgres>,
{
    type Error = anyhow::Error;

    async fn list(&mut self) -> Result<Vec<entities::Crewmate>, Self::Error> {
        let mut conn = self.db.acquire().await?;
        let models = sqlx::query_as::<_, CrewmateModel>(
            r#"
                SELECT
                    id::text AS id,
                    name,
                    speed,
                    color,
                    category,
                    created_at
                FROM
                    crewmates
                ORDER BY
                    created_at DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .context("fetch crewmates")?;

        Ok(models.into_iter().map(CrewmateModel::into_entity).collect())
    }

    async fn get(
        &mut self,
        id: &entities::CrewmateId,
    ) -> Result<Option<entities::Crewmate>, Self::Error> {
        let mut conn = self.db.acquire().await?;
        let model = sqlx::query_as::<_, CrewmateModel>(
            r#"
                SELECT
                    id::text AS id,
                    name,
                    speed,
                    color,
                    category,
                    created_at
                FROM
                    crewmates
                WHERE
                    id::text = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&mut *conn)
        .await
        .context("fetch crewmate")?;

        Ok(model.map(CrewmateModel::into_entity))
    }

    async fn create(
        &mut self,
        fields: entities::CrewmateFields,
    ) -> Result<entities::Crewmate, Self::Error> {
        let mut conn = self.db.acquire().await?;
        let payload = CrewmatePayload::from(&fields);
        let model = sqlx::query_as::<_, CrewmateModel>(
            r#"
                INSERT INTO crewmates (name, speed, color, category)
                VALUES ($1, $2, $3, $4)
                RETURNING id::text AS id, name, speed, color, category, created_at
            "#,
        )
        .bind(payload.name)
        .bind(payload.speed)
        .bind(payload.color)
        .bind(payload.category)
        .fetch_one(&mut *conn)
        .await
        .context("insert crewmate")?;

        Ok(model.into_entity())
    }

    async fn update(
        &mut self,
        id: &entities::CrewmateId,
        fields: entities::CrewmateFields,
    ) -> Result<Option<entities::Crewmate>, Self::Error> {
        let mut conn = self.db.acquire().await?;
        let payload = CrewmatePayload::from(&fields);
        let model = sqlx::query_as::<_, CrewmateModel>(
            r#"
                UPDATE crewmates
                    SET
                        name = $1,
                        speed = $2,
                        color = $3,
                        category = $4
                    WHERE
                        id::text = $5
                    RETURNING id::text AS id, name, speed, color, category, created_at
            "#,
        )
        .bind(payload.name)
        .bind(payload.speed)
        .bind(payload.color)
        .bind(payload.category)
        .bind(id.as_str())
        .fetch_optional(&mut *conn)
        .await
        .context("update crewmate")?;

        Ok(model.map(CrewmateModel::into_entity))
    }

    async fn delete(&mut self, id: &entities::CrewmateId) -> Result<(), Self::Error> {
        let mut conn = self.db.acquire().await?;
        sqlx::query("DELETE FROM crewmates WHERE id::text = $1")
            .bind(id.as_str())
            .execute(&mut *conn)
            .await
            .context("delete crewmate")?;

        Ok(())
    }
}

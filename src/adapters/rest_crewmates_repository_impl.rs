use anyhow::{anyhow, Context};
use reqwest::{header, RequestBuilder};

use super::crewmate_model::{CrewmateModel, CrewmatePayload};
use crate::{app_config::RestGatewayConfig, entities, ports};

/// Gateway backed by the hosted service's PostgREST endpoint
/// (`{url}/rest/v1/{table}`).
#[derive(Debug, Clone)]
pub struct RestCrewmatesRepositoryImpl {
    client: reqwest::Client,
    config: RestGatewayConfig,
}

impl RestCrewmatesRepositoryImpl {
    pub fn new(client: reqwest::Client, config: RestGatewayConfig) -> Self {
        Self { client, config }
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.url.trim_end_matches('/'),
            self.config.table
        )
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    fn id_filter(id: &entities::CrewmateId) -> (&'static str, String) {
        ("id", format!("eq.{}", id))
    }

    async fn fetch_rows(&self, req: RequestBuilder) -> anyhow::Result<Vec<CrewmateModel>> {
        let res = self.authorized(req).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(anyhow!("store responded {}: {}", status, body));
        }
        Ok(res.json::<Vec<CrewmateModel>>().await?)
    }
}

impl ports::CrewmatesRepository for RestCrewmatesRepositoryImpl {
    type Error = anyhow::Error;

    async fn list(&mut self) -> Result<Vec<entities::Crewmate>, Self::Error> {
        let req = self
            .client
            .get(self.table_url())
            .query(&[("select", "*"), ("order", "created_at.desc")]);
        let rows = self.fetch_rows(req).await.context("list crewmates")?;

        Ok(rows.into_iter().map(CrewmateModel::into_entity).collect())
    }

    async fn get(
        &mut self,
        id: &entities::CrewmateId,
    ) -> Result<Option<entities::Crewmate>, Self::Error> {
        let req = self
            .client
            .get(self.table_url())
            .query(&[("select", "*".to_string()), Self::id_filter(id)]);
        let rows = self.fetch_rows(req).await.context("get crewmate")?;

        Ok(rows.into_iter().next().map(CrewmateModel::into_entity))
    }

    async fn create(
        &mut self,
        fields: entities::CrewmateFields,
    ) -> Result<entities::Crewmate, Self::Error> {
        let req = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=representation")
            .header(header::CONTENT_TYPE, "application/json")
            .json(&CrewmatePayload::from(&fields));
        let rows = self.fetch_rows(req).await.context("insert crewmate")?;

        rows.into_iter()
            .next()
            .map(CrewmateModel::into_entity)
            .ok_or_else(|| anyhow!("insert crewmate returned no row"))
    }

    async fn update(
        &mut self,
        id: &entities::CrewmateId,
        fields: entities::CrewmateFields,
    ) -> Result<Option<entities::Crewmate>, Self::Error> {
        let req = self
            .client
            .patch(self.table_url())
            .query(&[Self::id_filter(id)])
            .header("Prefer", "return=representation")
            .header(header::CONTENT_TYPE, "application/json")
            .json(&CrewmatePayload::from(&fields));
        let rows = self.fetch_rows(req).await.context("update crewmate")?;

        Ok(rows.into_iter().next().map(CrewmateModel::into_entity))
    }

    async fn delete(&mut self, id: &entities::CrewmateId) -> Result<(), Self::Error> {
        let req = self.client.delete(self.table_url()).query(&[Self::id_filter(id)]);
        self.authorized(req)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .context("delete crewmate")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::CrewmatesRepository;
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use serde_json::json;

    const API_KEY: &str = "anon-key";

    // Minimal stand-in for the hosted endpoint: checks auth headers and echoes
    // the query string back through the row name so tests can assert on it.
    async fn fake_table(req: HttpRequest, body: web::Bytes) -> HttpResponse {
        let authorized = req
            .headers()
            .get("apikey")
            .map_or(false, |v| v == API_KEY)
            && req
                .headers()
                .get("authorization")
                .map_or(false, |v| v == "Bearer anon-key");
        if !authorized {
            return HttpResponse::Unauthorized().json(json!({"message": "Invalid API key"}));
        }

        let query = req.query_string().to_string();
        if query.contains("id=eq.missing") {
            return HttpResponse::Ok().json(json!([]));
        }
        if req.method() == actix_web::http::Method::DELETE {
            return HttpResponse::NoContent().finish();
        }

        let mut row = json!({
            "id": "a1",
            "name": query,
            "speed": 3,
            "color": "blue",
            "category": "Crewmate",
            "created_at": "2025-07-29T06:15:02+00:00",
        });
        if !body.is_empty() {
            let sent: serde_json::Value = serde_json::from_slice(&body).unwrap();
            for key in ["name", "speed", "color", "category"] {
                row[key] = sent[key].clone();
            }
        }
        HttpResponse::Ok().json(json!([row]))
    }

    async fn start_fake_store() -> String {
        let server = HttpServer::new(|| {
            App::new().route("/rest/v1/crewmates", web::route().to(fake_table))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}/", addr)
    }

    fn repository(url: String, api_key: &str) -> RestCrewmatesRepositoryImpl {
        RestCrewmatesRepositoryImpl::new(
            reqwest::Client::new(),
            RestGatewayConfig {
                url,
                api_key: api_key.to_string(),
                table: "crewmates".to_string(),
            },
        )
    }

    #[actix_web::test]
    async fn test_rest_repository_requests() {
        let url = start_fake_store().await;
        let mut repo = repository(url, API_KEY);

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].name.contains("order=created_at.desc"));
        assert!(listed[0].name.contains("select=*") || listed[0].name.contains("select=%2A"));

        let id = entities::CrewmateId::from("a1");
        let fetched = repo.get(&id).await.unwrap().unwrap();
        assert!(fetched.name.contains("id=eq.a1"));

        let missing = entities::CrewmateId::from("missing");
        assert_eq!(repo.get(&missing).await.unwrap(), None);

        let fields = entities::CrewmateFields {
            name: entities::CrewmateName::try_from("Cyan".to_string()).unwrap(),
            speed: entities::Speed::try_from(6).unwrap(),
            color: entities::Color::Cyan,
            category: entities::Category::Engineer,
        };
        let created = repo.create(fields.clone()).await.unwrap();
        assert_eq!(created.name, "Cyan");
        assert_eq!(created.speed, 6);
        assert_eq!(created.category, "Engineer");

        let updated = repo.update(&id, fields.clone()).await.unwrap().unwrap();
        assert_eq!(updated.color, "cyan");
        assert_eq!(repo.update(&missing, fields).await.unwrap(), None);

        repo.delete(&id).await.unwrap();
    }

    #[actix_web::test]
    async fn test_rest_repository_reports_store_failure() {
        let url = start_fake_store().await;
        let mut repo = repository(url, "wrong-key");

        let err = repo.list().await.unwrap_err();
        assert!(format!("{:#}", err).contains("401"));
        assert!(repo.delete(&entities::CrewmateId::from("a1")).await.is_err());
    }
}

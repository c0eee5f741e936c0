use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;
use ulid::Ulid;

use crate::{entities, ports};

#[derive(Debug, Default)]
struct MemoryTable {
    // insertion order; list() reverses it so equal timestamps stay newest-first
    rows: Vec<entities::Crewmate>,
}

/// Process-local store for `GATEWAY_KIND=MEMORY` and tests. Clones share rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryCrewmatesRepositoryImpl {
    table: Arc<Mutex<MemoryTable>>,
}

impl MemoryCrewmatesRepositoryImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record as-is, bypassing form rules like an out-of-band write.
    pub fn insert_raw(&self, crewmate: entities::Crewmate) {
        self.table.lock().rows.push(crewmate);
    }
}

fn apply(crewmate: &mut entities::Crewmate, fields: entities::CrewmateFields) {
    crewmate.name = fields.name.into();
    crewmate.speed = fields.speed.value();
    crewmate.color = fields.color.into();
    crewmate.category = fields.category.into();
}

impl ports::CrewmatesRepository for MemoryCrewmatesRepositoryImpl {
    type Error = anyhow::Error;

    async fn list(&mut self) -> Result<Vec<entities::Crewmate>, Self::Error> {
        let mut rows = self
            .table
            .lock()
            .rows
            .iter()
            .rev()
            .cloned()
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn get(
        &mut self,
        id: &entities::CrewmateId,
    ) -> Result<Option<entities::Crewmate>, Self::Error> {
        Ok(self
            .table
            .lock()
            .rows
            .iter()
            .find(|row| &row.id == id)
            .cloned())
    }

    async fn create(
        &mut self,
        fields: entities::CrewmateFields,
    ) -> Result<entities::Crewmate, Self::Error> {
        let mut crewmate = entities::Crewmate {
            id: entities::CrewmateId::from(Ulid::new().to_string()),
            name: String::new(),
            speed: 0,
            color: String::new(),
            category: String::new(),
            created_at: Utc::now(),
        };
        apply(&mut crewmate, fields);
        self.table.lock().rows.push(crewmate.clone());
        Ok(crewmate)
    }

    async fn update(
        &mut self,
        id: &entities::CrewmateId,
        fields: entities::CrewmateFields,
    ) -> Result<Option<entities::Crewmate>, Self::Error> {
        let mut table = self.table.lock();
        Ok(table.rows.iter_mut().find(|row| &row.id == id).map(|row| {
            apply(row, fields);
            row.clone()
        }))
    }

    async fn delete(&mut self, id: &entities::CrewmateId) -> Result<(), Self::Error> {
        self.table.lock().rows.retain(|row| &row.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::crewmate::tests::crewmate;
    use crate::ports::CrewmatesRepository;
    use chrono::Duration;

    fn fields(name: &str) -> entities::CrewmateFields {
        entities::CrewmateFields {
            name: entities::CrewmateName::try_from(name.to_string()).unwrap(),
            speed: entities::Speed::try_from(3).unwrap(),
            color: entities::Color::Blue,
            category: entities::Category::Crewmate,
        }
    }

    #[actix_web::test]
    async fn test_memory_repository() {
        let mut repo = MemoryCrewmatesRepositoryImpl::new();
        let first = repo.create(fields("first")).await.unwrap();
        let second = repo.create(fields("second")).await.unwrap();
        assert_ne!(first.id, second.id);

        let names = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["second", "first"]);

        let mut edited = fields("renamed");
        edited.category = entities::Category::Detective;
        let updated = repo.update(&first.id, edited).await.unwrap().unwrap();
        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.category, "Detective");
        assert_eq!(updated.created_at, first.created_at);
        assert_eq!(repo.get(&first.id).await.unwrap(), Some(updated));

        let missing = entities::CrewmateId::from("missing");
        assert_eq!(repo.update(&missing, fields("x")).await.unwrap(), None);

        repo.delete(&first.id).await.unwrap();
        repo.delete(&first.id).await.unwrap();
        assert_eq!(repo.get(&first.id).await.unwrap(), None);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_list_orders_by_created_at() {
        let mut repo = MemoryCrewmatesRepositoryImpl::new();
        let mut old = crewmate("old", 3, "red", "Crewmate");
        old.created_at = Utc::now() - Duration::days(2);
        let mut new = crewmate("new", 3, "red", "Crewmate");
        new.created_at = Utc::now();
        repo.insert_raw(new);
        repo.insert_raw(old);

        let ids = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["new", "old"]);
    }
}

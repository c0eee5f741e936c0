use crate::crew_error::CrewError;
use crate::entities;
use crate::ports::CrewmatesRepository;

/// Submits a creation draft. A blank name fails before the store is contacted.
pub async fn create<R>(
    repo: &mut R,
    draft: &entities::CrewmateDraft,
) -> Result<entities::Crewmate, CrewError>
where
    R: CrewmatesRepository<Error = anyhow::Error>,
{
    let fields = draft.submit()?;
    let crewmate = repo.create(fields).await?;
    log::info!("created crewmate {}", crewmate.id);
    Ok(crewmate)
}

/// Full replacement of the four fields of an existing record.
pub async fn update<R>(
    repo: &mut R,
    id: &entities::CrewmateId,
    draft: &entities::CrewmateDraft,
) -> Result<entities::Crewmate, CrewError>
where
    R: CrewmatesRepository<Error = anyhow::Error>,
{
    let fields = draft.submit()?;
    let crewmate = repo
        .update(id, fields)
        .await?
        .ok_or_else(|| CrewError::NotFound(id.clone()))?;
    log::info!("updated crewmate {}", crewmate.id);
    Ok(crewmate)
}

/// Callers must have obtained the user's confirmation already.
pub async fn delete<R>(repo: &mut R, id: &entities::CrewmateId) -> Result<(), CrewError>
where
    R: CrewmatesRepository<Error = anyhow::Error>,
{
    repo.delete(id).await?;
    log::info!("deleted crewmate {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryCrewmatesRepositoryImpl;
    use crate::queries::load_gallery;

    // Counts store calls on top of the in-memory store.
    #[derive(Default)]
    struct CountingRepository {
        inner: MemoryCrewmatesRepositoryImpl,
        calls: usize,
    }

    impl CrewmatesRepository for CountingRepository {
        type Error = anyhow::Error;

        async fn list(&mut self) -> anyhow::Result<Vec<entities::Crewmate>> {
            self.calls += 1;
            self.inner.list().await
        }

        async fn get(
            &mut self,
            id: &entities::CrewmateId,
        ) -> anyhow::Result<Option<entities::Crewmate>> {
            self.calls += 1;
            self.inner.get(id).await
        }

        async fn create(
            &mut self,
            fields: entities::CrewmateFields,
        ) -> anyhow::Result<entities::Crewmate> {
            self.calls += 1;
            self.inner.create(fields).await
        }

        async fn update(
            &mut self,
            id: &entities::CrewmateId,
            fields: entities::CrewmateFields,
        ) -> anyhow::Result<Option<entities::Crewmate>> {
            self.calls += 1;
            self.inner.update(id, fields).await
        }

        async fn delete(&mut self, id: &entities::CrewmateId) -> anyhow::Result<()> {
            self.calls += 1;
            self.inner.delete(id).await
        }
    }

    fn named_draft(name: &str) -> entities::CrewmateDraft {
        let mut draft = entities::CrewmateDraft::default();
        draft.set_name(name);
        draft
    }

    #[actix_web::test]
    async fn test_blank_name_never_reaches_store() {
        let mut repo = CountingRepository::default();
        let err = create(&mut repo, &named_draft("")).await.unwrap_err();
        assert!(matches!(err, CrewError::Validation(_)));
        assert_eq!(repo.calls, 0);

        let created = create(&mut repo, &named_draft("Red")).await.unwrap();
        assert_eq!(repo.calls, 1);
        let err = update(&mut repo, &created.id, &named_draft(" "))
            .await
            .unwrap_err();
        assert!(matches!(err, CrewError::Validation(_)));
        assert_eq!(repo.calls, 1);

        assert_eq!(repo.inner.list().await.unwrap(), vec![created]);
    }

    #[actix_web::test]
    async fn test_update_replaces_all_fields() {
        let mut repo = MemoryCrewmatesRepositoryImpl::new();
        let created = create(&mut repo, &named_draft("Red")).await.unwrap();

        let mut draft = entities::CrewmateDraft::from_crewmate(&created);
        draft.set_name("Engineer Red");
        draft.select_category(entities::Category::Engineer);
        draft.select_speed(6).unwrap();
        let updated = update(&mut repo, &created.id, &draft).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Engineer Red");
        assert_eq!(updated.speed, 6);
        assert_eq!(updated.color, "blue");
        assert_eq!(updated.category, "Engineer");

        let missing = entities::CrewmateId::from("missing");
        let err = update(&mut repo, &missing, &draft).await.unwrap_err();
        assert!(matches!(err, CrewError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_deleted_crewmate_is_gone_from_list() {
        let mut repo = MemoryCrewmatesRepositoryImpl::new();
        let kept = create(&mut repo, &named_draft("Kept")).await.unwrap();
        let removed = create(&mut repo, &named_draft("Removed")).await.unwrap();

        delete(&mut repo, &removed.id).await.unwrap();
        // repeated delete of a missing id still succeeds
        delete(&mut repo, &removed.id).await.unwrap();

        let view = load_gallery(&mut repo).await.unwrap();
        assert_eq!(view.crewmates, vec![kept]);
    }
}

use crate::entities;

/// Record store gateway.
///
/// Ordering, id assignment and `created_at` belong to the store; implementations
/// do not retry.
#[allow(async_fn_in_trait)]
pub trait CrewmatesRepository {
    type Error;

    /// All records, newest `created_at` first.
    async fn list(&mut self) -> Result<Vec<entities::Crewmate>, Self::Error>;

    async fn get(
        &mut self,
        id: &entities::CrewmateId,
    ) -> Result<Option<entities::Crewmate>, Self::Error>;

    async fn create(
        &mut self,
        fields: entities::CrewmateFields,
    ) -> Result<entities::Crewmate, Self::Error>;

    /// Replaces all four fields. `None` when no record has this id.
    async fn update(
        &mut self,
        id: &entities::CrewmateId,
        fields: entities::CrewmateFields,
    ) -> Result<Option<entities::Crewmate>, Self::Error>;

    /// Deleting a missing id is not an error.
    async fn delete(&mut self, id: &entities::CrewmateId) -> Result<(), Self::Error>;
}

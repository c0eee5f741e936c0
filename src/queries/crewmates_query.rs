use crate::crew_error::CrewError;
use crate::entities;
use crate::ports::CrewmatesRepository;

/// State of one gallery page view, rebuilt from a fresh `list()` on every visit.
#[derive(Clone, Debug)]
pub struct GalleryView {
    pub crewmates: Vec<entities::Crewmate>,
    pub statistics: Option<entities::CrewStatistics>,
}

impl GalleryView {
    pub fn new(crewmates: Vec<entities::Crewmate>) -> Self {
        let statistics = entities::CrewStatistics::from_crewmates(&crewmates);
        Self {
            crewmates,
            statistics,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.crewmates.is_empty()
    }
}

pub async fn load_gallery<R>(repo: &mut R) -> Result<GalleryView, CrewError>
where
    R: CrewmatesRepository<Error = anyhow::Error>,
{
    let crewmates = repo.list().await?;
    Ok(GalleryView::new(crewmates))
}

pub async fn load_crewmate<R>(
    repo: &mut R,
    id: &entities::CrewmateId,
) -> Result<entities::Crewmate, CrewError>
where
    R: CrewmatesRepository<Error = anyhow::Error>,
{
    repo.get(id)
        .await?
        .ok_or_else(|| CrewError::NotFound(id.clone()))
}

use thiserror::Error;

use crate::entities;

#[derive(Error, Debug)]
pub enum CrewError {
    #[error("crewmate {0} not found")]
    NotFound(entities::CrewmateId),
    #[error(transparent)]
    Validation(#[from] entities::ValidationError),
    #[error(transparent)]
    Draft(#[from] entities::DraftError),
    #[error("store failure: {0:#}")]
    Store(#[source] anyhow::Error),
}

impl CrewError {
    /// Errors caused by the request itself, as opposed to the store.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, CrewError::Store(_))
    }
}

impl From<anyhow::Error> for CrewError {
    fn from(e: anyhow::Error) -> Self {
        Self::Store(e)
    }
}

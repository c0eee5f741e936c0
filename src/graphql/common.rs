use std::future::Future;

use juniper::FieldResult;
use thiserror::Error;

use crate::crew_error::CrewError;

/// Errors whose message is safe to show to API clients.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct GraphqlUserError {
    #[source]
    pub source: anyhow::Error,
}

impl From<anyhow::Error> for GraphqlUserError {
    fn from(source: anyhow::Error) -> Self {
        Self { source }
    }
}

/// Wraps request-caused failures as [`GraphqlUserError`]; store failures pass through.
pub fn classify(err: CrewError) -> anyhow::Error {
    if err.is_user_error() {
        GraphqlUserError::from(anyhow::Error::new(err)).into()
    } else {
        anyhow::Error::new(err)
    }
}

pub async fn handler<T, Fut: Future<Output = anyhow::Result<T>>>(
    f: impl FnOnce() -> Fut,
) -> FieldResult<T> {
    match f().await {
        Ok(value) => Ok(value),
        Err(err) => Err(match err.downcast_ref::<GraphqlUserError>() {
            Some(err) => err.source.to_string().into(),
            None => {
                log::error!("{:?}", err);
                "Internal error".into()
            }
        }),
    }
}

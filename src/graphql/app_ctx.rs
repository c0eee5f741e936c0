use crate::adapters::CrewmatesGateway;

pub struct AppCtx {
    pub gateway: CrewmatesGateway,
}

impl AppCtx {
    /// Resolvers take `&AppCtx`, so each store call works on its own handle.
    pub fn repo(&self) -> CrewmatesGateway {
        self.gateway.clone()
    }
}

impl juniper::Context for AppCtx {}

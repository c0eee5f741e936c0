mod crewmate_model;
mod crewmates_gateway;
mod memory_crewmates_repository_impl;
mod pg_crewmates_repository_impl;
mod rest_crewmates_repository_impl;

pub use crewmates_gateway::CrewmatesGateway;
pub use memory_crewmates_repository_impl::MemoryCrewmatesRepositoryImpl;
pub use pg_crewmates_repository_impl::PgCrewmatesRepositoryImpl;
pub use rest_crewmates_repository_impl::RestCrewmatesRepositoryImpl;

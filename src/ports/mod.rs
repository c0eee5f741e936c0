mod crewmates_repository;

pub use crewmates_repository::*;

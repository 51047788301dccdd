// Infrastructure layer: Postgres adapters for the domain repository traits

pub mod repositories;

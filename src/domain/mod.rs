// Domain layer: entities, value objects, state machines, repository traits

pub mod department;
pub mod employee;
pub mod error;
pub mod leave;
pub mod repositories;
pub mod salary;
pub mod user;

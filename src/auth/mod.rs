// Authentication and authorization substrate

pub mod password;
pub mod policy;
pub mod principal;
pub mod token;

pub mod core;
pub mod filters;
pub mod session;
pub mod students;

pub mod commands;
pub mod eligibility;
pub mod errors;
pub mod loan;
pub mod value_objects;

pub use errors::*;
pub use value_objects::*;

pub mod loader;
pub mod schema;
pub mod timestamp;

pub use loader::expand_things;
pub use schema::{Thing, Variable};

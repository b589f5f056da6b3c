pub mod credentials;
pub mod loader;
pub mod schema;

pub use credentials::Credentials;
pub use schema::Settings;

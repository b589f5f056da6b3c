pub mod loader;
pub mod schema;

pub use loader::list_devices;
pub use schema::{Device, DeviceListing};

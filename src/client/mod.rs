pub mod auth;
pub mod endpoints;
pub mod fetcher;
pub mod transport;

pub use auth::{Token, acquire_token};
pub use endpoints::ApiEndpoints;
pub use fetcher::Fetcher;
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};

pub mod encoder;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod multipart;
pub mod openapi;
pub mod router;

pub use router::{create_router, AppState, RouteLayout};

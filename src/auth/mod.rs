// Bearer token authentication

pub mod errors;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod resolver;

pub use errors::*;
pub use jwt::*;
pub use middleware::*;
pub use models::*;
pub use resolver::*;

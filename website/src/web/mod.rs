pub mod error;
pub mod health;
pub mod index;
pub mod middleware;
pub mod pref;
pub mod routes;
pub mod sections;
pub mod security_headers;
pub mod store;

pub use error::*;
pub use health::*;
pub use index::*;
pub use pref::*;
pub use routes::*;
pub use sections::*;

pub mod params;
pub mod pref;
pub mod template;

pub use params::*;
pub use pref::*;
pub use template::*;

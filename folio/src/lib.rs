pub mod content;
pub mod error;
pub mod motion;
pub mod navigator;
pub mod scroll;
pub mod theme;

pub use error::{Error, Result};

pub mod config;
pub mod error;
pub mod escape;
pub mod symbols;
pub mod types;
pub mod unescape;

pub use config::*;
pub use error::*;
pub use escape::*;
pub use symbols::*;
pub use types::*;
pub use unescape::*;

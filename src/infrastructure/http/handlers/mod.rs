//! HTTP Handlers

mod ping;
mod template;

pub use ping::*;
pub use template::*;

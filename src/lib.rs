//! iconfont
pub mod compiler;
pub mod core;
pub mod data;
pub mod font_source;
pub mod index;
pub mod io;
pub mod logging;
#[cfg(test)]
mod tests;

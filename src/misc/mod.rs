#[macro_use]
mod log;
mod apply;
mod maybe;

pub use apply::Apply;
pub use maybe::Maybe;

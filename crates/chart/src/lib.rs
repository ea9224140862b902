// Selection-driven chart resolution and context text

pub mod context;
pub mod resolve;

pub use context::build_context;
pub use resolve::{resolve, ResolveError, MAX_SELECTED};

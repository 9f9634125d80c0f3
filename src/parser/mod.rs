pub mod header;
pub mod main;

pub use header::*;
pub use main::*;

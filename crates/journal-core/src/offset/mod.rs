mod table;
mod targets;

pub use table::*;
pub use targets::*;

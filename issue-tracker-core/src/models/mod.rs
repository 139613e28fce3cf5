mod filter;
mod issue;
mod patch;

pub use filter::*;
pub use issue::*;
pub use patch::*;

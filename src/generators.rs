pub mod candidate;
pub mod search;

pub use candidate::{get_next_generator, is_subsumed};
pub use search::{mine, talky_g};

//! Frequent generator mining over diffsets (Talky-G).
//!
//! ```
//! use talky_g::talky_g;
//!
//! let database = vec![vec![1, 2], vec![1, 3], vec![2, 3], vec![1, 2, 3]];
//! let index = talky_g(&database, 2);
//!
//! assert_eq!(index.len(), 6);
//! assert!(index.iter().all(|generator| generator.support >= 2));
//! ```

pub mod database;
pub mod error;
pub mod generators;
pub mod index;
pub mod indexer;
pub mod output;
pub mod setops;
pub mod tree;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use database::{read_database, read_database_file, ReaderConfig};
pub use error::{Error, Result};
pub use generators::{mine, talky_g};
pub use index::{EquivalenceIndex, Generator};
pub use output::{save_generators, write_generators};

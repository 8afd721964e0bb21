//! # quickscope - IP Range List Generation
//!
//! quickscope enumerates every address between two bounds (inclusive),
//! removes a user-supplied exception set, and writes the survivors to a
//! plain-text file, one address per line.
//!
//! ## Example Usage
//!
//! ```rust
//! use quickscope::types::AddrRange;
//! use quickscope::{exceptions, filter};
//!
//! let range = AddrRange::parse("192.168.1.1", "192.168.1.5").unwrap();
//! let set = exceptions::resolve(&["192.168.1.3".to_string()]);
//! let list = filter::apply(range.to_strings(), &set);
//!
//! assert_eq!(list.len(), 4);
//! ```
//!
//! ## Architecture
//!
//! The pipeline is a single pass: validate, generate, filter, write.
//!
//! - [`types`] - Address validation, integer encoding, and range iteration
//! - [`exceptions`] - Resolution of exception tokens (files or literals)
//! - [`filter`] - Order-preserving exception removal
//! - [`writer`] - Line-oriented output file writing
//! - [`error`] - Error types for range math and the CLI seam
//! - [`output`] - Styled console output

pub mod cli;
pub mod error;
pub mod exceptions;
pub mod filter;
pub mod output;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{CliError, CliResult, RangeError, RangeResult};
pub use types::{AddrFamily, AddrRange, Address};

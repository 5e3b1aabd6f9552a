//! Core library for labs
//!
//! This crate implements the **Functional Core** of the labs string-processing
//! service, following the Functional Core - Imperative Shell architectural
//! pattern.
//!
//! # Architecture Overview
//!
//! - **`labs_core`** (this crate): Pure transformation functions with zero I/O
//! - **`labs`**: HTTP server, admission gate, remote random source and CLI
//!   (the Imperative Shell)
//!
//! Every function here is deterministic. The one random step of the pipeline
//! (which character to remove) is drawn by the shell and passed in as a plain
//! index, so the whole record can be tested with fixture data.
//!
//! # Pipeline
//!
//! 1. [`validate()`]: only `'a'..='z'` is accepted
//! 2. [`Blacklist::check`]: forbidden literal inputs
//! 3. [`transform::half_reverse`]: the parity-dependent permutation
//! 4. [`analyze`]: character counts and the longest vowel-bounded substring
//! 5. [`sort`]: quicksort or tree sort, selected by the caller
//! 6. [`mutate::remove_char_at`]: drop the character at the drawn index
//!
//! [`record::prepare`] runs steps 1-3 and [`record::build_record`] runs 4-6.
//!
//! # Example Usage
//!
//! ```rust
//! use labs_core::{build_record, prepare, Blacklist, SortAlgorithm};
//!
//! let processed = prepare("abcdef", &Blacklist::default()).unwrap();
//! let record = build_record(processed, SortAlgorithm::TreeSort, 0);
//!
//! assert_eq!(record.processed_string, "cbafed");
//! assert_eq!(record.sorted_string, "abcdef");
//! assert_eq!(record.trimmed_string, "bafed");
//! ```

pub mod analyze;
pub mod error;
pub mod mutate;
pub mod record;
pub mod remote;
pub mod settings;
pub mod sort;
pub mod transform;
pub mod validate;

pub use error::ProcessError;
pub use record::{build_record, prepare, render_report, ResultRecord};
pub use sort::SortAlgorithm;
pub use validate::{validate, Blacklist};

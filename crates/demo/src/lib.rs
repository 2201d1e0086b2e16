//! Demonstration driver: synthetic data plus the console walkthrough.
//!
//! Everything here is presentation glue. The data-structure and algorithm
//! crates never print; this crate generates a reproducible batch of items
//! and narrates what each structure does with it.

pub mod generate;
pub mod walkthrough;

pub use generate::generate_batch;
pub use walkthrough::run_demo;

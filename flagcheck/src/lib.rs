//! Solver-style command-line front end built on `cloparse`.

pub mod arguments;
pub mod error;
pub mod report;

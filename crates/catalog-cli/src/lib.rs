//! Command-line front ends for the catalog preparation tools.

pub mod cli;

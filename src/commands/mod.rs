//! Command handlers for the clipclean binary.

pub mod clean;

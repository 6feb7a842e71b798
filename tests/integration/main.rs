//! Integration tests for clipclean.

mod helpers;

mod cli_test;
mod pipeline_test;

//! Integration test harness.

mod cli_test;
mod traceback_test;

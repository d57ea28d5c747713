//! Integration tests for readmegen

mod config_integration;
mod context_builder;
mod pruning_property;
mod test_utils;

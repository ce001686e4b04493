//! Integration tests - schema files, configuration files and variables end to end
//!
//! These tests exercise the public API the way the command line front end uses it.

mod config_file_tests;
mod movie_graph_tests;
mod schema_loading_tests;
mod variable_binding_tests;

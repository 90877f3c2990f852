//! Unit tests for the public loregraph API.

mod algorithms_test;
mod edge_test;
mod helpers_test;
mod node_test;
mod query_builder_test;
mod validation_test;

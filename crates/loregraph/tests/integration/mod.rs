//! Integration tests exercising the store end to end.

mod large_graph_test;
mod shared_graph_test;

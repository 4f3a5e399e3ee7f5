pub mod batch;
pub mod commands;
pub mod corpus;
pub mod trace_init;

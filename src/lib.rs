pub mod config;
pub mod dataset;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod pipeline;
pub mod salary;
pub mod vocabulary;

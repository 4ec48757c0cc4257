pub mod customer_pipeline;

pub use customer_pipeline::CustomerPipeline;

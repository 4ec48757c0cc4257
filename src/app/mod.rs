// Application layer: concrete pipelines wiring storage, config and domain services.

pub mod pipelines;

pub mod etl;
pub mod report;

pub use crate::domain::model::{Customer, LoadSummary, ReportStatus, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

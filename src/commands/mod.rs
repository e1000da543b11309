pub mod init;
pub mod report;

pub use report::{recompute, SectionReport};

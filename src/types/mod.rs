pub mod lint;
pub mod report;

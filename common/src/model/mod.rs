pub mod report;
pub mod template;

pub mod loader;
pub mod records;
pub mod report;
pub mod stats;

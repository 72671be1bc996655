pub mod error;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod report;
pub mod scorer;

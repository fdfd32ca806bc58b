pub mod aggregate;
pub mod cli;
pub mod conf;
pub mod logging;
pub mod normalize;
pub mod project;
pub mod render;
pub mod report;

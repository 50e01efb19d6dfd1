pub mod cli;
pub mod error;
pub mod git;
pub mod histogram;
pub mod model;
pub mod output;
pub mod render;
pub mod skyline;
pub mod util;

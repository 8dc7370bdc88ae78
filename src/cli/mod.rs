pub mod args;

pub use crate::report::report_filename;
pub use args::Args;

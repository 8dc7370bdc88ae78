//! Layout renderers

pub mod control_operativo;

pub use control_operativo::ReportRenderer;

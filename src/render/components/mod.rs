//! Rendering components for PDF generation

pub mod declaration;
pub mod form_table;
pub mod header;
pub mod text_box;

pub use declaration::DeclarationRenderer;
pub use form_table::{Cell, FormTableRenderer};
pub use header::HeaderRenderer;
pub use text_box::TextBoxRenderer;

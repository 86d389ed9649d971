//! Reference inline layout host.
//!
//! A real host measures word boxes with its own rendering engine; this module
//! provides a synthetic one so passes can run without it.

pub mod flow;
pub mod line_box;

pub use flow::{FlowLayout, FlowMetrics};
pub use line_box::LineBox;

//! elide-text: find where text must be cut to fit a box.
//!
//! A pass flows one way:
//! - [`probe`]: read the host's word boxes and container size
//! - [`finder`]: scan the boxes for the word at which to cut
//! - [`restore`]: flatten the marked render and publish the original text
//!
//! [`layout`] holds a synthetic inline layout host so passes can run and be
//! tested without a rendering engine.

pub mod error;
pub mod finder;
pub mod layout;
pub mod probe;
pub mod render;
pub mod request;
pub mod restore;
pub mod target;
pub mod truncate;

pub use error::{Result, TruncateError};
pub use finder::{EllipsisPlacement, TruncationResult, find_boundary};
pub use layout::{FlowLayout, FlowMetrics, LineBox};
pub use probe::{BoundingBox, LayoutProbe, Size, Word, collect_words};
pub use render::{DEFAULT_ELLIPSIS, render_marked, tokenize};
pub use request::{Container, HeightBudget, TruncateOptions, TruncationRequest};
pub use restore::{AuxiliaryFields, FieldWrite, Restoration, restore};
pub use target::{TextElement, TextTarget};
pub use truncate::{Outcome, run_pass, truncate, truncate_element};

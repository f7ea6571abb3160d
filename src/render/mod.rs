pub mod html;
pub mod markdown;
pub mod template;

pub use html::render_html;
pub use markdown::render_markdown;
pub use template::{SlotValues, Template};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Slot marker at byte {0} is not terminated with '-->'")]
    MalformedMarker(usize),
    #[error("Invalid slot name: '{0}'")]
    InvalidSlotName(String),
    #[error("Slot '{0}' is never closed")]
    UnclosedSlot(String),
    #[error("Slot '{inner}' is opened inside slot '{outer}'")]
    NestedSlot { outer: String, inner: String },
    #[error("Closing marker for slot '{0}' has no opening marker")]
    StrayClose(String),
    #[error("Template has no slot named '{0}'")]
    MissingSlot(String),
    #[error("Value bound to unknown slot '{0}'")]
    UnknownSlot(String),
}

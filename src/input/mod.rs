//! Input event types, tool selection, and the overlay state machine.

pub mod events;
pub mod state;
pub mod tool;

pub use events::{Key, KeyPress, PointerButton};
pub use state::{Artifact, Cursor, Mode, OverlayState, StrokeState, ToolConfig};
pub use tool::Tool;

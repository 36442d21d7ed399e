pub mod drag;
pub mod session;

pub use drag::{Cursor, DragController, DragState, DragTarget, TEXT_HIT_THRESHOLD, hit_test};
pub use session::{FALLBACK_CANVAS, PreviewFrame, PreviewLoop, preview_canvas};

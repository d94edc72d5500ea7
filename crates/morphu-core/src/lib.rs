//! Morphu Core Library
//!
//! Platform-agnostic data structures and logic for the Morphu whiteboard:
//! styled text posts, their placement on a 2-D board, local persistence,
//! and the style accessibility checker.

pub mod accessibility;
pub mod post;
pub mod storage;
pub mod store;
pub mod whiteboard;

pub use accessibility::{check_accessibility, contrast_ratio, AccessibilityWarning, StyleProps};
pub use post::{
    BorderStyle, FontStyle, FontWeight, PostData, PostId, PostStyle, TextAlignment,
    TextOrientation,
};
pub use store::{create_default_storage, BoardStore, POSTS_STORAGE_KEY, WHITEBOARD_STORAGE_KEY};
pub use whiteboard::{PostPlacement, ProfilePlacement, UserProfile, WhiteboardState};

//! Page geometry: section resolution and the live layout snapshot.
//!
//! This module handles:
//! - Mapping a scroll position to the active page section
//! - Merging adjacent sections into one contiguous region
//! - Reading section geometry from the rendered document (wasm32)

mod resolver;
#[cfg(target_arch = "wasm32")]
mod snapshot;

pub use resolver::{insert_merge_partner, resolve_active_section, scroll_target, section_end};
#[cfg(target_arch = "wasm32")]
pub use snapshot::LayoutSnapshot;

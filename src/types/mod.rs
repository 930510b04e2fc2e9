//! Data types shared by the resolver, navigation state and reviews widget.

mod review;
mod section;

pub use review::*;
pub use section::*;

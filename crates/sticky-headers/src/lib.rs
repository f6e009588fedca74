//! # Section headers for linear lists
//!
//! A [`HeaderDecoration`] sits next to a list and draws a header before every
//! group of items that share a [`HeaderId`]. The list drives it through the
//! two [`ItemDecoration`] hooks:
//!
//! - `item_offsets(position, list)` during layout. Group starts get room for
//!   their header (top inset for vertical lists, left for horizontal ones).
//! - `draw_over(list, canvas)` after items are drawn. Headers are painted on
//!   top, either scrolling with content ([`HeaderMode::Static`]) or pinned to
//!   the leading edge and pushed out by the next one ([`HeaderMode::Sticky`]).
//!
//! Headers come from a [`HeaderAdapter`]: the decoration asks it for the
//! identifier of each position and, the first time an identifier shows up,
//! for a holder whose [`View`](sticky_core::View) it measures and caches.
//! Sticky decorations also report every [`HeaderState`] change back to the
//! adapter, and remember where each header was drawn so taps can be routed
//! with [`HeaderDecoration::find_header_at`].
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use sticky_core::{Scene, SceneCanvas};
//! use sticky_headers::*;
//!
//! let mut headers = HeaderDecoration::sticky(Rc::new(ContactsAdapter::new()));
//!
//! // layout pass
//! let inset = headers.item_offsets(position, &list)?;
//!
//! // draw pass
//! let mut scene = Scene::default();
//! headers.draw_over(&list, &mut SceneCanvas::new(&mut scene))?;
//!
//! // tap routing
//! if let Some(position) = headers.find_header_at(x, y) { /* ... */ }
//! ```
//!
//! Only linear layouts are supported. Anything else fails every call with
//! [`DecorationError::UnsupportedLayout`].

pub mod adapter;
pub mod config;
pub mod decoration;
pub mod error;
pub mod groups;
pub mod list;
pub mod overlay;
pub mod provider;
pub mod state;

#[cfg(test)]
mod testing;

pub use adapter::*;
pub use config::*;
pub use decoration::*;
pub use error::*;
pub use list::*;
pub use overlay::HeaderRects;
pub use provider::{HeaderKey, HeaderProvider, RealizedHeader};
pub use state::*;

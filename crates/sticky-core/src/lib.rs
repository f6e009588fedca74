//! # Views, scenes and measurement for list headers
//!
//! `sticky-core` holds everything a header decoration needs that is not
//! specific to lists:
//!
//! - Geometry: [`Vec2`], [`Size`], [`Rect`], [`EdgeInsets`], [`Transform`].
//! - A small declarative [`View`] tree (`Surface`, `Row`, `Column`, `Text`)
//!   configured through a [`Modifier`].
//! - A retained [`Scene`] and the [`Canvas`] trait used to draw into it.
//!   [`SceneCanvas`] keeps a save/restore stack of translations and bakes the
//!   current one into every node it records.
//! - [`measure::measure_view`], which runs `taffy` over a view under a pair of
//!   [`MeasureSpec`]s and paints the result at the origin.
//!
//! ```rust
//! use sticky_core::*;
//!
//! let header = Surface(Modifier::new().height(32.0).background(Color::BLACK));
//! let laid = measure_view(
//!     &header,
//!     MeasureSpec::exactly(240.0),
//!     MeasureSpec::unspecified(0.0),
//! )
//! .unwrap();
//!
//! let mut scene = Scene::default();
//! let mut canvas = SceneCanvas::new(&mut scene);
//! canvas.save();
//! canvas.translate(0.0, -8.0);
//! laid.draw(&mut canvas);
//! canvas.restore();
//!
//! assert_eq!(scene.nodes[0].rect(), Rect::new(0.0, -8.0, 240.0, 32.0));
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod measure;
pub mod modifier;
pub mod render_api;
pub mod view;

pub use color::*;
pub use error::*;
pub use geometry::*;
pub use measure::*;
pub use modifier::*;
pub use render_api::*;
pub use view::*;

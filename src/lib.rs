//! funcplot renders mathematical expressions and sampled point sequences as
//! interactive 2D line plots.
//!
//! The crate is the plotting core only: coordinate transforms, lazy
//! expression evaluation, axis tick planning, and pan/zoom math. Pixel
//! drawing is delegated to a host backend through the [`Surface`] trait, and
//! input arrives as [`InputEvent`]s; the crate has no dependency on any GUI
//! framework.
//!
//! ```
//! use funcplot::{Color, Expr, Plot, RenderList, expr};
//!
//! let mut plot = Plot::new();
//! plot.add_series(expr::sin(Expr::x()), Color::TRANSPARENT, "sin");
//! plot.set_data_range(-3.0, 3.0, -1.0, 1.0).unwrap();
//! plot.set_pixel_size(640, 320).unwrap();
//!
//! let mut surface = RenderList::new();
//! plot.render(&mut surface);
//! assert!(!surface.commands().is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod axis;
pub mod config;
pub mod error;
pub mod expr;
pub mod geom;
pub mod interaction;
pub mod plot;
pub mod render;
pub mod samples;
pub mod series;
pub mod transform;
pub mod view;

pub use axis::{TickPlan, Ticks, almost_equal, format_tick, plan_ticks};
pub use config::{Grain, PlotConfig};
pub use error::RangeError;
pub use expr::{BinOp, Expr};
pub use geom::{Point, ScreenPoint};
pub use interaction::{Controller, InputEvent};
pub use plot::Plot;
pub use render::{Color, RenderCommand, RenderList, Surface, TextAlign};
pub use samples::Samples;
pub use series::PlotSeries;
pub use transform::Transform;
pub use view::{DataRange, Range};

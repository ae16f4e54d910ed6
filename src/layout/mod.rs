//! Grid and label layout for menu buttons.
//!
//! This module sizes and positions buttons on a menu canvas and fits label text
//! underneath them.
//!
//! # Layout Functions
//!
//! - [`layout_grid`](crate::layout::layout_grid) - picks the grid that makes the buttons as large as possible and places every cell
//! - [`fit_text`](crate::layout::fit_text) - wraps a label into a fixed width and line count, shrinking and ellipsizing as needed
//! - [`layout_menu`](crate::layout::layout_menu) - both of the above, sizing the grid around the labels it ends up with
//!
//! # Example
//!
//! ```
//! use menu_layout::layout::layout_menu;
//! use menu_layout::{ButtonSpec, CanvasSpec, Extent, LayoutParams, Measure, Pt, Px, WordSpacing};
//!
//! // every glyph is 60% of the font size wide
//! struct Mono;
//! impl Measure for Mono {
//!     fn measure(&self, text: &str, size: Pt, _: WordSpacing) -> Extent {
//!         Extent {
//!             width: Px(text.chars().count() as f64 * *size * 0.6),
//!             height: Px(*size * 1.25),
//!         }
//!     }
//! }
//!
//! let buttons = vec![ButtonSpec::from_dims(1920, 1080)?; 3];
//! let labels = ["Play Movie", "Scene Selection", "Special Features"];
//! let canvas = CanvasSpec::new(Px(854.0), Px(480.0))?;
//! let params = LayoutParams::default().with_labels(Px(25.0), 2);
//!
//! let menu = layout_menu(&buttons, &labels, &canvas, &params, &Mono)?;
//! assert_eq!(menu.buttons.len(), 3);
//! for (button, label) in menu.buttons.iter().zip(&menu.labels) {
//!     assert!(button.image.width() <= menu.grid.grid.cell_w);
//!     assert!(label.lines.len() <= 2);
//! }
//! # Ok::<(), menu_layout::LayoutError>(())
//! ```

mod grid;
mod menu;
mod shadow;
mod text;

pub use grid::*;
pub use menu::*;
pub use shadow::*;
pub use text::*;

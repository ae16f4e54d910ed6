use crate::error::InvalidInput;
use crate::units::*;

/// A single menu button, described by the aspect ratio (width / height) of its image.
/// Buttons are placed on the menu in the order they are given.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonSpec {
    pub aspect_ratio: f64,
}

impl ButtonSpec {
    /// Create a button, rejecting aspect ratios that are not positive and finite
    pub fn new(aspect_ratio: f64) -> Result<ButtonSpec, InvalidInput> {
        if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            Ok(ButtonSpec { aspect_ratio })
        } else {
            Err(InvalidInput::AspectRatio(aspect_ratio))
        }
    }

    /// Create a button from the pixel dimensions of its image
    pub fn from_dims(width: u32, height: u32) -> Result<ButtonSpec, InvalidInput> {
        ButtonSpec::new(width as f64 / height as f64)
    }

    /// Correct the aspect ratio for non-square storage pixels, see
    /// [`FrameDims::pixel_aspect_correction`](crate::dvd::FrameDims::pixel_aspect_correction)
    pub fn corrected(&self, correction: f64) -> Result<ButtonSpec, InvalidInput> {
        ButtonSpec::new(self.aspect_ratio * correction)
    }
}

/// The display area available to the button grid
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasSpec {
    pub width: Px,
    pub height: Px,
}

impl CanvasSpec {
    pub fn new<W: Into<Px>, H: Into<Px>>(width: W, height: H) -> Result<CanvasSpec, InvalidInput> {
        let canvas = CanvasSpec {
            width: width.into(),
            height: height.into(),
        };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(&self) -> Result<(), InvalidInput> {
        let valid = |v: Px| v.is_finite() && v > Px::ZERO;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(InvalidInput::Canvas {
                width: *self.width,
                height: *self.height,
            })
        }
    }
}

/// Padding and visual budget used when sizing the button grid and its labels.
///
/// The defaults match a typical standard-definition menu: 30px of padding around
/// and between buttons, a 5px border, and a soft shadow pushed 5px down and to the
/// right.
///
/// ```
/// use menu_layout::{LayoutParams, Px};
///
/// let params = LayoutParams::default()
///     .with_outer_padding(Px(80.0))
///     .with_inner_padding(Px(40.0))
///     .with_shadow(0.0, Px(0.0), Px(0.0));
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    /// Space between the canvas edge and the grid
    pub outer_padding: Px,
    /// Space between neighbouring cells
    pub inner_padding: Px,
    /// Space between a button and its label
    pub label_padding: Px,
    /// Border drawn around each button image
    pub border_thickness: Px,
    /// Outline drawn around a button when it is highlighted or selected
    pub highlight_thickness: Px,
    pub shadow_sigma: f64,
    pub shadow_x_offset: Px,
    pub shadow_y_offset: Px,
    /// Height of a single label line. Zero means "measure it from the font".
    pub label_line_height: Px,
    pub label_max_lines: usize,
    /// Font size for labels. When absent it is derived from `label_line_height`.
    pub label_point_size: Option<Pt>,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            outer_padding: Px(30.0),
            inner_padding: Px(30.0),
            label_padding: Px(5.0),
            border_thickness: Px(5.0),
            highlight_thickness: Px(10.0),
            shadow_sigma: 3.0,
            shadow_x_offset: Px(5.0),
            shadow_y_offset: Px(5.0),
            label_line_height: Px(0.0),
            label_max_lines: 2,
            label_point_size: None,
        }
    }
}

impl LayoutParams {
    pub fn with_outer_padding(mut self, padding: Px) -> LayoutParams {
        self.outer_padding = padding;
        self
    }

    pub fn with_inner_padding(mut self, padding: Px) -> LayoutParams {
        self.inner_padding = padding;
        self
    }

    pub fn with_label_padding(mut self, padding: Px) -> LayoutParams {
        self.label_padding = padding;
        self
    }

    pub fn with_border(mut self, thickness: Px) -> LayoutParams {
        self.border_thickness = thickness;
        self
    }

    pub fn with_highlight(mut self, thickness: Px) -> LayoutParams {
        self.highlight_thickness = thickness;
        self
    }

    /// Configure the drop shadow: its blur radius and how far it is pushed
    /// right (`x_offset`) and down (`y_offset`)
    pub fn with_shadow(mut self, sigma: f64, x_offset: Px, y_offset: Px) -> LayoutParams {
        self.shadow_sigma = sigma;
        self.shadow_x_offset = x_offset;
        self.shadow_y_offset = y_offset;
        self
    }

    pub fn with_labels(mut self, line_height: Px, max_lines: usize) -> LayoutParams {
        self.label_line_height = line_height;
        self.label_max_lines = max_lines;
        self
    }

    pub fn with_label_point_size(mut self, size: Pt) -> LayoutParams {
        self.label_point_size = Some(size);
        self
    }

    /// Check that every length is non-negative and finite (shadow offsets may be
    /// negative) and that labels get at least one line
    pub fn validate(&self) -> Result<(), InvalidInput> {
        let lengths = [
            ("outer_padding", *self.outer_padding),
            ("inner_padding", *self.inner_padding),
            ("label_padding", *self.label_padding),
            ("border_thickness", *self.border_thickness),
            ("highlight_thickness", *self.highlight_thickness),
            ("shadow_sigma", self.shadow_sigma),
            ("label_line_height", *self.label_line_height),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidInput::Parameter { name, value });
            }
        }

        let offsets = [
            ("shadow_x_offset", *self.shadow_x_offset),
            ("shadow_y_offset", *self.shadow_y_offset),
        ];
        for (name, value) in offsets {
            if !value.is_finite() {
                return Err(InvalidInput::Parameter { name, value });
            }
        }

        if let Some(size) = self.label_point_size {
            if !size.is_finite() || *size <= 0.0 {
                return Err(InvalidInput::Parameter {
                    name: "label_point_size",
                    value: *size,
                });
            }
        }

        if self.label_max_lines == 0 {
            return Err(InvalidInput::NoLabelLines);
        }

        Ok(())
    }
}

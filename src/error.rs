use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    /// The inputs were rejected before any layout was attempted
    InvalidInput(#[from] InvalidInput),

    #[error("not enough space to fit {buttons} buttons on the canvas")]
    /// Every candidate grid left no room for the buttons once padding, labels,
    /// borders and shadows were subtracted
    InsufficientSpace { buttons: usize },

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}

/// Precondition failures for layout inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("at least one button is required")]
    NoButtons,

    #[error("canvas must have a positive size, got {width}x{height}")]
    Canvas { width: f64, height: f64 },

    #[error("aspect ratio must be positive and finite, got {0}")]
    AspectRatio(f64),

    #[error("`{name}` must be non-negative and finite, got {value}")]
    Parameter { name: &'static str, value: f64 },

    #[error("labels must be allowed at least one line")]
    NoLabelLines,

    #[error("expected {buttons} labels (one per button), got {labels}")]
    LabelCount { buttons: usize, labels: usize },

    #[error("unknown video standard `{0}`")]
    VideoStandard(String),

    #[error("unknown menu aspect ratio `{0}`")]
    MenuAspect(String),
}

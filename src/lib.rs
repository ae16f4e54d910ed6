mod error;
pub use error::*;

mod font;
pub use font::*;

/// Grid, button and label layout
pub mod layout;

/// DVD frame sizes and pixel aspect ratios
pub mod dvd;

mod params;
pub use params::*;

mod rect;
pub use rect::*;

mod units;
pub use units::*;

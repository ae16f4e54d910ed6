//! Frame dimensions for DVD menus.
//!
//! DVD video is stored at a fixed resolution per video standard, but its pixels are
//! not square: the player stretches the stored frame to the menu's display aspect
//! ratio. Menus are laid out at the display size and scaled to the storage size
//! afterwards.
//!
//! # Example
//!
//! ```
//! use menu_layout::dvd::FrameDims;
//! use menu_layout::Px;
//!
//! let dims = FrameDims::new("ntsc".parse()?, "16:9".parse()?);
//! assert_eq!(dims.display_width, 854);
//! assert_eq!(dims.canvas().height, Px(480.0));
//! assert_eq!(dims.letterbox_height(), Some(360));
//! # Ok::<(), menu_layout::InvalidInput>(())
//! ```

use crate::error::InvalidInput;
use crate::params::CanvasSpec;
use crate::units::*;
use std::str::FromStr;

/// Width of every stored DVD frame
pub const STORAGE_WIDTH: u32 = 720;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VideoStandard {
    /// 480 lines
    Ntsc,
    /// 576 lines
    Pal,
}

impl VideoStandard {
    pub fn storage_height(self) -> u32 {
        match self {
            VideoStandard::Ntsc => 480,
            VideoStandard::Pal => 576,
        }
    }
}

impl FromStr for VideoStandard {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ntsc" => Ok(VideoStandard::Ntsc),
            "pal" => Ok(VideoStandard::Pal),
            _ => Err(InvalidInput::VideoStandard(s.to_string())),
        }
    }
}

/// The shape of the menu as shown on screen
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuAspect {
    /// 4:3
    Standard,
    /// 16:9
    Widescreen,
}

impl MenuAspect {
    pub fn ratio(self) -> f64 {
        match self {
            MenuAspect::Standard => 4.0 / 3.0,
            MenuAspect::Widescreen => 16.0 / 9.0,
        }
    }
}

impl FromStr for MenuAspect {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4:3" => Ok(MenuAspect::Standard),
            "16:9" => Ok(MenuAspect::Widescreen),
            _ => Err(InvalidInput::MenuAspect(s.to_string())),
        }
    }
}

/// Stored and displayed sizes of a menu frame, in pixels
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameDims {
    pub standard: VideoStandard,
    pub aspect: MenuAspect,
    pub storage_width: u32,
    pub storage_height: u32,
    pub display_width: u32,
    pub display_height: u32,
}

impl FrameDims {
    pub fn new(standard: VideoStandard, aspect: MenuAspect) -> FrameDims {
        let (display_width, display_height) = match (standard, aspect) {
            (VideoStandard::Ntsc, MenuAspect::Standard) => (720, 540),
            (VideoStandard::Ntsc, MenuAspect::Widescreen) => (854, 480),
            (VideoStandard::Pal, MenuAspect::Standard) => (768, 576),
            (VideoStandard::Pal, MenuAspect::Widescreen) => (1024, 576),
        };

        FrameDims {
            standard,
            aspect,
            storage_width: STORAGE_WIDTH,
            storage_height: standard.storage_height(),
            display_width,
            display_height,
        }
    }

    /// The canvas to lay the menu out on
    pub fn canvas(&self) -> CanvasSpec {
        CanvasSpec {
            width: Px(self.display_width as f64),
            height: Px(self.display_height as f64),
        }
    }

    pub fn storage_aspect(&self) -> f64 {
        self.storage_width as f64 / self.storage_height as f64
    }

    pub fn display_aspect(&self) -> f64 {
        self.display_width as f64 / self.display_height as f64
    }

    /// Factor that turns an aspect ratio measured in display pixels into one measured
    /// in storage pixels
    pub fn pixel_aspect_correction(&self) -> f64 {
        self.storage_aspect() / self.display_aspect()
    }

    /// Height of the 16:9 picture when a widescreen menu is shown letterboxed on a
    /// 4:3 screen. Highlight overlays for that mode are drawn at this height.
    pub fn letterbox_height(&self) -> Option<u32> {
        match self.aspect {
            MenuAspect::Widescreen => Some(self.storage_height * 3 / 4),
            MenuAspect::Standard => None,
        }
    }
}

use serde::{Deserialize, Serialize};

/// Page geometry: A4 portrait, millimetres.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
}

impl Template {
    pub fn as_str(self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Minimal => "minimal",
            Template::Creative => "creative",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Margins {
    Narrow,
    #[default]
    Normal,
    Wide,
}

/// Export configuration. Missing fields take the defaults
/// (modern, blue, medium, normal).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PdfOptions {
    pub template: Template,
    pub color_scheme: ColorScheme,
    pub font_size: FontSize,
    pub margins: Margins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn grey(level: u8) -> Self {
        Self::new(level, level, level)
    }
}

pub const BLACK: RgbColor = RgbColor::grey(0);
pub const WHITE: RgbColor = RgbColor::grey(255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: RgbColor,
    pub secondary: RgbColor,
    pub accent: RgbColor,
}

/// Point sizes for each text role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    pub section: f32,
    pub body: f32,
    pub name: f32,
}

impl Margins {
    pub fn mm(self) -> f32 {
        match self {
            Margins::Narrow => 15.0,
            Margins::Normal => 20.0,
            Margins::Wide => 25.0,
        }
    }
}

impl FontSize {
    pub fn scale(self) -> FontScale {
        match self {
            FontSize::Small => FontScale {
                section: 12.0,
                body: 10.0,
                name: 24.0,
            },
            FontSize::Medium => FontScale {
                section: 14.0,
                body: 11.0,
                name: 26.0,
            },
            FontSize::Large => FontScale {
                section: 16.0,
                body: 12.0,
                name: 28.0,
            },
        }
    }
}

impl ColorScheme {
    pub fn palette(self) -> Palette {
        match self {
            ColorScheme::Blue => Palette {
                primary: RgbColor::new(59, 130, 246),
                secondary: RgbColor::new(147, 197, 253),
                accent: RgbColor::new(30, 64, 175),
            },
            ColorScheme::Purple => Palette {
                primary: RgbColor::new(147, 51, 234),
                secondary: RgbColor::new(196, 181, 253),
                accent: RgbColor::new(88, 28, 135),
            },
            ColorScheme::Green => Palette {
                primary: RgbColor::new(34, 197, 94),
                secondary: RgbColor::new(134, 239, 172),
                accent: RgbColor::new(21, 128, 61),
            },
            ColorScheme::Orange => Palette {
                primary: RgbColor::new(249, 115, 22),
                secondary: RgbColor::new(254, 215, 170),
                accent: RgbColor::new(194, 65, 12),
            },
        }
    }
}

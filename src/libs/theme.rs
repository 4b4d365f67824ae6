//! Widget color themes.
//!
//! The palette is fixed: eight named themes whose hex values travel in the
//! widget snapshot so the external renderer never needs its own table.
//! Hex strings carry no leading `#`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Midnight,
    Light,
    Abyss,
    Ocean,
    Forest,
    Sunset,
    Lavender,
    Christmas,
}

impl Theme {
    pub const ALL: [Theme; 8] = [
        Theme::Midnight,
        Theme::Light,
        Theme::Abyss,
        Theme::Ocean,
        Theme::Forest,
        Theme::Sunset,
        Theme::Lavender,
        Theme::Christmas,
    ];

    /// Parses a stored or server-sent theme name. Unknown names are the
    /// caller's problem; there is no default hidden here.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "midnight" => Some(Self::Midnight),
            "light" => Some(Self::Light),
            "abyss" => Some(Self::Abyss),
            "ocean" => Some(Self::Ocean),
            "forest" => Some(Self::Forest),
            "sunset" => Some(Self::Sunset),
            "lavender" => Some(Self::Lavender),
            "christmas" => Some(Self::Christmas),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Midnight => "midnight",
            Self::Light => "light",
            Self::Abyss => "abyss",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Sunset => "sunset",
            Self::Lavender => "lavender",
            Self::Christmas => "christmas",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Midnight => "Midnight",
            Self::Light => "Light",
            Self::Abyss => "Abyss",
            Self::Ocean => "Ocean",
            Self::Forest => "Forest",
            Self::Sunset => "Sunset",
            Self::Lavender => "Lavender",
            Self::Christmas => "Christmas",
        }
    }

    pub fn accent_hex(&self) -> &'static str {
        match self {
            Self::Midnight | Self::Light => "6366F1",
            Self::Abyss => "3B82F6",
            Self::Ocean => "0EA5E9",
            Self::Forest => "10B981",
            Self::Sunset => "F97316",
            Self::Lavender => "A855F7",
            Self::Christmas => "DC2626",
        }
    }

    pub fn accent_secondary_hex(&self) -> &'static str {
        match self {
            Self::Midnight | Self::Light => "818CF8",
            Self::Abyss => "60A5FA",
            Self::Ocean => "38BDF8",
            Self::Forest => "34D399",
            Self::Sunset => "FB923C",
            Self::Lavender => "C084FC",
            Self::Christmas => "059669",
        }
    }

    pub fn background_start_hex(&self) -> &'static str {
        match self {
            Self::Midnight => "1A1D29",
            Self::Light => "F9FAFB",
            Self::Abyss => "000000",
            Self::Ocean => "1E293B",
            Self::Forest => "1A1F1A",
            Self::Sunset => "1F1D1A",
            Self::Lavender => "1D1A24",
            Self::Christmas => "1A0F0F",
        }
    }

    pub fn background_end_hex(&self) -> &'static str {
        match self {
            Self::Midnight => "13151D",
            Self::Light => "F3F4F6",
            Self::Abyss => "0A0A0A",
            Self::Ocean => "0F172A",
            Self::Forest => "111411",
            Self::Sunset => "141210",
            Self::Lavender => "131018",
            Self::Christmas => "0F1A0F",
        }
    }

    pub fn is_light(&self) -> bool {
        *self == Self::Light
    }
}

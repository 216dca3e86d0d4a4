use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{BlendlabError, BlendlabResult};

/// The closed catalog of blend modes, in gallery order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    /// `min(B, O)`.
    Darken,
    /// `B * O`.
    Multiply,
    /// Darken by inverted division.
    ColorBurn,
    /// `B + O - 1`, floored at zero.
    LinearBurn,
    /// Whole pixel with the lower luma.
    DarkerColor,
    /// `max(B, O)`.
    Lighten,
    /// Inverted multiply.
    Screen,
    /// Brighten by division.
    ColorDodge,
    /// `B + O`, capped at one.
    LinearDodge,
    /// Whole pixel with the higher luma.
    LighterColor,
    /// Multiply or screen, chosen by the base.
    Overlay,
    /// Gentle overlay.
    SoftLight,
    /// Overlay with the layers swapped.
    HardLight,
    /// Burn or dodge, chosen by the overlay.
    VividLight,
    /// `B + 2O - 1`, clamped.
    LinearLight,
    /// Darken or lighten, chosen by the overlay.
    PinLight,
    /// Vivid light posterized to zero or one.
    HardMix,
    /// `|B - O|`.
    Difference,
    /// `B + O - 2BO`.
    Exclusion,
    /// `B - O`, floored at zero.
    Subtract,
    /// `B / O`, capped at one.
    Divide,
    /// Overlay hue with base saturation and luma.
    Hue,
    /// Overlay saturation with base hue and luma.
    Saturation,
    /// Overlay hue and saturation with base luma.
    Color,
    /// Overlay luma with base hue and saturation.
    Luminosity,
}

/// Gallery section a mode is displayed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeGroup {
    /// Result is never lighter than either input.
    Darken,
    /// Result is never darker than either input.
    Lighten,
    /// Darkens below mid-grey, lightens above.
    Contrast,
    /// Difference-style inversion and arithmetic.
    Inversion,
    /// Non-separable hue/saturation/luma recombination.
    Component,
}

impl BlendMode {
    /// Every mode in gallery order.
    pub const ALL: [BlendMode; 25] = [
        Self::Darken,
        Self::Multiply,
        Self::ColorBurn,
        Self::LinearBurn,
        Self::DarkerColor,
        Self::Lighten,
        Self::Screen,
        Self::ColorDodge,
        Self::LinearDodge,
        Self::LighterColor,
        Self::Overlay,
        Self::SoftLight,
        Self::HardLight,
        Self::VividLight,
        Self::LinearLight,
        Self::PinLight,
        Self::HardMix,
        Self::Difference,
        Self::Exclusion,
        Self::Subtract,
        Self::Divide,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
    ];

    /// Stable kebab-case identifier, e.g. `"color-burn"`.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Darken => "darken",
            Self::Multiply => "multiply",
            Self::ColorBurn => "color-burn",
            Self::LinearBurn => "linear-burn",
            Self::DarkerColor => "darker-color",
            Self::Lighten => "lighten",
            Self::Screen => "screen",
            Self::ColorDodge => "color-dodge",
            Self::LinearDodge => "linear-dodge",
            Self::LighterColor => "lighter-color",
            Self::Overlay => "overlay",
            Self::SoftLight => "soft-light",
            Self::HardLight => "hard-light",
            Self::VividLight => "vivid-light",
            Self::LinearLight => "linear-light",
            Self::PinLight => "pin-light",
            Self::HardMix => "hard-mix",
            Self::Difference => "difference",
            Self::Exclusion => "exclusion",
            Self::Subtract => "subtract",
            Self::Divide => "divide",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Color => "color",
            Self::Luminosity => "luminosity",
        }
    }

    /// English display name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Darken => "Darken",
            Self::Multiply => "Multiply",
            Self::ColorBurn => "Color Burn",
            Self::LinearBurn => "Linear Burn",
            Self::DarkerColor => "Darker Color",
            Self::Lighten => "Lighten",
            Self::Screen => "Screen",
            Self::ColorDodge => "Color Dodge",
            Self::LinearDodge => "Linear Dodge (Add)",
            Self::LighterColor => "Lighter Color",
            Self::Overlay => "Overlay",
            Self::SoftLight => "Soft Light",
            Self::HardLight => "Hard Light",
            Self::VividLight => "Vivid Light",
            Self::LinearLight => "Linear Light",
            Self::PinLight => "Pin Light",
            Self::HardMix => "Hard Mix",
            Self::Difference => "Difference",
            Self::Exclusion => "Exclusion",
            Self::Subtract => "Subtract",
            Self::Divide => "Divide",
            Self::Hue => "Hue",
            Self::Saturation => "Saturation",
            Self::Color => "Color",
            Self::Luminosity => "Luminosity",
        }
    }

    /// Simplified Chinese display name, as used by image editors' localized menus.
    pub const fn label_zh(self) -> &'static str {
        match self {
            Self::Darken => "变暗",
            Self::Multiply => "正片叠底",
            Self::ColorBurn => "颜色加深",
            Self::LinearBurn => "线性加深",
            Self::DarkerColor => "深色",
            Self::Lighten => "变亮",
            Self::Screen => "滤色",
            Self::ColorDodge => "颜色减淡",
            Self::LinearDodge => "线性减淡",
            Self::LighterColor => "浅色",
            Self::Overlay => "叠加",
            Self::SoftLight => "柔光",
            Self::HardLight => "强光",
            Self::VividLight => "亮光",
            Self::LinearLight => "线性光",
            Self::PinLight => "点光",
            Self::HardMix => "实色混合",
            Self::Difference => "差值",
            Self::Exclusion => "排除",
            Self::Subtract => "减去",
            Self::Divide => "划分",
            Self::Hue => "色相",
            Self::Saturation => "饱和度",
            Self::Color => "颜色",
            Self::Luminosity => "明度",
        }
    }

    /// Gallery section for this mode.
    pub const fn group(self) -> ModeGroup {
        match self {
            Self::Darken
            | Self::Multiply
            | Self::ColorBurn
            | Self::LinearBurn
            | Self::DarkerColor => ModeGroup::Darken,
            Self::Lighten
            | Self::Screen
            | Self::ColorDodge
            | Self::LinearDodge
            | Self::LighterColor => ModeGroup::Lighten,
            Self::Overlay
            | Self::SoftLight
            | Self::HardLight
            | Self::VividLight
            | Self::LinearLight
            | Self::PinLight
            | Self::HardMix => ModeGroup::Contrast,
            Self::Difference | Self::Exclusion | Self::Subtract | Self::Divide => {
                ModeGroup::Inversion
            }
            Self::Hue | Self::Saturation | Self::Color | Self::Luminosity => ModeGroup::Component,
        }
    }

    /// True for modes whose output channel depends on all input channels.
    pub const fn is_non_separable(self) -> bool {
        matches!(
            self,
            Self::DarkerColor
                | Self::LighterColor
                | Self::Hue
                | Self::Saturation
                | Self::Color
                | Self::Luminosity
        )
    }

    /// Look up a mode by identifier.
    ///
    /// Matching is exact on the kebab-case id.
    pub fn parse(id: &str) -> BlendlabResult<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| BlendlabError::unknown_mode(id))
    }
}

impl FromStr for BlendMode {
    type Err = BlendlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/mode.rs"]
mod tests;

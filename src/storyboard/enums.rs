//! Closed code tables of the storyboard format.
//!
//! Each enum maps to a fixed external code that only matters when a line is written.

/// Types with a fixed code in the storyboard format.
pub trait FormatCode: Copy {
    /// Code written into the field, verbatim.
    fn code(self) -> &'static str;
}

/// Render layer of a storyboard object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Layer {
    /// Layer 0.
    Background,
    /// Layer 1, shown while the player is failing.
    Fail,
    /// Layer 2, shown while the player is passing.
    Pass,
    /// Layer 3.
    Foreground,
    /// Layer 4, drawn above gameplay elements.
    Overlay,
}

impl Layer {
    /// All layers in write order.
    pub const ALL: [Layer; 5] = [
        Layer::Background,
        Layer::Fail,
        Layer::Pass,
        Layer::Foreground,
        Layer::Overlay,
    ];

    /// Name used in the layer comment line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Fail => "Fail",
            Self::Pass => "Pass",
            Self::Foreground => "Foreground",
            Self::Overlay => "Overlay",
        }
    }
}

impl FormatCode for Layer {
    fn code(self) -> &'static str {
        match self {
            Self::Background => "0",
            Self::Fail => "1",
            Self::Pass => "2",
            Self::Foreground => "3",
            Self::Overlay => "4",
        }
    }
}

/// Anchor point of an object's image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Origin {
    /// Code 0.
    TopLeft,
    /// Code 1.
    Centre,
    /// Code 2.
    CentreLeft,
    /// Code 3.
    TopRight,
    /// Code 4.
    BottomCentre,
    /// Code 5.
    TopCentre,
    /// Code 7.
    CentreRight,
    /// Code 8.
    BottomLeft,
    /// Code 9.
    BottomRight,
}

impl FormatCode for Origin {
    fn code(self) -> &'static str {
        // 6 is not an origin in the format.
        match self {
            Self::TopLeft => "0",
            Self::Centre => "1",
            Self::CentreLeft => "2",
            Self::TopRight => "3",
            Self::BottomCentre => "4",
            Self::TopCentre => "5",
            Self::CentreRight => "7",
            Self::BottomLeft => "8",
            Self::BottomRight => "9",
        }
    }
}

/// Easing curve of a command; codes follow declaration order (`Linear` = 0).
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    EasingOut,
    EasingIn,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    ElasticIn,
    ElasticOut,
    ElasticHalfOut,
    ElasticQuarterOut,
    ElasticInOut,
    BackIn,
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
}

impl FormatCode for Easing {
    fn code(self) -> &'static str {
        match self {
            Self::Linear => "0",
            Self::EasingOut => "1",
            Self::EasingIn => "2",
            Self::QuadIn => "3",
            Self::QuadOut => "4",
            Self::QuadInOut => "5",
            Self::CubicIn => "6",
            Self::CubicOut => "7",
            Self::CubicInOut => "8",
            Self::QuartIn => "9",
            Self::QuartOut => "10",
            Self::QuartInOut => "11",
            Self::QuintIn => "12",
            Self::QuintOut => "13",
            Self::QuintInOut => "14",
            Self::SineIn => "15",
            Self::SineOut => "16",
            Self::SineInOut => "17",
            Self::ExpoIn => "18",
            Self::ExpoOut => "19",
            Self::ExpoInOut => "20",
            Self::CircIn => "21",
            Self::CircOut => "22",
            Self::CircInOut => "23",
            Self::ElasticIn => "24",
            Self::ElasticOut => "25",
            Self::ElasticHalfOut => "26",
            Self::ElasticQuarterOut => "27",
            Self::ElasticInOut => "28",
            Self::BackIn => "29",
            Self::BackOut => "30",
            Self::BackInOut => "31",
            Self::BounceIn => "32",
            Self::BounceOut => "33",
            Self::BounceInOut => "34",
        }
    }
}

/// Toggle applied by a parameter command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ParameterType {
    /// Mirror horizontally.
    FlipHorizontal,
    /// Mirror vertically.
    FlipVertical,
    /// Additive colour blending.
    AdditiveBlending,
}

impl FormatCode for ParameterType {
    fn code(self) -> &'static str {
        match self {
            Self::FlipHorizontal => "F",
            Self::FlipVertical => "V",
            Self::AdditiveBlending => "A",
        }
    }
}

/// Gameplay event that fires a trigger group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TriggerType {
    /// Fires when the player moves into the passing state.
    Passing,
    /// Fires when the player moves into the failing state.
    Failing,
}

impl FormatCode for TriggerType {
    fn code(self) -> &'static str {
        match self {
            Self::Passing => "Passing",
            Self::Failing => "Failing",
        }
    }
}

/// Frame looping behaviour of an animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LoopType {
    /// Restart from the first frame forever.
    #[default]
    Forever,
    /// Play once and hold the last frame.
    Once,
}

impl FormatCode for LoopType {
    fn code(self) -> &'static str {
        match self {
            Self::Forever => "LoopForever",
            Self::Once => "LoopOnce",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/enums.rs"]
mod tests;

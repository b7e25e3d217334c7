use nalgebra::Point2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const WHITE: Self = Self([255, 255, 255]);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Canonical landmark indices. Consumers key on these, so the order is fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LandmarkId {
    CornerLeftBottom = 0,
    CornerLeftTop = 1,
    CornerRightTop = 2,
    CornerRightBottom = 3,
    CenterBottom = 4,
    CenterTop = 5,
    CenterCircle = 6,
    PenaltyLeft = 7,
    PenaltyRight = 8,
}

impl LandmarkId {
    pub const ALL: [LandmarkId; 9] = [
        LandmarkId::CornerLeftBottom,
        LandmarkId::CornerLeftTop,
        LandmarkId::CornerRightTop,
        LandmarkId::CornerRightBottom,
        LandmarkId::CenterBottom,
        LandmarkId::CenterTop,
        LandmarkId::CenterCircle,
        LandmarkId::PenaltyLeft,
        LandmarkId::PenaltyRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            LandmarkId::CornerLeftBottom => "corner_lb",
            LandmarkId::CornerLeftTop => "corner_lt",
            LandmarkId::CornerRightTop => "corner_rt",
            LandmarkId::CornerRightBottom => "corner_rb",
            LandmarkId::CenterBottom => "center_bottom",
            LandmarkId::CenterTop => "center_top",
            LandmarkId::CenterCircle => "center_circle",
            LandmarkId::PenaltyLeft => "penalty_left",
            LandmarkId::PenaltyRight => "penalty_right",
        }
    }
}

impl TryFrom<usize> for LandmarkId {
    type Error = usize;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(index).copied().ok_or(index)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: LandmarkId,
    pub label: String,
    pub position: Point2<f64>,
    pub color: Color,
}

/// Straight line between two landmarks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub start: LandmarkId,
    pub end: LandmarkId,
}

impl Edge {
    pub const fn new(start: LandmarkId, end: LandmarkId) -> Self {
        Self { start, end }
    }

    pub fn indices(&self) -> (usize, usize) {
        (self.start.index(), self.end.index())
    }
}

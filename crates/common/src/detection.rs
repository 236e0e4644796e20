//! Per-frame detection geometry.
//!
//! A [`Detection`] is valid only for the frame it was computed from. It is
//! advisory overlay feedback; the authoritative face match happens on the
//! server during the auth exchange.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which overlay the detector should compute geometry for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectMode {
    /// Draw a bounding box around the detected face.
    Login,
    /// Draw the detected facial landmark points.
    Register,
}

impl fmt::Display for DetectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectMode::Login => f.write_str("login"),
            DetectMode::Register => f.write_str("register"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown detect mode: {0} (expected login or register)")]
pub struct ParseDetectModeError(String);

impl FromStr for DetectMode {
    type Err = ParseDetectModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(DetectMode::Login),
            "register" => Ok(DetectMode::Register),
            other => Err(ParseDetectModeError(other.to_string())),
        }
    }
}

/// Face bounding box in frame-native pixel coordinates.
///
/// Field names match the wire shape: edge offsets, not origin + extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceBox {
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
    pub left: i64,
}

impl FaceBox {
    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }
}

/// A single landmark point, serialized as a `[x, y]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point(pub i64, pub i64);

impl Point {
    pub fn x(&self) -> i64 {
        self.0
    }

    pub fn y(&self) -> i64 {
        self.1
    }
}

/// Normalized result of one detection request.
///
/// "Nothing detected" is an empty `Detection`, not an error: the overlay
/// simply draws no geometry for that cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    pub face: Option<FaceBox>,
    pub landmarks: Vec<Point>,
}

impl Detection {
    pub fn is_empty(&self) -> bool {
        self.face.is_none() && self.landmarks.is_empty()
    }
}

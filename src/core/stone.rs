use serde::{Deserialize, Serialize};
use std::fmt;

/// 石の色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    Black,
    White,
}

impl Default for Stone {
    fn default() -> Self {
        Stone::Black // 先手は黒
    }
}

impl Stone {
    pub fn opposite(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "B"),
            Stone::White => write!(f, "W"),
        }
    }
}

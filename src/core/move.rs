use super::types::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 棋譜に記録する1手。打てない場合はパスになる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Place(Position),
    Pass,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Place(pos) => write!(f, "{}", pos),
            Move::Pass => write!(f, "Pass"),
        }
    }
}

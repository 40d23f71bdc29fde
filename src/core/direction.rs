use super::types::Position;
use std::fmt;

/// 8方向。Top から時計回りに並ぶ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl Direction {
    /// 走査順 (Top から時計回り)
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    /// 時計回りに45度回した方向
    pub fn clockwise(self) -> Direction {
        match self {
            Direction::Top => Direction::TopRight,
            Direction::TopRight => Direction::Right,
            Direction::Right => Direction::BottomRight,
            Direction::BottomRight => Direction::Bottom,
            Direction::Bottom => Direction::BottomLeft,
            Direction::BottomLeft => Direction::Left,
            Direction::Left => Direction::TopLeft,
            Direction::TopLeft => Direction::Top,
        }
    }

    /// 反時計回りに45度回した方向
    pub fn counter_clockwise(self) -> Direction {
        match self {
            Direction::Top => Direction::TopLeft,
            Direction::TopLeft => Direction::Left,
            Direction::Left => Direction::BottomLeft,
            Direction::BottomLeft => Direction::Bottom,
            Direction::Bottom => Direction::BottomRight,
            Direction::BottomRight => Direction::Right,
            Direction::Right => Direction::TopRight,
            Direction::TopRight => Direction::Top,
        }
    }

    /// この方向に1マス進んだ座標。size x size の盤から出るなら None。
    pub fn step(self, pos: Position, size: usize) -> Option<Position> {
        let (dy, dx) = self.delta();
        let row = pos.row as i32 + dy;
        let col = pos.col as i32 + dx;
        if row >= 0 && row < size as i32 && col >= 0 && col < size as i32 {
            Some(Position::new(row as usize, col as usize))
        } else {
            None
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Top => (-1, 0),
            Direction::TopRight => (-1, 1),
            Direction::Right => (0, 1),
            Direction::BottomRight => (1, 1),
            Direction::Bottom => (1, 0),
            Direction::BottomLeft => (1, -1),
            Direction::Left => (0, -1),
            Direction::TopLeft => (-1, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::Top => "Top",
            Direction::TopRight => "Top-right",
            Direction::Right => "Right",
            Direction::BottomRight => "Bottom-right",
            Direction::Bottom => "Bottom",
            Direction::BottomLeft => "Bottom-left",
            Direction::Left => "Left",
            Direction::TopLeft => "Top-left",
        };
        write!(f, "{}", name)
    }
}

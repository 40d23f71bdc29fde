pub mod board;
pub mod direction;
pub mod history;
pub mod r#move;
pub mod stone;
pub mod types;

pub use board::Board;
pub use direction::Direction;
pub use history::{HistoryStack, MoveRecord};
pub use r#move::Move;
pub use stone::Stone;
pub use types::Position;

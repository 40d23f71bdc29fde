pub mod greedy;
pub mod lookahead;
pub mod random;

pub use greedy::GreedyAI;
pub use lookahead::LookaheadAI;
pub use random::{find_random_move, RandomAI};

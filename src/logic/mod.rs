pub mod tree;

use crate::core::{Board, Direction, MoveRecord, Position, Stone};

/// 挟んで返せる方向をすべて返す (Top から時計回りに走査)。
/// 隣から相手の石が1つ以上続き、その先を自分の石で閉じている方向だけが対象。
pub fn flipping_directions(board: &Board, stone: Stone, pos: Position) -> Vec<Direction> {
    let mut result = Vec::new();
    for dir in Direction::ALL {
        let mut opposite_seen = false;
        let mut cursor = dir.step(pos, board.size());
        while let Some(next) = cursor {
            let at = match board.stone_at(next.row, next.col) {
                Some(at) => at,
                None => break, // 空マスで途切れた
            };
            if at == stone.opposite() {
                opposite_seen = true;
            } else if opposite_seen {
                // 相手の石を挟んで自分の石に到達
                result.push(dir);
                break;
            } else {
                // 隣がいきなり自分の石
                break;
            }
            cursor = dir.step(next, board.size());
        }
    }
    result
}

/// 手番の石を置き、挟んだ石をすべて返す。
/// 返した石の数を返す。合法手でなければ何もせず 0。
pub fn place_stone(board: &mut Board, pos: Position) -> usize {
    match place_stone_tracked(board, pos) {
        Some(record) => record.flipped.len(),
        None => 0,
    }
}

/// place_stone と同じだが、適用した変化を MoveRecord として返す。
/// 合法手でなければ None。
pub fn place_stone_tracked(board: &mut Board, pos: Position) -> Option<MoveRecord> {
    if board.stone_at(pos.row, pos.col).is_some() {
        // すでに石がある
        return None;
    }

    let stone = board.turn();
    let directions = flipping_directions(board, stone, pos);
    if directions.is_empty() {
        // 1石も返せない手は無効
        return None;
    }

    board.set(pos, stone);
    let mut flipped = Vec::new();
    for dir in directions {
        // flipping_directions が保証するので、相手の石が続く限り返せばよい
        let mut cursor = dir.step(pos, board.size());
        while let Some(next) = cursor {
            if board.stone_at(next.row, next.col) != Some(stone.opposite()) {
                break;
            }
            board.set(next, stone);
            flipped.push(next);
            cursor = dir.step(next, board.size());
        }
    }

    board.next_turn();
    Some(MoveRecord::new(stone, pos, flipped))
}

/// 1石以上返せる手をすべて返す (行優先)
pub fn legal_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    // 空マスを全部試すだけ
    for row in 0..board.size() {
        for col in 0..board.size() {
            let pos = Position::new(row, col);
            if board.stone_at(row, col).is_none()
                && !flipping_directions(board, board.turn(), pos).is_empty()
            {
                moves.push(pos);
            }
        }
    }
    moves
}

/// 記録された変化を逆適用して1手戻す
pub fn undo_move(board: &mut Board, record: &MoveRecord) {
    if let Some(pos) = record.location {
        board.clear(pos);
        for &flip in &record.flipped {
            board.set(flip, record.stone.opposite());
        }
    }
    board.set_turn(record.stone);
}

/// 記録された変化を再適用して1手進める
pub fn redo_move(board: &mut Board, record: &MoveRecord) {
    if let Some(pos) = record.location {
        board.set(pos, record.stone);
        for &flip in &record.flipped {
            board.set(flip, record.stone);
        }
    }
    board.set_turn(record.stone.opposite());
}

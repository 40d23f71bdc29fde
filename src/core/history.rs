use super::stone::Stone;
use super::types::Position;

/// 1手で起きた変化の記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// 置いた石。パスの場合は手番だった側。
    pub stone: Stone,
    /// 石を置いた座標。パスなら None。
    pub location: Option<Position>,
    /// この手で返された石の座標
    pub flipped: Vec<Position>,
}

impl MoveRecord {
    pub fn new(stone: Stone, location: Position, flipped: Vec<Position>) -> Self {
        MoveRecord {
            stone,
            location: Some(location),
            flipped,
        }
    }

    pub fn pass(stone: Stone) -> Self {
        MoveRecord {
            stone,
            location: None,
            flipped: Vec::new(),
        }
    }
}

/// 指し手の履歴。LIFO だが、削除せずに前後へ読み進められる。
/// 末尾以外の位置で新しい手を積むと、それ以降の履歴は消える。
/// 盤面そのものではなく変化を記録する。
#[derive(Debug, Default)]
pub struct HistoryStack {
    histories: Vec<MoveRecord>,
    /// 現在読んでいる位置。初期局面を見ているときは None。
    position: Option<usize>,
}

impl HistoryStack {
    pub fn new() -> Self {
        HistoryStack {
            histories: Vec::new(),
            position: None,
        }
    }

    /// 手を積む。読み位置が末尾でなければ、それ以降の履歴を捨てる。
    pub fn push(&mut self, record: MoveRecord) {
        if !self.at_last_move() {
            let keep = match self.position {
                Some(i) => i + 1,
                None => 0,
            };
            self.histories.truncate(keep);
        }
        self.histories.push(record);
        self.position = Some(self.histories.len() - 1);
    }

    /// 現在の手を返し、読み位置を1つ戻す。
    /// 初期局面まで戻っていれば何もしない。
    pub fn previous(&mut self) -> Option<&MoveRecord> {
        let i = self.position?;
        self.position = if i == 0 { None } else { Some(i - 1) };
        Some(&self.histories[i])
    }

    /// 読み位置を1つ進め、その手を返す。末尾なら何もしない。
    pub fn next(&mut self) -> Option<&MoveRecord> {
        if self.at_last_move() {
            return None;
        }
        let i = match self.position {
            Some(i) => i + 1,
            None => 0,
        };
        self.position = Some(i);
        Some(&self.histories[i])
    }

    /// 次の手を読み位置を動かさずに返す。
    pub fn peek_next(&self) -> Option<&MoveRecord> {
        if self.at_last_move() {
            return None;
        }
        let i = match self.position {
            Some(i) => i + 1,
            None => 0,
        };
        self.histories.get(i)
    }

    /// 現在の盤面を作った手。初期局面なら None。
    pub fn current(&self) -> Option<&MoveRecord> {
        self.position.map(|i| &self.histories[i])
    }

    pub fn size(&self) -> usize {
        self.histories.len()
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn at_last_move(&self) -> bool {
        match self.position {
            Some(i) => i == self.histories.len() - 1,
            None => self.histories.is_empty(),
        }
    }

    pub fn at_before_first_move(&self) -> bool {
        self.position.is_none()
    }
}

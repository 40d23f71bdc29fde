use super::stone::Stone;
use super::types::Position;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// 盤面
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 盤は正方形なので一辺の長さだけ持つ
    size: usize,
    /// 行優先の平坦な配列。None は空マス。
    squares: Vec<Option<Stone>>,
    /// 現在の手番
    turn: Stone,
}

impl Board {
    /// 初期配置の盤面を作る。size は 4 以上の偶数であること。
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= 4 && size % 2 == 0);
        let mut board = Board {
            size,
            squares: vec![None; size * size],
            turn: Stone::Black,
        };
        // 中央に4石を置く
        let top_left = size / 2 - 1;
        board.place(top_left, top_left, Stone::White);
        board.place(top_left, top_left + 1, Stone::Black);
        board.place(top_left + 1, top_left, Stone::Black);
        board.place(top_left + 1, top_left + 1, Stone::White);
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// 現在の手番の石
    pub fn turn(&self) -> Stone {
        self.turn
    }

    /// 手番を交代する (パス)
    pub fn next_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// 座標の石。空マスも盤外もどちらも None。
    pub fn stone_at(&self, row: usize, col: usize) -> Option<Stone> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.squares[row * self.size + col]
    }

    /// 石を直接置く (初期配置・テスト用)
    pub fn place(&mut self, row: usize, col: usize, stone: Stone) {
        self.set(Position::new(row, col), stone);
    }

    pub(crate) fn set(&mut self, pos: Position, stone: Stone) {
        assert!(pos.row < self.size && pos.col < self.size);
        self.squares[pos.row * self.size + pos.col] = Some(stone);
    }

    pub(crate) fn clear(&mut self, pos: Position) {
        assert!(pos.row < self.size && pos.col < self.size);
        self.squares[pos.row * self.size + pos.col] = None;
    }

    pub(crate) fn set_turn(&mut self, stone: Stone) {
        self.turn = stone;
    }

    /// 指定した石の数を数える
    pub fn count_stones(&self, stone: Stone) -> usize {
        self.squares.iter().filter(|s| **s == Some(stone)).count()
    }

    /// 保存用のテキスト表現。1行目が手番、2行目がサイズ、以降が盤面。
    pub fn snapshot(&self) -> String {
        format!("{}\n{}\n{}", self.turn, self.size, self)
    }

    /// テキスト表現から盤面を復元する
    pub fn from_snapshot(text: &str) -> anyhow::Result<Board> {
        let mut lines = text.lines();
        let turn = match lines.next() {
            Some("B") => Stone::Black,
            Some("W") => Stone::White,
            other => bail!("invalid turn line: {:?}", other),
        };
        let size: usize = lines
            .next()
            .context("missing size line")?
            .trim()
            .parse()
            .context("invalid size line")?;
        if size < 4 || size % 2 != 0 {
            bail!("invalid board size: {}", size);
        }

        let mut board = Board {
            size,
            squares: vec![None; size * size],
            turn,
        };
        for row in 0..size {
            let line = lines
                .next()
                .with_context(|| format!("missing row {}", row))?;
            if line.chars().count() != size {
                bail!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    size
                );
            }
            for (col, at) in line.chars().enumerate() {
                match at {
                    'B' => board.place(row, col, Stone::Black),
                    'W' => board.place(row, col, Stone::White),
                    '*' => {}
                    _ => bail!("unknown cell {:?} at ({}, {})", at, row, col),
                }
            }
        }
        Ok(board)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        std::fs::write(path, self.snapshot())?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Board> {
        let text = std::fs::read_to_string(path)?;
        Board::from_snapshot(&text)
    }
}

impl fmt::Display for Board {
    /// 黒石を B、白石を W、空マスを * として1行ずつ出力する。
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                match self.stone_at(row, col) {
                    Some(stone) => write!(f, "{}", stone)?,
                    None => write!(f, "*")?,
                }
            }
        }
        Ok(())
    }
}

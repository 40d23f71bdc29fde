use crate::core::Move;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 棋譜データ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KifuData {
    pub board_size: usize,
    pub black_name: String,
    pub white_name: String,
    pub moves: Vec<Move>,
}

impl KifuData {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// 棋譜を kifu/ 以下にタイムスタンプ付きで保存する
pub fn save_kifu(kifu: &KifuData) -> anyhow::Result<PathBuf> {
    let kifu_dir = "kifu";
    std::fs::create_dir_all(kifu_dir)?;

    let filename = format!(
        "{}/game_{}.json",
        kifu_dir,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );

    let file = std::fs::File::create(&filename)?;
    serde_json::to_writer(file, kifu)?;
    Ok(filename.into())
}

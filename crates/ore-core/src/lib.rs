//! # Ore Core
//!
//! 核心資料模型與類型定義

pub mod catalog;
pub mod config;
pub mod mineral;
pub mod prices;
pub mod requirements;

// Re-export 主要類型
pub use catalog::{OreCatalog, OreType};
pub use config::PlanConfig;
pub use mineral::Mineral;
pub use prices::PriceTable;
pub use requirements::MineralRequirements;

/// 核心錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum OreError {
    #[error("礦石目錄缺少類型資料: typeID {0}")]
    MissingTypeInfo(u32),

    #[error("礦石目錄格式錯誤: {0}")]
    MalformedCatalog(String),

    #[error("讀取目錄檔案失敗: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("礦石目錄為空")]
    EmptyCatalog,

    #[error("無效的精煉效率 {0}（必須落在 (0, 1] 區間）")]
    InvalidEfficiency(f64),
}

pub type Result<T> = std::result::Result<T, OreError>;

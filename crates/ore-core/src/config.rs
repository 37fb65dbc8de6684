//! 採購計算配置

use serde::{Deserialize, Serialize};

use crate::{OreError, Result};

/// 預設精煉效率（50% 基礎 + 技能/設施加成的常見實測值）
pub const DEFAULT_EFFICIENCY: f64 = 0.739;

/// 預設採購批量（所有建議數量向上取整至此倍數）
pub const DEFAULT_BATCH_SIZE: u64 = 100;

/// 採購最佳化配置
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlanConfig {
    /// 精煉效率，必須落在 (0, 1] 區間
    pub efficiency: f64,

    /// 採購批量（實體數量的取整倍數）
    pub batch_size: u64,
}

impl PlanConfig {
    /// 創建新的配置，驗證精煉效率
    pub fn new(efficiency: f64) -> Result<Self> {
        if !(efficiency > 0.0 && efficiency <= 1.0) {
            return Err(OreError::InvalidEfficiency(efficiency));
        }
        Ok(Self {
            efficiency,
            batch_size: DEFAULT_BATCH_SIZE,
        })
    }

    /// 建構器模式：設置採購批量
    pub fn with_batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size;
        self
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            efficiency: DEFAULT_EFFICIENCY,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

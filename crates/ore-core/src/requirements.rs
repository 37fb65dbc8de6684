//! 礦物需求解析

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mineral::Mineral;

/// 礦物需求：礦物到最低需求量的映射
///
/// 每次最佳化請求由使用者貼上的文字重新建立，用後即棄。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineralRequirements {
    targets: HashMap<Mineral, u64>,
}

impl MineralRequirements {
    /// 創建空需求
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析自由格式需求文字
    ///
    /// 每列一項需求：`<礦物名稱> <數量>`，數量可含千分位逗號。
    /// 格式錯誤或名稱未知的列直接略過；同一礦物出現多次時，
    /// 後面的列覆蓋前面的值。
    pub fn parse(text: &str) -> Self {
        let mut requirements = Self::new();
        for line in text.lines() {
            let mut parts = line.split_whitespace();
            let (Some(name), Some(raw_quantity)) = (parts.next(), parts.next()) else {
                continue;
            };
            let Some(mineral) = Mineral::from_name(name) else {
                debug!(name, "略過未知礦物需求列");
                continue;
            };
            let Ok(quantity) = raw_quantity.replace(',', "").parse::<u64>() else {
                debug!(name, raw_quantity, "略過數量無效的需求列");
                continue;
            };
            requirements.targets.insert(mineral, quantity);
        }
        requirements
    }

    /// 建構器模式：設置單一礦物目標
    pub fn with_target(mut self, mineral: Mineral, quantity: u64) -> Self {
        self.targets.insert(mineral, quantity);
        self
    }

    /// 某礦物的目標量（未設定時為 0）
    pub fn target_of(&self, mineral: Mineral) -> u64 {
        self.targets.get(&mineral).copied().unwrap_or(0)
    }

    /// 所有正目標（目標為 0 的礦物不構成約束）
    pub fn positive_targets(&self) -> impl Iterator<Item = (Mineral, u64)> + '_ {
        Mineral::ALL
            .into_iter()
            .filter_map(|m| match self.target_of(m) {
                0 => None,
                quantity => Some((m, quantity)),
            })
    }

    /// 是否完全沒有正目標
    pub fn is_empty(&self) -> bool {
        self.positive_targets().next().is_none()
    }
}

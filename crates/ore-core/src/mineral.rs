//! 礦物定義

use serde::{Deserialize, Serialize};

/// 八種已知礦物（精煉產出物）
///
/// 每個變體對應 EVE 靜態資料中的 typeID。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mineral {
    /// 三鈦合金
    Tritanium,
    /// 類晶體膠礦
    Pyerite,
    /// 類銀超金屬
    Mexallon,
    /// 同位聚合體
    Isogen,
    /// 超新星諾克石
    Nocxium,
    /// 晶狀石英核岩
    Zydrine,
    /// 超噬礦
    Megacyte,
    /// 莫爾石
    Morphite,
}

impl Mineral {
    /// 全部礦物，依 typeID 順序
    pub const ALL: [Mineral; 8] = [
        Mineral::Tritanium,
        Mineral::Pyerite,
        Mineral::Mexallon,
        Mineral::Isogen,
        Mineral::Nocxium,
        Mineral::Zydrine,
        Mineral::Megacyte,
        Mineral::Morphite,
    ];

    /// 靜態資料 typeID
    pub fn type_id(self) -> u32 {
        match self {
            Mineral::Tritanium => 34,
            Mineral::Pyerite => 35,
            Mineral::Mexallon => 36,
            Mineral::Isogen => 37,
            Mineral::Nocxium => 38,
            Mineral::Zydrine => 39,
            Mineral::Megacyte => 40,
            Mineral::Morphite => 11399,
        }
    }

    /// 由 typeID 反查礦物
    pub fn from_type_id(type_id: u32) -> Option<Mineral> {
        Mineral::ALL.into_iter().find(|m| m.type_id() == type_id)
    }

    /// 顯示名稱（與需求輸入格式一致，區分大小寫）
    pub fn name(self) -> &'static str {
        match self {
            Mineral::Tritanium => "Tritanium",
            Mineral::Pyerite => "Pyerite",
            Mineral::Mexallon => "Mexallon",
            Mineral::Isogen => "Isogen",
            Mineral::Nocxium => "Nocxium",
            Mineral::Zydrine => "Zydrine",
            Mineral::Megacyte => "Megacyte",
            Mineral::Morphite => "Morphite",
        }
    }

    /// 由顯示名稱反查礦物（區分大小寫）
    pub fn from_name(name: &str) -> Option<Mineral> {
        Mineral::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl std::fmt::Display for Mineral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

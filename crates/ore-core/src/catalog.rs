//! 礦石目錄（參考資料載入與驗證）

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mineral::Mineral;
use crate::{OreError, Result};

/// 一種可採購的礦石批次類型
///
/// 由兩份參考資料集合併而成：精煉產出表提供 `yields`，
/// 類型元資料表提供名稱與單位體積。載入後不可變。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OreType {
    /// 靜態資料 typeID
    pub type_id: u32,

    /// 顯示名稱
    pub name: String,

    /// 單位體積（m³，僅供參考，不參與最佳化）
    pub volume: Decimal,

    /// 每單位精煉產出（未套用效率）
    yields: HashMap<Mineral, u64>,
}

impl OreType {
    /// 創建新的礦石類型
    pub fn new(type_id: u32, name: impl Into<String>, volume: Decimal) -> Self {
        Self {
            type_id,
            name: name.into(),
            volume,
            yields: HashMap::new(),
        }
    }

    /// 建構器模式：設置某礦物的每單位產出
    pub fn with_yield(mut self, mineral: Mineral, quantity: u64) -> Self {
        if quantity > 0 {
            self.yields.insert(mineral, quantity);
        }
        self
    }

    /// 某礦物的每單位產出（無產出時為 0）
    pub fn yield_of(&self, mineral: Mineral) -> u64 {
        self.yields.get(&mineral).copied().unwrap_or(0)
    }

    /// 是否有任何礦物產出
    pub fn has_yields(&self) -> bool {
        !self.yields.is_empty()
    }

    /// 所有產出項
    pub fn yields(&self) -> impl Iterator<Item = (Mineral, u64)> + '_ {
        self.yields.iter().map(|(m, q)| (*m, *q))
    }
}

/// 礦石目錄：typeID 到礦石類型的不可變映射
///
/// 以 BTreeMap 保存，確保走訪順序穩定。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OreCatalog {
    ores: BTreeMap<u32, OreType>,
}

impl OreCatalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 由既有的礦石類型建立目錄（供測試與程式化建構）
    pub fn from_ores(ores: impl IntoIterator<Item = OreType>) -> Self {
        Self {
            ores: ores.into_iter().map(|ore| (ore.type_id, ore)).collect(),
        }
    }

    /// 由兩份 CSV 參考資料載入目錄
    ///
    /// - `materials_path`：精煉產出表，需含 `typeID, materialTypeID, quantity` 欄位
    /// - `types_path`：類型元資料表，需含 `typeID, typeName, volume` 欄位（可有其他欄位）
    ///
    /// 產出表中的每個 typeID 都必須在元資料表中有對應列，
    /// 否則回傳 [`OreError::MissingTypeInfo`]。
    pub fn load_csv(materials_path: &Path, types_path: &Path) -> Result<Self> {
        let materials_text = fs::read_to_string(materials_path)?;
        let types_text = fs::read_to_string(types_path)?;
        let catalog = Self::from_csv_text(&materials_text, &types_text)?;
        debug!(ores = catalog.len(), "礦石目錄載入完成");
        Ok(catalog)
    }

    /// 由 CSV 文字內容建立目錄（`load_csv` 的核心，便於測試）
    pub fn from_csv_text(materials_text: &str, types_text: &str) -> Result<Self> {
        // 精煉產出表：typeID -> (礦物 -> 每單位產出)
        let mut yields: BTreeMap<u32, HashMap<Mineral, u64>> = BTreeMap::new();
        for row in CsvRows::new(materials_text, &["typeID", "materialTypeID", "quantity"])? {
            let [type_id, material_id, quantity] = row?;
            let type_id = parse_field::<u32>(&type_id, "typeID")?;
            let material_id = parse_field::<u32>(&material_id, "materialTypeID")?;
            let quantity = parse_field::<u64>(&quantity, "quantity")?;

            // 非八種礦物的產出列（雜質、副產物）不參與最佳化
            let Some(mineral) = Mineral::from_type_id(material_id) else {
                continue;
            };
            if quantity > 0 {
                yields.entry(type_id).or_default().insert(mineral, quantity);
            }
        }

        // 類型元資料表：typeID -> (名稱, 體積)
        let mut metadata: HashMap<u32, (String, Decimal)> = HashMap::new();
        for row in CsvRows::new(types_text, &["typeID", "typeName", "volume"])? {
            let [type_id, type_name, volume] = row?;
            let type_id = parse_field::<u32>(&type_id, "typeID")?;
            let volume = parse_field::<Decimal>(&volume, "volume")?;
            metadata.insert(type_id, (type_name, volume));
        }

        let mut ores = BTreeMap::new();
        for (type_id, ore_yields) in yields {
            let (name, volume) = metadata
                .remove(&type_id)
                .ok_or(OreError::MissingTypeInfo(type_id))?;
            ores.insert(
                type_id,
                OreType {
                    type_id,
                    name,
                    volume,
                    yields: ore_yields,
                },
            );
        }

        if ores.is_empty() {
            return Err(OreError::EmptyCatalog);
        }
        Ok(Self { ores })
    }

    /// 查詢礦石類型
    pub fn get(&self, type_id: u32) -> Option<&OreType> {
        self.ores.get(&type_id)
    }

    /// 走訪所有礦石類型（typeID 遞增）
    pub fn iter(&self) -> impl Iterator<Item = &OreType> {
        self.ores.values()
    }

    /// 所有 typeID（供行情查詢）
    pub fn type_ids(&self) -> Vec<u32> {
        self.ores.keys().copied().collect()
    }

    /// 是否有任何礦石能產出指定礦物
    pub fn any_yields(&self, mineral: Mineral) -> bool {
        self.ores.values().any(|ore| ore.yield_of(mineral) > 0)
    }

    pub fn len(&self) -> usize {
        self.ores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ores.is_empty()
    }
}

/// 依標頭名稱定位欄位後逐列取值的簡易 CSV 走訪器
///
/// 參考資料集為純數值/識別字欄位，無引號跳脫，直接以逗號切分。
struct CsvRows<'a, const N: usize> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    columns: [usize; N],
}

impl<'a, const N: usize> CsvRows<'a, N> {
    fn new(text: &'a str, wanted: &[&str; N]) -> Result<Self> {
        let mut lines = text.lines().enumerate();
        let (_, header) = lines
            .next()
            .ok_or_else(|| OreError::MalformedCatalog("缺少標頭列".to_string()))?;
        let names: Vec<&str> = header.split(',').map(str::trim).collect();

        let mut columns = [0usize; N];
        for (slot, want) in columns.iter_mut().zip(wanted) {
            *slot = names
                .iter()
                .position(|name| name == want)
                .ok_or_else(|| OreError::MalformedCatalog(format!("缺少欄位 {want}")))?;
        }
        Ok(Self { lines, columns })
    }
}

impl<const N: usize> Iterator for CsvRows<'_, N> {
    type Item = Result<[String; N]>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (line_no, line) = self.lines.next()?;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let mut row = std::array::from_fn(|_| String::new());
            for (slot, column) in row.iter_mut().zip(self.columns) {
                match fields.get(column) {
                    Some(value) => *slot = (*value).to_string(),
                    None => {
                        return Some(Err(OreError::MalformedCatalog(format!(
                            "第 {} 列欄位數不足",
                            line_no + 1
                        ))))
                    }
                }
            }
            return Some(Ok(row));
        }
    }
}

fn parse_field<T: std::str::FromStr>(value: &str, column: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| OreError::MalformedCatalog(format!("欄位 {column} 值無效: {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATERIALS: &str = "\
typeID,materialTypeID,quantity
62516,34,400
62516,35,80
62520,35,350
62520,37,60
";

    // 元資料表帶有額外欄位，需依標頭名稱定位
    const TYPES: &str = "\
typeID,groupID,typeName,volume,basePrice
62516,4168,Compressed Veldspar,0.15,10.0
62520,4168,Compressed Scordite,0.19,14.0
62524,4168,Compressed Pyroxeres,0.16,22.0
";

    #[test]
    fn test_load_joins_yields_and_metadata() {
        let catalog = OreCatalog::from_csv_text(MATERIALS, TYPES).unwrap();

        assert_eq!(catalog.len(), 2);
        let veldspar = catalog.get(62516).unwrap();
        assert_eq!(veldspar.name, "Compressed Veldspar");
        assert_eq!(veldspar.volume, Decimal::new(15, 2));
        assert_eq!(veldspar.yield_of(Mineral::Tritanium), 400);
        assert_eq!(veldspar.yield_of(Mineral::Pyerite), 80);
        assert_eq!(veldspar.yield_of(Mineral::Isogen), 0);

        // 只在元資料表出現的 typeID 不會成為目錄項
        assert!(catalog.get(62524).is_none());
    }

    #[test]
    fn test_missing_metadata_is_load_error() {
        let materials = "typeID,materialTypeID,quantity\n99999,34,100\n";
        let err = OreCatalog::from_csv_text(materials, TYPES).unwrap_err();
        assert!(matches!(err, OreError::MissingTypeInfo(99999)));
    }

    #[test]
    fn test_unknown_material_rows_are_skipped() {
        // materialTypeID 281 不是八種礦物之一
        let materials = "\
typeID,materialTypeID,quantity
62516,34,400
62516,281,5
";
        let catalog = OreCatalog::from_csv_text(materials, TYPES).unwrap();
        let veldspar = catalog.get(62516).unwrap();
        assert_eq!(veldspar.yields().count(), 1);
    }

    #[test]
    fn test_ore_without_mineral_yields_is_dropped() {
        // 唯一一列產出不是礦物，該 typeID 無法參與最佳化
        let materials = "\
typeID,materialTypeID,quantity
62516,34,400
62520,281,5
";
        let catalog = OreCatalog::from_csv_text(materials, TYPES).unwrap();
        assert!(catalog.get(62520).is_none());
    }

    #[test]
    fn test_missing_column_is_malformed() {
        let materials = "typeID,quantity\n62516,400\n";
        let err = OreCatalog::from_csv_text(materials, TYPES).unwrap_err();
        assert!(matches!(err, OreError::MalformedCatalog(_)));
    }

    #[test]
    fn test_bad_numeric_field_is_malformed() {
        let materials = "typeID,materialTypeID,quantity\n62516,34,plenty\n";
        let err = OreCatalog::from_csv_text(materials, TYPES).unwrap_err();
        assert!(matches!(err, OreError::MalformedCatalog(_)));
    }

    #[test]
    fn test_empty_catalog_is_error() {
        let materials = "typeID,materialTypeID,quantity\n";
        let err = OreCatalog::from_csv_text(materials, TYPES).unwrap_err();
        assert!(matches!(err, OreError::EmptyCatalog));
    }

    #[test]
    fn test_any_yields() {
        let catalog = OreCatalog::from_csv_text(MATERIALS, TYPES).unwrap();
        assert!(catalog.any_yields(Mineral::Tritanium));
        assert!(catalog.any_yields(Mineral::Isogen));
        assert!(!catalog.any_yields(Mineral::Morphite));
    }
}

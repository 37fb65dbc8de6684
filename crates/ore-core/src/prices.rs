//! 行情報價表

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 行情報價：typeID 到單位賣價的映射
///
/// 可能只涵蓋目錄的子集；缺少報價的礦石視為「無成本訊號」，
/// 由最佳化引擎釘零，不得被選購。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    prices: HashMap<u32, Decimal>,
}

impl PriceTable {
    /// 創建空報價表
    pub fn new() -> Self {
        Self::default()
    }

    /// 設置某 typeID 的單位賣價
    pub fn insert(&mut self, type_id: u32, price: Decimal) {
        self.prices.insert(type_id, price);
    }

    /// 查詢單位賣價
    pub fn get(&self, type_id: u32) -> Option<Decimal> {
        self.prices.get(&type_id).copied()
    }

    /// 是否有此 typeID 的報價
    pub fn contains(&self, type_id: u32) -> bool {
        self.prices.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(u32, Decimal)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (u32, Decimal)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut prices = PriceTable::new();
        prices.insert(62516, Decimal::new(1250, 2));

        assert!(prices.contains(62516));
        assert_eq!(prices.get(62516), Some(Decimal::new(1250, 2)));
        assert_eq!(prices.get(62520), None);
    }

    #[test]
    fn test_from_iterator() {
        let prices: PriceTable = [(1, Decimal::ONE), (2, Decimal::TWO)].into_iter().collect();
        assert_eq!(prices.len(), 2);
    }
}

//! Fuzzwork 聚合行情客戶端
//!
//! 端點回傳 `typeID（字串）→ 買賣雙邊統計` 的映射；
//! 欄位可能缺漏或以字串表示數值，缺漏一律視為「無報價」而非錯誤。

use std::collections::HashMap;

use reqwest::blocking::Client;
use reqwest::Url;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use ore_core::PriceTable;

const DEFAULT_BASE_URL: &str = "https://market.fuzzwork.co.uk/aggregates/";
const USER_AGENT: &str = "oreplan/0.1.0";

/// 預設交易站：Jita IV - Moon 4 - Caldari Navy Assembly Plant
pub const DEFAULT_STATION_ID: u64 = 60003760;

/// 行情取得錯誤：對本次請求是致命的，照原樣上報，不重試
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("無效的行情端點 URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("行情請求失敗: {0}")]
    Http(#[from] reqwest::Error),
}

/// 單邊（買或賣）聚合統計，只取用加權平均價
#[derive(Debug, Deserialize)]
struct SideAggregate {
    #[serde(rename = "weightedAverage")]
    weighted_average: Option<RawNumber>,
}

/// 某 typeID 的聚合行情
#[derive(Debug, Deserialize)]
struct TypeAggregate {
    sell: Option<SideAggregate>,
}

/// 端點把數值序列化為字串，偶有原生數字，兩者都接受
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    fn as_decimal(&self) -> Option<Decimal> {
        match self {
            RawNumber::Number(value) => Decimal::from_f64(*value),
            RawNumber::Text(text) => text.parse().ok(),
        }
    }
}

/// Fuzzwork 行情客戶端（同步阻塞）
#[derive(Debug, Clone)]
pub struct FuzzworkClient {
    http: Client,
    base_url: Url,
}

impl FuzzworkClient {
    /// 以預設端點創建客戶端
    pub fn new() -> Result<Self, MarketError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// 以自訂端點創建客戶端（供測試替身使用）
    pub fn with_base_url(base: &str) -> Result<Self, MarketError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url })
    }

    /// 取得指定交易站、指定 typeID 集合的賣方加權平均價
    ///
    /// 回應中缺少的 typeID 或缺少賣方統計的項目不會出現在報價表中。
    pub fn fetch_prices(
        &self,
        station_id: u64,
        type_ids: &[u32],
    ) -> Result<PriceTable, MarketError> {
        let types = type_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .http
            .get(self.base_url.clone())
            .query(&[("station", station_id.to_string()), ("types", types)])
            .send()?
            .error_for_status()?;

        let aggregates: HashMap<String, TypeAggregate> = response.json()?;
        let prices = price_table_from(aggregates);
        debug!(
            station_id,
            requested = type_ids.len(),
            priced = prices.len(),
            "行情取得完成"
        );
        Ok(prices)
    }
}

/// 將聚合回應整理為報價表，略過無法使用的項目
fn price_table_from(aggregates: HashMap<String, TypeAggregate>) -> PriceTable {
    aggregates
        .into_iter()
        .filter_map(|(type_id, aggregate)| {
            let type_id = type_id.parse::<u32>().ok()?;
            let price = aggregate.sell?.weighted_average?.as_decimal()?;
            if price < Decimal::ZERO {
                return None;
            }
            Some((type_id, price))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_body(body: &str) -> PriceTable {
        let aggregates: HashMap<String, TypeAggregate> = serde_json::from_str(body).unwrap();
        price_table_from(aggregates)
    }

    #[test]
    fn test_string_and_number_prices_are_accepted() {
        let prices = parse_body(
            r#"{
                "62516": {"sell": {"weightedAverage": "12.5", "min": "12.0"}},
                "62520": {"sell": {"weightedAverage": 31.0}}
            }"#,
        );

        assert_eq!(prices.get(62516), Some(Decimal::new(125, 1)));
        assert_eq!(prices.get(62520), Some(Decimal::from(31)));
    }

    #[test]
    fn test_missing_sell_side_means_no_price() {
        let prices = parse_body(
            r#"{
                "62516": {"buy": {"weightedAverage": "1.0"}},
                "62520": {"sell": {"max": "99.0"}}
            }"#,
        );

        assert!(!prices.contains(62516));
        assert!(!prices.contains(62520));
    }

    #[test]
    fn test_unusable_values_are_skipped() {
        let prices = parse_body(
            r#"{
                "62516": {"sell": {"weightedAverage": "not-a-number"}},
                "62520": {"sell": {"weightedAverage": "-4.0"}},
                "oops": {"sell": {"weightedAverage": "5.0"}},
                "62524": {"sell": {"weightedAverage": "7.25"}}
            }"#,
        );

        assert_eq!(prices.len(), 1);
        assert_eq!(prices.get(62524), Some(Decimal::new(725, 2)));
    }

    #[test]
    fn test_empty_response_is_empty_table() {
        assert!(parse_body("{}").is_empty());
    }
}

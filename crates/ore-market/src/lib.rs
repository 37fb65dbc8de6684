//! # Ore Market
//!
//! Fuzzwork 市場聚合行情的同步客戶端。
//! 取回指定交易站的賣方加權平均價，組成 [`ore_core::PriceTable`]。

pub mod fuzzwork;

pub use fuzzwork::{FuzzworkClient, MarketError, DEFAULT_STATION_ID};

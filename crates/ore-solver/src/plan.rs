//! 採購計劃模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一礦石的採購項
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLine {
    /// 礦石 typeID
    pub type_id: u32,

    /// 礦石顯示名稱
    pub name: String,

    /// 實體採購數量（批量的正整數倍）
    pub quantity: u64,

    /// 本項成本 = 實體數量 × 單位賣價
    pub line_cost: Decimal,
}

/// 採購計劃（最佳化結果）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchasePlan {
    /// 採購項，依 typeID 遞增；數量為零的礦石不列入
    pub lines: Vec<PurchaseLine>,

    /// 總成本（各項成本加總）
    pub total_cost: Decimal,

    /// 連續鬆弛最佳解的目標值（批量取整前的成本下界）
    pub lp_cost: f64,
}

impl PurchasePlan {
    /// 創建空計劃（無任何正目標時的最佳解）
    pub fn empty() -> Self {
        Self::default()
    }

    /// 是否未選購任何礦石
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for PurchasePlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{} {}", line.name, format_quantity(line.quantity))?;
        }
        Ok(())
    }
}

/// 以千分位逗號格式化整數數量
pub fn format_quantity(quantity: u64) -> String {
    let digits = quantity.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 以千分位逗號、兩位小數格式化金額
pub fn format_isk(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{rounded:.2}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let (sign, int_digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut out = String::from(sign);
    for (i, ch) in int_digits.chars().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('.');
    out.push_str(frac_part);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0")]
    #[case(100, "100")]
    #[case(1_000, "1,000")]
    #[case(1_234_500, "1,234,500")]
    fn test_format_quantity(#[case] quantity: u64, #[case] expected: &str) {
        assert_eq!(format_quantity(quantity), expected);
    }

    #[rstest]
    #[case("0", "0.00")]
    #[case("1234.5", "1,234.50")]
    #[case("9876543.219", "9,876,543.22")]
    #[case("-1500", "-1,500.00")]
    fn test_format_isk(#[case] amount: &str, #[case] expected: &str) {
        assert_eq!(format_isk(amount.parse().unwrap()), expected);
    }

    #[test]
    fn test_display_lists_lines() {
        let plan = PurchasePlan {
            lines: vec![
                PurchaseLine {
                    type_id: 62516,
                    name: "Compressed Veldspar".to_string(),
                    quantity: 1_200,
                    line_cost: Decimal::from(15_000),
                },
                PurchaseLine {
                    type_id: 62520,
                    name: "Compressed Scordite".to_string(),
                    quantity: 100,
                    line_cost: Decimal::from(1_400),
                },
            ],
            total_cost: Decimal::from(16_400),
            lp_cost: 16_000.0,
        };

        let rendered = plan.to_string();
        assert_eq!(
            rendered,
            "Compressed Veldspar 1,200\nCompressed Scordite 100\n"
        );
    }

    #[test]
    fn test_empty_plan() {
        let plan = PurchasePlan::empty();
        assert!(plan.is_empty());
        assert_eq!(plan.total_cost, Decimal::ZERO);
        assert_eq!(plan.to_string(), "");
    }
}

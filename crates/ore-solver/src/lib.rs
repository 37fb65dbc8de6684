//! # Ore Solver
//!
//! 採購最佳化引擎：將礦石目錄、行情報價與礦物需求
//! 轉換為線性規劃問題，求解後離散化為可下單的採購計劃。

pub mod optimizer;
pub mod plan;

// Re-export 主要類型
pub use optimizer::OreOptimizer;
pub use plan::{PurchaseLine, PurchasePlan};

/// 最佳化結果
///
/// 無解（或求解器初始化失敗）是正常的可回報結果，不是錯誤路徑。
#[derive(Debug, Clone)]
pub enum PlanOutcome {
    /// 找到最佳解
    Optimal(PurchasePlan),

    /// 約束無法全部滿足
    Infeasible,
}

impl PlanOutcome {
    /// 是否無解
    pub fn is_infeasible(&self) -> bool {
        matches!(self, PlanOutcome::Infeasible)
    }

    /// 取出採購計劃（無解時為 None）
    pub fn into_plan(self) -> Option<PurchasePlan> {
        match self {
            PlanOutcome::Optimal(plan) => Some(plan),
            PlanOutcome::Infeasible => None,
        }
    }

    /// 借用採購計劃（無解時為 None）
    pub fn as_plan(&self) -> Option<&PurchasePlan> {
        match self {
            PlanOutcome::Optimal(plan) => Some(plan),
            PlanOutcome::Infeasible => None,
        }
    }
}

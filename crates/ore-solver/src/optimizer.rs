//! 線性規劃建模與求解

use good_lp::{constraint, default_solver, variable, variables, Expression, Solution, SolverModel};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, info};

use ore_core::{MineralRequirements, OreCatalog, PlanConfig, PriceTable};

use crate::plan::{PurchaseLine, PurchasePlan};
use crate::PlanOutcome;

/// 求解值低於此門檻視為未選購（單純形基底的數值雜訊）
const SELECTION_TOLERANCE: f64 = 1e-6;

/// 採購最佳化引擎
///
/// 每個礦石一個非負連續決策變數（原始單位數量），
/// 目標為最小化 Σ 單價 × 數量，約束為每種有正目標的礦物
/// Σ 每單位產出 × 效率 × 數量 ≥ 目標量。
/// 無報價的礦石變數釘在 [0, 0]：缺少成本訊號不等於免費。
pub struct OreOptimizer<'a> {
    catalog: &'a OreCatalog,
    prices: &'a PriceTable,
    config: PlanConfig,
}

impl<'a> OreOptimizer<'a> {
    /// 創建最佳化引擎
    pub fn new(catalog: &'a OreCatalog, prices: &'a PriceTable, config: PlanConfig) -> Self {
        Self {
            catalog,
            prices,
            config,
        }
    }

    /// 求解並離散化為採購計劃
    ///
    /// 引擎本身不做任何 I/O；無解（含求解器失敗）回傳
    /// [`PlanOutcome::Infeasible`]，由呼叫端決定是否調整輸入重試。
    pub fn optimize(&self, requirements: &MineralRequirements) -> PlanOutcome {
        // 沒有任何正目標：空計劃即最佳解，不需動用求解器
        if requirements.is_empty() {
            return PlanOutcome::Optimal(PurchasePlan::empty());
        }

        // 目錄中沒有任何礦石能產出的礦物，約束必然無法滿足
        for (mineral, target) in requirements.positive_targets() {
            if !self.catalog.any_yields(mineral) {
                info!(%mineral, target, "目錄中無礦石可產出此礦物，無解");
                return PlanOutcome::Infeasible;
            }
        }

        let mut vars = variables!();
        let mut objective: Expression = 0.into();
        let mut ore_vars = Vec::with_capacity(self.catalog.len());

        for ore in self.catalog.iter() {
            let price = self
                .prices
                .get(ore.type_id)
                .and_then(|p| Some((p, p.to_f64()?)));
            let var = match price {
                Some((_, unit_price)) => {
                    let var = vars.add(variable().min(0.0));
                    objective += var * unit_price;
                    var
                }
                // 無報價：釘零，禁止被當作零成本來源
                None => vars.add(variable().min(0.0).max(0.0)),
            };
            ore_vars.push((ore, price, var));
        }

        let mut constraints = Vec::new();
        for (mineral, target) in requirements.positive_targets() {
            let mut supplied: Expression = 0.into();
            for (ore, _, var) in &ore_vars {
                let unit_yield = ore.yield_of(mineral);
                if unit_yield > 0 {
                    supplied += *var * (unit_yield as f64 * self.config.efficiency);
                }
            }
            constraints.push(constraint!(supplied >= target as f64));
        }

        debug!(
            ores = ore_vars.len(),
            constraints = constraints.len(),
            efficiency = self.config.efficiency,
            "開始求解"
        );

        let solution = match vars
            .minimise(objective)
            .using(default_solver)
            .with_all(constraints)
            .solve()
        {
            Ok(solution) => solution,
            Err(error) => {
                info!(%error, "求解器未找到可行解");
                return PlanOutcome::Infeasible;
            }
        };

        PlanOutcome::Optimal(self.discretize(&ore_vars, &solution))
    }

    /// 將連續最佳解離散化：向上取整至批量倍數並計算各項成本
    fn discretize(
        &self,
        ore_vars: &[(&ore_core::OreType, Option<(Decimal, f64)>, good_lp::Variable)],
        solution: &impl Solution,
    ) -> PurchasePlan {
        let batch = self.config.batch_size;
        let mut lines = Vec::new();
        let mut total_cost = Decimal::ZERO;
        let mut lp_cost = 0.0;

        for (ore, price, var) in ore_vars {
            let value = solution.value(*var);
            // 無報價的變數已釘零，value 必為 0
            let Some((unit_price, unit_price_f64)) = *price else {
                continue;
            };
            lp_cost += unit_price_f64 * value;
            if value <= SELECTION_TOLERANCE {
                continue;
            }

            let batches = (value / batch as f64).ceil() as u64;
            let quantity = batches * batch;
            let line_cost = Decimal::from(quantity) * unit_price;
            total_cost += line_cost;
            lines.push(PurchaseLine {
                type_id: ore.type_id,
                name: ore.name.clone(),
                quantity,
                line_cost,
            });
        }

        PurchasePlan {
            lines,
            total_cost,
            lp_cost,
        }
    }
}

//! 壓縮礦石採購最佳化 CLI
//!
//! 載入參考資料、讀取礦物需求、取得即時行情，
//! 交給最佳化引擎後輸出採購清單與總成本。

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use ore_core::{MineralRequirements, OreCatalog, PlanConfig};
use ore_market::{FuzzworkClient, DEFAULT_STATION_ID};
use ore_solver::{plan::format_isk, OreOptimizer, PlanOutcome};

#[derive(Debug, Parser)]
#[command(name = "oreplan", about = "計算滿足礦物需求的最低成本壓縮礦石採購組合")]
struct Args {
    /// 精煉產出表 CSV（typeID, materialTypeID, quantity）
    #[arg(long, default_value = "data/refine_materials.csv")]
    materials: PathBuf,

    /// 類型元資料表 CSV（typeID, typeName, volume）
    #[arg(long, default_value = "data/inv_types.csv")]
    types: PathBuf,

    /// 行情交易站 ID（預設 Jita IV-4 CNAP）
    #[arg(long, default_value_t = DEFAULT_STATION_ID)]
    station: u64,

    /// 精煉效率，(0, 1] 區間
    #[arg(long, default_value_t = ore_core::config::DEFAULT_EFFICIENCY)]
    efficiency: f64,

    /// 需求文字檔，每列 `<礦物名稱> <數量>`；省略時讀取標準輸入
    requirements: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = PlanConfig::new(args.efficiency).context("無效的精煉效率")?;

    let catalog = OreCatalog::load_csv(&args.materials, &args.types).context("載入礦石目錄失敗")?;
    info!(ores = catalog.len(), "礦石目錄就緒");

    let requirement_text = match &args.requirements {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("讀取需求檔失敗: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("讀取標準輸入失敗")?;
            buffer
        }
    };
    let requirements = MineralRequirements::parse(&requirement_text);
    if requirements.is_empty() {
        warn!("沒有解析到任何正的礦物需求，結果將是空計劃");
    }

    let client = FuzzworkClient::new().context("建立行情客戶端失敗")?;
    let prices = client
        .fetch_prices(args.station, &catalog.type_ids())
        .context("取得行情失敗")?;
    info!(priced = prices.len(), "行情就緒");

    let optimizer = OreOptimizer::new(&catalog, &prices, config);
    match optimizer.optimize(&requirements) {
        PlanOutcome::Optimal(plan) => {
            print!("{plan}");
            println!("Total Cost: {} ISK", format_isk(plan.total_cost));
            Ok(())
        }
        PlanOutcome::Infeasible => {
            eprintln!("找不到可行解：目前的目錄與行情無法滿足全部礦物需求。");
            std::process::exit(1);
        }
    }
}

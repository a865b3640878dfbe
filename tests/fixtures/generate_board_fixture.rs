// ==========================================
// 看板示例数据生成器
// ==========================================
// 用途: 生成一份看板 JSON 快照与 Design 阶段 CSV,
//       供前端联调/演示使用
// 用法: cargo run --bin generate_board_fixture [输出目录]
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use jewelry_production_board::domain::stage::PIPELINE_STAGES;
use jewelry_production_board::engine::{
    BoardRefreshService, CsvExporter, ItemQuery, MockStageDataProvider, StageFilterSort,
};
use jewelry_production_board::domain::types::SortOrder;
use jewelry_production_board::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let out_dir: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fixtures_out"));
    std::fs::create_dir_all(&out_dir)?;

    // 六个命名阶段 + 一个自定义阶段
    let mut stages: Vec<_> = PIPELINE_STAGES
        .iter()
        .filter_map(|s| jewelry_production_board::StageKey::parse(s))
        .collect();
    stages.push(jewelry_production_board::StageKey::parse("engraving").unwrap());

    let provider = Arc::new(MockStageDataProvider::with_latency_ms(0));
    let service = BoardRefreshService::new(provider);
    let today = Utc::now().date_naive();

    let board = service
        .refresh(stages, None, today)
        .await
        .map_err(|e| anyhow::anyhow!("看板生成失败: {}", e))?;

    // 看板 JSON 快照
    let board_path = out_dir.join("pipeline_board.json");
    std::fs::write(&board_path, serde_json::to_string_pretty(&*board)?)?;
    tracing::info!(path = %board_path.display(), "看板快照已写出");

    // Design 阶段 CSV
    let design = jewelry_production_board::StageKey::parse("design").unwrap();
    if let Some(lane) = board.lane(&design) {
        let items = StageFilterSort::new().apply(
            &lane.items,
            &ItemQuery::default(),
            today,
            SortOrder::Oldest,
        );
        let csv_path = CsvExporter::new().write_to_dir(&out_dir, "Design", &items)?;
        tracing::info!(path = %csv_path.display(), "CSV 样例已写出");
    }

    Ok(())
}

// ==========================================
// 珠宝生产流水线工作台 - 主入口
// ==========================================
// 技术栈: Tauri (特性 tauri-app) + Rust
// 无特性时为无头模式: 打印使用说明后退出
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri-app")]
fn main() {
    use jewelry_production_board::app::tauri_commands::*;
    use jewelry_production_board::app::AppState;

    // 初始化日志系统
    jewelry_production_board::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", jewelry_production_board::APP_NAME);
    tracing::info!("系统版本: {}", jewelry_production_board::VERSION);
    tracing::info!("==================================================");

    // 创建AppState
    tracing::info!("正在初始化AppState...");
    let app_state = AppState::new();
    tracing::info!("AppState初始化成功, 启动Tauri应用...");

    // 启动Tauri应用
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 看板相关命令 (5个)
            // ==========================================
            regenerate_pipeline_board,
            get_stage_catalog,
            get_stage_summary,
            query_stage_items,
            export_stage_csv,

            // ==========================================
            // 设置相关命令 (2个)
            // ==========================================
            set_app_locale,
            get_app_settings,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用失败");

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    println!("==================================================");
    println!("{}", jewelry_production_board::APP_NAME);
    println!("系统版本: {}", jewelry_production_board::VERSION);
    println!("==================================================");
    println!();
    println!("此可执行文件需要启用 tauri-app 特性");
    println!("使用: cargo run --features tauri-app");
    println!();
    println!("或者使用库模式:");
    println!("use jewelry_production_board::app::AppState;");
}

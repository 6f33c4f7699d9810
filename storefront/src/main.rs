use anyhow::Context;
use storefront::tui::{self, App};
use storefront::{Catalog, Storefront, init_logger, setup_environment};
use tokio::sync::mpsc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. 环境与配置 (.env + 环境变量)
    let config = setup_environment().context("invalid configuration")?;

    // 2. 日志 (活动面板 + 可选文件)
    init_logger(&config);

    // 3. 菜单
    let catalog = Catalog::from_config(config.menu_file.as_deref())
        .context("failed to load menu")?;
    tracing::info!(items = catalog.len(), "Menu loaded");

    // 4. 会话 + 界面
    let (feedback_tx, mut feedback_rx) = mpsc::unbounded_channel();
    let store = Storefront::from_config(&config, catalog, feedback_tx);
    let mut app = App::new(store, &config);

    tui::run(&mut app, &mut feedback_rx).await?;

    tracing::info!("Storefront closed");
    Ok(())
}

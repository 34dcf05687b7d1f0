use anyhow::Context;
use bookshelf_kernel::settings::Settings;
use bookshelf_kernel::InitCtx;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;
    bookshelf_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        "bookshelf-app bootstrap starting"
    );

    let registry = bookshelf_app::build_registry();

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    tracing::info!("bookshelf-app bootstrap complete");

    bookshelf_http::start_server(&registry, &settings).await?;

    registry.stop_all().await
}

use anyhow::Context;
use clap::{Parser, Subcommand};

use bookshelf_kernel::settings::Settings;
use bookshelf_kernel::InitCtx;

#[derive(Parser)]
#[command(name = "bookshelf", about = "Bookshelf service command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve,
    /// Print the merged OpenAPI document as JSON
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            bookshelf_telemetry::init(&settings.telemetry);

            let registry = bookshelf_app::build_registry();

            let ctx = InitCtx {
                settings: &settings,
            };
            registry.init_all(&ctx).await?;
            registry.start_all(&ctx).await?;

            bookshelf_http::start_server(&registry, &settings).await?;

            registry.stop_all().await
        }
        Command::Openapi => {
            let registry = bookshelf_app::build_registry();
            let doc = bookshelf_http::router::build_openapi_document(&registry);
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
    }
}

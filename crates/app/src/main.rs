mod app;
mod config;
mod error;
mod ui;

use crate::error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "agrocredito={level},forms={level}",
            level = config.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let mut app = app::App::new(config)?;
    app.run().await?;
    Ok(())
}

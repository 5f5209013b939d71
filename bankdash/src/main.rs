use anyhow::Result;

use bankdash::config::Settings;
use bankdash::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    settings.validate().map_err(anyhow::Error::msg)?;

    // Logging is initialized in App::run() so nothing reaches the terminal
    App::new(settings).run().await?;

    Ok(())
}

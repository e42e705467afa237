use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use skycast_core::Config;
use skycast_weather::{Locator, WeatherProvider};
use skycast_widget::WeatherWidget;

mod console;

use console::ConsoleView;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    skycast_core::init()?;

    let (config, _validation) = Config::load_validated()?;
    tracing::info!("Skycast started");

    let locator = Locator::from_config(&config.location)?;
    let provider = WeatherProvider::new(
        config.weather.base_url.clone(),
        config.weather.api_key.clone(),
    )?;

    let mut widget = WeatherWidget::new(locator, provider);
    let mut view = ConsoleView::default();

    // Initial refresh on startup, like loading the page
    widget.refresh(&mut view).await;

    println!("\n[r] refresh  [u] {}  [q] quit", widget.unit().toggle_label());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "r" => widget.refresh(&mut view).await,
            "u" => widget.toggle_unit(&mut view),
            "q" => break,
            "" => {}
            other => println!("Unknown command: {}", other),
        }
    }

    tracing::info!("Skycast shutting down");
    Ok(())
}

use anyhow::Result;

fn main() -> Result<()> {
    // Initialize core
    skycast_core::init()?;

    // Wire the dashboard against the configured forecast service
    let config = skycast_core::ClientConfig::load()?;
    let client = skycast_weather::WeatherClient::new(&config)?;
    let dashboard = skycast_session::Dashboard::new(client, config.history_limit);

    tracing::info!("Skycast application started");

    println!("Skycast - Weather Dashboard Core");
    println!("Architecture initialized successfully!");
    println!("\nConfiguration:");
    println!("  Forecast service: {}", config.base_url);
    println!("  History limit: {}", config.history_limit);
    println!("  Language: {}", dashboard.session().language.lang_code());

    Ok(())
}

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use openweather_core::{Config, NetworkingError, RawWeatherResponse, WeatherClient, WeatherModel};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "openweather", version, about = "Current weather for a city or your coordinates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city name.
    City {
        /// City name, e.g. "Kyiv" or "New York".
        name: String,
    },

    /// Show current weather for a latitude/longitude pair.
    Coords {
        /// Latitude in degrees, -90 to 90.
        latitude: f64,

        /// Longitude in degrees, -180 to 180.
        longitude: f64,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::City { name } => {
                let client = client_from_config()?;
                render(client.fetch_by_city(&name).await)
            }
            Command::Coords { latitude, longitude } => {
                let client = client_from_config()?;
                render(client.fetch_by_coordinates(latitude, longitude).await)
            }
        }
    }
}

fn client_from_config() -> Result<WeatherClient> {
    let config = Config::load()?;
    let api_key = config.api_key()?.to_string();

    Ok(WeatherClient::with_base_url(api_key, config.base_url))
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Text::new("OpenWeather API key:").prompt()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn render(result: Result<RawWeatherResponse, NetworkingError>) -> Result<()> {
    let raw = result.map_err(|err| anyhow!(user_message(err)))?;
    let weather = WeatherModel::from(&raw);

    println!("City: {}", weather.city_name);
    println!("Temperature: {}", weather.temperature);
    println!("Description: {}", weather.description);
    println!("Feels Like: {}", weather.feels_like);
    println!("Pressure: {}", weather.pressure);
    println!("Humidity: {}", weather.humidity);
    println!("Visibility: {}", weather.visibility);
    println!("Wind Speed: {}", weather.wind_speed);
    println!("Wind Direction: {}", weather.wind_direction);
    println!("Background: {}", weather.background.asset_key());

    Ok(())
}

const fn user_message(err: NetworkingError) -> &'static str {
    match err {
        NetworkingError::BadUrl => "We can't find this city",
        NetworkingError::BadParsing => "Try again, please",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn error_kinds_map_to_user_messages() {
        assert_eq!(user_message(NetworkingError::BadUrl), "We can't find this city");
        assert_eq!(user_message(NetworkingError::BadParsing), "Try again, please");
    }

    #[test]
    fn coords_parse_as_floats() {
        let cli = Cli::try_parse_from(["openweather", "coords", "50.45", "30.52"])
            .expect("coords must parse");

        match cli.command {
            Command::Coords { latitude, longitude } => {
                assert_eq!(latitude, 50.45);
                assert_eq!(longitude, 30.52);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn negative_coordinates_parse() {
        let cli = Cli::try_parse_from(["openweather", "coords", "--", "-33.87", "151.21"])
            .expect("negative latitude must parse");

        match cli.command {
            Command::Coords { latitude, longitude } => {
                assert_eq!(latitude, -33.87);
                assert_eq!(longitude, 151.21);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

//! End-to-end check of the decode → transform pipeline against a realistic
//! provider payload, independent of any network transport.

use openweather_core::{BackgroundImage, RawWeatherResponse, WeatherModel};

const LONDON_DRIZZLE: &str = r#"{
    "coord": {"lon": -0.1257, "lat": 51.5085},
    "weather": [{"id": 300, "main": "Drizzle", "description": "light intensity drizzle", "icon": "09d"}],
    "base": "stations",
    "main": {"temp": 7.17, "feels_like": 4.9, "temp_min": 6.11, "temp_max": 8.33, "pressure": 1012, "humidity": 81},
    "visibility": 10000,
    "wind": {"speed": 4.1, "deg": 80},
    "clouds": {"all": 90},
    "dt": 1485789600,
    "sys": {"type": 1, "id": 5091, "country": "GB", "sunrise": 1485762037, "sunset": 1485794875},
    "id": 2643743,
    "name": "London",
    "cod": 200
}"#;

#[test]
fn real_payload_decodes_and_transforms() {
    let raw: RawWeatherResponse =
        serde_json::from_str(LONDON_DRIZZLE).expect("provider payload must decode");

    let model = WeatherModel::from(&raw);

    assert_eq!(model.city_name, "London");
    assert_eq!(model.temperature, "7.2°C");
    assert_eq!(model.description, "Light intensity drizzle");
    assert_eq!(model.feels_like, "4.9°C");
    assert_eq!(model.pressure, "1012hPa");
    assert_eq!(model.humidity, "81%");
    assert_eq!(model.visibility, "10000m");
    assert_eq!(model.wind_speed, "4.1m/s");
    assert_eq!(model.wind_direction, "E");
    assert_eq!(model.background, BackgroundImage::Rain);
}

#[test]
fn extra_provider_fields_are_ignored() {
    // The wire types keep only what the model needs; the rest of the
    // provider schema (coord, sys, clouds, ...) must not break decoding.
    let raw: RawWeatherResponse = serde_json::from_str(LONDON_DRIZZLE).expect("must decode");
    assert_eq!(raw.visibility, Some(10000));
    assert_eq!(raw.weather.first().map(|c| c.id), Some(300));
}

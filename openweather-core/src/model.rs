use serde::Deserialize;

/// Wire payload of the OpenWeather current-weather endpoint.
///
/// Required fields are strict: a body missing the city name, the `main`
/// block, or the wind record fails decoding instead of defaulting.
/// `visibility` is the one field the provider may legitimately omit.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWeatherResponse {
    pub name: String,
    pub main: RawMain,
    pub weather: Vec<RawCondition>,
    pub wind: RawWind,
    pub visibility: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMain {
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: u32,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    pub id: u32,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWind {
    pub speed: f64,
    pub deg: f64,
}

/// Shown when the provider omits the optional visibility field.
pub const VISIBILITY_PLACEHOLDER: &str = "N/A";

/// Presentation-ready weather values, every field already formatted for
/// display. Built fresh from each successful fetch and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherModel {
    pub city_name: String,
    pub temperature: String,
    pub description: String,
    pub feels_like: String,
    pub pressure: String,
    pub humidity: String,
    pub visibility: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub background: BackgroundImage,
}

impl From<&RawWeatherResponse> for WeatherModel {
    fn from(raw: &RawWeatherResponse) -> Self {
        // The provider contract says `weather` is never empty; if it ever is,
        // fall back rather than fail, since this mapping must be total.
        let condition = raw.weather.first();
        let description = condition.map_or("unknown", |c| c.description.as_str());
        let condition_id = condition.map_or(800, |c| c.id);

        Self {
            city_name: raw.name.clone(),
            temperature: format!("{:.1}°C", raw.main.temp),
            description: capitalize(description),
            feels_like: format!("{:.1}°C", raw.main.feels_like),
            pressure: format!("{}hPa", raw.main.pressure),
            humidity: format!("{}%", raw.main.humidity),
            visibility: raw
                .visibility
                .map_or_else(|| VISIBILITY_PLACEHOLDER.to_string(), |v| format!("{v}m")),
            wind_speed: format!("{:.1}m/s", raw.wind.speed),
            wind_direction: compass_label(raw.wind.deg).to_string(),
            background: BackgroundImage::from_condition_code(condition_id),
        }
    }
}

const COMPASS_LABELS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Map a wind bearing (degrees clockwise from true north) to the nearest of
/// the 16 compass points. Sectors are 22.5° wide and centered on each label,
/// so 0°/360° are both "N" and 11.25° is the first bearing that reads "NNE".
pub fn compass_label(bearing: f64) -> &'static str {
    let normalized = bearing.rem_euclid(360.0);
    let index = ((normalized / 22.5) + 0.5).floor() as usize % 16;
    COMPASS_LABELS[index]
}

/// Background asset selected from the provider's condition code. The
/// presentation layer resolves the key to an actual image; this stays a pure
/// code-to-identifier mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundImage {
    Thunderstorm,
    Rain,
    Snow,
    Mist,
    Clear,
    Clouds,
}

impl BackgroundImage {
    /// Bucket an OpenWeather condition code. 800 is clear sky; codes outside
    /// every documented range also read as clear, the app's default backdrop.
    pub const fn from_condition_code(code: u32) -> Self {
        match code {
            200..=299 => Self::Thunderstorm,
            300..=599 => Self::Rain,
            600..=699 => Self::Snow,
            700..=799 => Self::Mist,
            801..=804 => Self::Clouds,
            _ => Self::Clear,
        }
    }

    pub const fn asset_key(self) -> &'static str {
        match self {
            Self::Thunderstorm => "thunderstorm",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Mist => "mist",
            Self::Clear => "clear",
            Self::Clouds => "clouds",
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

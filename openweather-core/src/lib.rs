//! Core library for the `openweather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The HTTP client for the OpenWeather current-weather endpoint
//! - The wire payload and the presentation-ready weather model
//!
//! It is used by `openweather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod model;

pub use client::{NetworkingError, WeatherClient};
pub use config::Config;
pub use model::{BackgroundImage, RawWeatherResponse, WeatherModel};

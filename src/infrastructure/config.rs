// Configuration - server settings and the static widgets table
use crate::domain::records::MetricKey;
use crate::domain::view_model::{DisplayCategory, SeriesField};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub hotel: HotelSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HotelSettings {
    pub name: String,
}

/// Static tile and chart-legend tables. The mapping from metric/field to
/// label, accent and color is configuration, never inferred from the data.
#[derive(Debug, Deserialize, Clone)]
pub struct WidgetsConfig {
    #[serde(default)]
    pub tiles: Vec<TileConfig>,
    #[serde(default)]
    pub series: Vec<SeriesConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TileConfig {
    pub id: String,
    pub title: String,
    pub metric: MetricKey,
    pub accent: DisplayCategory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeriesConfig {
    pub field: SeriesField,
    pub name: String,
    pub color: String,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        let tile = |id: &str, title: &str, metric, accent| TileConfig {
            id: id.to_string(),
            title: title.to_string(),
            metric,
            accent,
        };
        let series = |field, name: &str, color: &str| SeriesConfig {
            field,
            name: name.to_string(),
            color: color.to_string(),
        };

        Self {
            tiles: vec![
                tile(
                    "vacancy",
                    "Total Vacancy",
                    MetricKey::Vacancy,
                    DisplayCategory::Informational,
                ),
                tile(
                    "booked",
                    "Total Booked",
                    MetricKey::Booked,
                    DisplayCategory::Positive,
                ),
                tile(
                    "pending_checkout",
                    "Pending Check-outs",
                    MetricKey::PendingCheckout,
                    DisplayCategory::Warning,
                ),
                tile(
                    "guests",
                    "Total Guests",
                    MetricKey::Guests,
                    DisplayCategory::Default,
                ),
            ],
            series: vec![
                series(SeriesField::Bookings, "Bookings", "#2563eb"),
                series(SeriesField::Expenditure, "Expenditure", "#16a34a"),
                series(SeriesField::Food, "Food Bookings", "#f59e0b"),
            ],
        }
    }
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_widgets_config() -> anyhow::Result<WidgetsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/widgets"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

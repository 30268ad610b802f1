use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level station API response. Only the first observation is ever used;
/// the API returns the latest reading first.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub observations: Vec<Observation>,
}

/// One station reading. Read-only after parsing; unknown response fields
/// (neighborhood, solar radiation, pressure, ...) are ignored since they are
/// never displayed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    #[serde(rename = "stationID")]
    pub station_id: String,
    pub obs_time_local: String,
    pub humidity: u8,
    pub winddir: u16,
    pub imperial: Imperial,
}

/// Imperial measurement block; the API reports these as whole numbers when
/// queried with `units=e`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Imperial {
    pub temp: i32,
    pub heat_index: i32,
    pub dewpt: i32,
    pub wind_chill: i32,
    pub wind_speed: u32,
    pub wind_gust: u32,
}

impl Observation {
    /// Parse a raw response body and take the first observation. An empty
    /// `observations` array means no current reading exists; that must never
    /// fall through to rendering a zero-valued record.
    pub fn from_json(body: &str) -> Result<Self> {
        let conditions: CurrentConditions = serde_json::from_str(body)?;
        conditions
            .observations
            .into_iter()
            .next()
            .ok_or(Error::NoObservations)
    }
}

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::Result;
use crate::model::Observation;
use crate::station::ObservationSource;

/// 22°-arc compass labels indexed by `degrees / 22`. 359 / 22 = 16, so the
/// table carries a duplicate "N" at index 16; shrinking it to 16 entries
/// would panic on readings just shy of due north.
const COMPASS_POINTS: [&str; 17] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW", "N",
];

/// Whole-degree conversion with truncating division, matching the integer
/// arithmetic of the station display this tool reproduces: 98°F is 36°C,
/// not 37.
pub fn fahrenheit_to_celsius(fahrenheit: i32) -> i32 {
    ((fahrenheit - 32) * 5) / 9
}

/// Compass label for a wind direction in degrees. Clamped, so even an
/// out-of-contract reading above 359° maps to "N" instead of panicking.
pub fn compass_point(degrees: u16) -> &'static str {
    let index = usize::from(degrees / 22).min(COMPASS_POINTS.len() - 1);
    COMPASS_POINTS[index]
}

/// Color band for a temperature-like value. Exactly 60°F and exactly 80°F
/// fall into Cold; the bounds are strict on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempBand {
    Hot,
    Moderate,
    Cold,
}

impl TempBand {
    pub fn of(fahrenheit: i32) -> Self {
        if fahrenheit > 80 {
            TempBand::Hot
        } else if (61..80).contains(&fahrenheit) {
            TempBand::Moderate
        } else {
            TempBand::Cold
        }
    }
}

fn band_colored(value: String, band: TempBand) -> String {
    match band {
        TempBand::Hot => value.red().to_string(),
        TempBand::Moderate => value.green().to_string(),
        TempBand::Cold => value.bright_blue().to_string(),
    }
}

fn temp_with_celsius(fahrenheit: i32) -> String {
    format!("{fahrenheit}°F ({}°C)", fahrenheit_to_celsius(fahrenheit))
}

/// Render one observation as the six-line colorized report.
///
/// "Feels Like" always shows wind chill. The station display this follows
/// has a revision that switches to heat index above 70°F; that variant is
/// deliberately not implemented here.
pub fn render(observation: &Observation) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}{}{}{}{}\n",
        "Current Conditions for ".cyan(),
        observation.station_id.yellow(),
        " at ".cyan(),
        observation.obs_time_local.yellow(),
        " are:".cyan(),
    ));

    let temp = observation.imperial.temp;
    out.push_str(&format!(
        "{}{}\n",
        "Current:    ".cyan(),
        band_colored(temp_with_celsius(temp), TempBand::of(temp)),
    ));

    let feels_like = observation.imperial.wind_chill;
    out.push_str(&format!(
        "{}{}\n",
        "Feels Like: ".cyan(),
        band_colored(temp_with_celsius(feels_like), TempBand::of(feels_like)),
    ));

    out.push_str(&format!(
        "{}{}\n",
        "Dew Point:  ".cyan(),
        temp_with_celsius(observation.imperial.dewpt).green(),
    ));

    out.push_str(&format!(
        "{}{}\n",
        "Humidity:   ".cyan(),
        format!("{}%", observation.humidity).green(),
    ));

    out.push_str(&format!(
        "{}{}\n",
        "Wind:       ".cyan(),
        format!(
            "{}({}°) @ {}-{} mph",
            compass_point(observation.winddir),
            observation.winddir,
            observation.imperial.wind_speed,
            observation.imperial.wind_gust,
        )
        .green(),
    ));

    out
}

/// One full fetch-and-display cycle, minus the actual printing: validate the
/// configuration, fetch the raw body, parse the first observation, render.
///
/// Validation runs before the source is touched, so a bad config never costs
/// a network round trip.
pub async fn current_report(
    config: &Config,
    source: &impl ObservationSource,
) -> Result<String> {
    config.validate()?;
    let body = source.fetch_current().await?;
    let observation = Observation::from_json(&body)?;
    Ok(render(&observation))
}

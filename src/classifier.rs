//! AQI severity classification and health-insight text.
//!
//! Classification and insight selection both consult the single [`BANDS`]
//! table, so a boundary value always lands in the same band for both.

use serde::{Deserialize, Serialize};

// ---

/// AQI severity category, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// One row of the band table. `upper` is the inclusive upper bound.
#[derive(Debug)]
pub struct Band {
    // ---
    pub upper: i64,
    pub category: Category,
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    /// Insight text with `{city}` and `{aqi}` placeholders.
    pub template: &'static str,
}

/// Ordered by `upper`; the last row is open-ended.
pub static BANDS: [Band; 6] = [
    Band {
        upper: 50,
        category: Category::Good,
        label: "Good",
        description: "Air quality is satisfactory, and air pollution poses little or no risk.",
        color: "green",
        template: "The air quality in {city} is good with an AQI of {aqi}. It's a great day for \
                   outdoor activities. Enjoy the fresh air and consider walking or cycling instead \
                   of driving to help maintain good air quality.",
    },
    Band {
        upper: 100,
        category: Category::Moderate,
        label: "Moderate",
        description: "Air quality is acceptable. However, there may be a risk for some people, \
                      particularly those who are unusually sensitive to air pollution.",
        color: "yellow",
        template: "Air quality in {city} is moderate (AQI: {aqi}). Most people can continue \
                   outdoor activities, but those with respiratory issues like asthma should \
                   consider limiting prolonged outdoor exertion. Stay hydrated and take breaks if \
                   needed.",
    },
    Band {
        upper: 150,
        category: Category::UnhealthySensitive,
        label: "Unhealthy for Sensitive Groups",
        description: "Members of sensitive groups may experience health effects. The general \
                      public is less likely to be affected.",
        color: "orange",
        template: "{city}'s air quality is unhealthy for sensitive groups (AQI: {aqi}). People \
                   with respiratory or heart conditions, the elderly, and children should limit \
                   prolonged outdoor activities. Consider wearing a mask if you need to be outside \
                   for extended periods. Keep windows closed during peak pollution hours.",
    },
    Band {
        upper: 200,
        category: Category::Unhealthy,
        label: "Unhealthy",
        description: "Some members of the general public may experience health effects; members \
                      of sensitive groups may experience more serious health effects.",
        color: "red",
        template: "Air quality in {city} is unhealthy (AQI: {aqi}). Everyone may begin to \
                   experience health effects. Sensitive groups should avoid outdoor physical \
                   activities. Consider using air purifiers indoors and keep windows closed. If \
                   you must go outside, wear a proper mask and limit your exposure time.",
    },
    Band {
        upper: 300,
        category: Category::VeryUnhealthy,
        label: "Very Unhealthy",
        description: "Health alert: The risk of health effects is increased for everyone.",
        color: "purple",
        template: "{city} is experiencing very unhealthy air quality (AQI: {aqi}). Health \
                   warnings of emergency conditions. Everyone should avoid outdoor activities. Use \
                   air purifiers indoors, wear masks when going outside, and consider staying \
                   indoors as much as possible. Check on elderly neighbors and those with \
                   respiratory conditions.",
    },
    Band {
        upper: i64::MAX,
        category: Category::Hazardous,
        label: "Hazardous",
        description: "Health warning of emergency conditions: everyone is more likely to be \
                      affected.",
        color: "maroon",
        template: "HEALTH ALERT: Air quality in {city} is hazardous (AQI: {aqi}). Everyone may \
                   experience more serious health effects. Avoid all outdoor physical activities. \
                   Stay indoors with windows closed and use air purifiers. Wear N95 masks if you \
                   must go outside. Consider temporarily relocating if possible, especially for \
                   vulnerable individuals.",
    },
];

/// Find the band containing `aqi`. Values at or below zero fall in the first band.
pub fn band_for(aqi: i64) -> &'static Band {
    // ---
    BANDS
        .iter()
        .find(|band| aqi <= band.upper)
        .unwrap_or(&BANDS[BANDS.len() - 1])
}

/// Map any AQI value to its severity category.
pub fn classify(aqi: i64) -> Category {
    band_for(aqi).category
}

/// Health advice for `city_name` at the given AQI, chosen by the same bands as [`classify`].
///
/// The city name and AQI are interpolated verbatim.
pub fn insight_text(city_name: &str, aqi: i64) -> String {
    // ---
    band_for(aqi)
        .template
        .replace("{city}", city_name)
        .replace("{aqi}", &aqi.to_string())
}

impl Category {
    // ---
    fn band(&self) -> &'static Band {
        // ---
        BANDS
            .iter()
            .find(|band| band.category == *self)
            .unwrap_or(&BANDS[BANDS.len() - 1])
    }

    pub fn label(&self) -> &'static str {
        self.band().label
    }

    pub fn description(&self) -> &'static str {
        self.band().description
    }

    /// Severity colour token for display.
    pub fn color(&self) -> &'static str {
        self.band().color
    }
}

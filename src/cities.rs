//! Fixed table of supported cities.

use serde::Serialize;

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City {
    pub value: &'static str,
    pub label: &'static str,
}

pub const CITIES: &[City] = &[
    City { value: "bangalore", label: "Bangalore" },
    City { value: "delhi", label: "Delhi" },
    City { value: "mumbai", label: "Mumbai" },
    City { value: "chennai", label: "Chennai" },
    City { value: "kolkata", label: "Kolkata" },
    City { value: "hyderabad", label: "Hyderabad" },
    City { value: "pune", label: "Pune" },
    City { value: "ahmedabad", label: "Ahmedabad" },
    City { value: "jaipur", label: "Jaipur" },
    City { value: "lucknow", label: "Lucknow" },
];

/// Display label for a city value; unknown values are returned unchanged.
pub fn label_for(value: &str) -> &str {
    // ---
    CITIES
        .iter()
        .find(|c| c.value == value)
        .map_or(value, |c| c.label)
}

/// First city in the table whose value differs from `value`.
pub fn first_other_than(value: &str) -> &'static str {
    // ---
    CITIES
        .iter()
        .find(|c| c.value != value)
        .map_or(CITIES[0].value, |c| c.value)
}

/// Capitalize the first character of a city value.
pub fn display_name(value: &str) -> String {
    // ---
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

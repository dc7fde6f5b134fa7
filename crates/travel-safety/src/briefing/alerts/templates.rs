use crate::briefing::knowledge::WeatherHazard;

pub(crate) const WEATHER_SOURCE: &str = "Regional Weather Service";
pub(crate) const ADVISORY_SOURCE: &str = "Travel Advisory Desk";
pub(crate) const INCIDENT_SOURCE: &str = "Local Incident Monitor";

/// Title/description pair; `{place}` is replaced with the city, or the country
/// when no city was given.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AlertTemplate {
    pub title: &'static str,
    pub description: &'static str,
}

impl AlertTemplate {
    pub fn render(&self, place: &str) -> (String, String) {
        (
            self.title.replace("{place}", place),
            self.description.replace("{place}", place),
        )
    }
}

pub(crate) fn seasonal_weather(hazard: WeatherHazard) -> Option<AlertTemplate> {
    let template = match hazard {
        WeatherHazard::Hurricane => AlertTemplate {
            title: "Tropical Storm Watch for {place}",
            description: "Hurricane season is active around {place}. Track official storm advisories and review evacuation options.",
        },
        WeatherHazard::Monsoon => AlertTemplate {
            title: "Monsoon Rains in {place}",
            description: "Heavy monsoon rainfall expected in {place}. Expect flooding, landslides and transport delays.",
        },
        WeatherHazard::Heat => AlertTemplate {
            title: "Extreme Heat Advisory for {place}",
            description: "Dangerously high temperatures forecast in {place}. Limit midday exposure and stay hydrated.",
        },
        WeatherHazard::Cold => AlertTemplate {
            title: "Severe Winter Conditions in {place}",
            description: "Freezing temperatures and snow expected in {place}. Roads and flights may be disrupted.",
        },
        WeatherHazard::Flood => return None,
    };
    Some(template)
}

pub(crate) const GENERIC_WEATHER: AlertTemplate = AlertTemplate {
    title: "Weather Alert for {place}",
    description: "Potential storms in {place} area. Stay informed about changing conditions.",
};

pub(crate) const CALM_WEATHER: AlertTemplate = AlertTemplate {
    title: "Weather Update for {place}",
    description: "No significant weather concerns for {place} at this time.",
};

pub(crate) const ADVISORY_TITLE: &str = "Travel Advisory for {place}";

pub(crate) const ADVISORY_HIGH: &str =
    "Exercise extreme caution when traveling to {place}; consider postponing non-essential travel.";

pub(crate) const ADVISORY_NORMAL: &str =
    "Exercise normal precautions when traveling to {place}.";

pub(crate) const ADVISORY_CAUTION_REASONS: &[&str] = &[
    "recent civil unrest",
    "elevated crime levels",
    "ongoing political tensions",
    "a heightened threat of terrorism",
];

pub(crate) fn advisory_caution(place: &str, reason: &str) -> String {
    format!("Exercise increased caution when traveling to {place} due to {reason}.")
}

pub(crate) const EXTREME_RISK: AlertTemplate = AlertTemplate {
    title: "Extreme Risk Warning",
    description: "Avoid all travel to {place}. Consular assistance may be severely limited or unavailable.",
};

pub(crate) const HIGH_CRIME_CITY: AlertTemplate = AlertTemplate {
    title: "High Crime Area: {place}",
    description: "{place} has high rates of violent crime. Avoid travelling after dark and stay in well-populated areas.",
};

pub(crate) const INCIDENTS: &[AlertTemplate] = &[
    AlertTemplate {
        title: "Protest Activity in {place}",
        description: "Demonstrations reported in central {place}. Avoid gatherings and follow local media.",
    },
    AlertTemplate {
        title: "Transport Disruption in {place}",
        description: "Public transport strikes are affecting services in {place}. Allow extra travel time.",
    },
    AlertTemplate {
        title: "Pickpocketing Surge in {place}",
        description: "Police report increased pickpocketing around tourist sites in {place}. Secure your belongings.",
    },
    AlertTemplate {
        title: "Road Closures near {place}",
        description: "Security operations have closed several roads around {place}. Check routes before travelling.",
    },
    AlertTemplate {
        title: "Power Outages in {place}",
        description: "Rolling power outages are affecting parts of {place}. Keep devices charged and carry a flashlight.",
    },
];

pub(crate) const MINOR_EVENT: AlertTemplate = AlertTemplate {
    title: "Minor Local Event in {place}",
    description: "Large public gathering scheduled. Expect increased crowds and possible traffic disruptions.",
};

use super::{CityTier, HazardWindow, KnowledgeBase, SeasonalWindow, WeatherHazard};

const COUNTRY_RISKS: &[(&str, f64)] = &[
    ("afghanistan", 0.9),
    ("syria", 0.9),
    ("yemen", 0.9),
    ("somalia", 0.9),
    ("south sudan", 0.85),
    ("sudan", 0.85),
    ("libya", 0.85),
    ("north korea", 0.85),
    ("iraq", 0.8),
    ("ukraine", 0.8),
    ("haiti", 0.8),
    ("mali", 0.8),
    ("venezuela", 0.75),
    ("nigeria", 0.7),
    ("pakistan", 0.7),
    ("russia", 0.7),
    ("myanmar", 0.65),
    ("mexico", 0.55),
    ("colombia", 0.55),
    ("south africa", 0.55),
    ("honduras", 0.55),
    ("brazil", 0.5),
    ("egypt", 0.5),
    ("kenya", 0.5),
    ("india", 0.45),
    ("turkey", 0.45),
    ("philippines", 0.45),
    ("bangladesh", 0.45),
    ("indonesia", 0.4),
    ("peru", 0.4),
    ("jamaica", 0.4),
    ("thailand", 0.35),
    ("china", 0.35),
    ("vietnam", 0.3),
    ("morocco", 0.3),
    ("united states", 0.3),
    ("usa", 0.3),
    ("france", 0.3),
    ("italy", 0.25),
    ("spain", 0.25),
    ("greece", 0.25),
    ("united arab emirates", 0.2),
    ("united kingdom", 0.2),
    ("germany", 0.2),
    ("south korea", 0.2),
    ("japan", 0.15),
    ("australia", 0.15),
    ("canada", 0.15),
    ("new zealand", 0.1),
    ("singapore", 0.1),
    ("switzerland", 0.1),
    ("norway", 0.1),
    ("denmark", 0.1),
    ("finland", 0.1),
    ("iceland", 0.05),
];

const REGION_MODIFIERS: &[(&str, f64)] = &[
    ("conflict zone", 0.3),
    ("favela", 0.2),
    ("border", 0.15),
    ("frontier", 0.15),
    ("jungle", 0.1),
    ("desert", 0.08),
    ("downtown", 0.05),
    ("rural", 0.05),
    ("mountain", 0.05),
    ("coastal", 0.03),
    ("countryside", -0.03),
    ("suburb", -0.05),
    ("tourist", -0.05),
    ("resort", -0.1),
];

const HURRICANE_BELT: &[&str] = &[
    "united states",
    "usa",
    "mexico",
    "cuba",
    "jamaica",
    "bahamas",
    "dominican republic",
    "haiti",
    "puerto rico",
    "belize",
    "honduras",
];

const MONSOON_BELT: &[&str] = &[
    "india",
    "bangladesh",
    "nepal",
    "sri lanka",
    "myanmar",
    "thailand",
    "vietnam",
    "philippines",
    "cambodia",
    "laos",
];

const TYPHOON_BELT: &[&str] = &[
    "philippines",
    "japan",
    "taiwan",
    "china",
    "vietnam",
    "south korea",
];

const HEAT_BELT: &[&str] = &[
    "egypt",
    "united arab emirates",
    "saudi arabia",
    "qatar",
    "kuwait",
    "iraq",
    "india",
    "pakistan",
];

const WINTER_BELT: &[&str] = &[
    "russia",
    "canada",
    "mongolia",
    "finland",
    "norway",
    "sweden",
    "iceland",
];

const CYCLONE_BELT: &[&str] = &["australia", "fiji", "vanuatu", "madagascar", "mozambique"];

const RIVER_FLOOD_BELT: &[&str] = &[
    "bangladesh",
    "india",
    "pakistan",
    "nepal",
    "china",
    "vietnam",
    "myanmar",
];

const WET_SEASON_FLOOD_BELT: &[&str] = &["indonesia", "australia", "mozambique", "madagascar"];

const HIGH_RISK_CITIES: &[&str] = &[
    "caracas",
    "san pedro sula",
    "tijuana",
    "acapulco",
    "ciudad juarez",
    "port moresby",
    "kabul",
    "mogadishu",
    "baghdad",
];

const MODERATE_RISK_CITIES: &[&str] = &[
    "rio de janeiro",
    "johannesburg",
    "cape town",
    "lagos",
    "karachi",
    "manila",
    "bogota",
    "mexico city",
    "nairobi",
    "medellin",
];

const EXTREME_RISK_COUNTRIES: &[&str] = &[
    "afghanistan",
    "syria",
    "yemen",
    "somalia",
    "south sudan",
    "libya",
    "north korea",
];

pub(super) fn standard_knowledge_base() -> KnowledgeBase {
    let mut base = KnowledgeBase::empty();

    for (country, risk) in COUNTRY_RISKS {
        base = base.with_country_risk(country, *risk);
    }
    for (keyword, modifier) in REGION_MODIFIERS {
        base = base.with_region_modifier(keyword, *modifier);
    }
    for window in standard_seasonal_windows() {
        base = base.with_seasonal_window(window);
    }
    for window in standard_hazard_windows() {
        base = base.with_hazard_window(window);
    }
    for city in HIGH_RISK_CITIES {
        base = base.with_city(CityTier::High, city);
    }
    for city in MODERATE_RISK_CITIES {
        base = base.with_city(CityTier::Moderate, city);
    }
    for country in EXTREME_RISK_COUNTRIES {
        base = base.with_extreme_risk_country(country);
    }

    base
}

fn standard_seasonal_windows() -> Vec<SeasonalWindow> {
    vec![
        SeasonalWindow::new("hurricane season", &[6, 7, 8, 9, 10, 11], HURRICANE_BELT, 0.1),
        SeasonalWindow::new("monsoon season", &[6, 7, 8, 9], MONSOON_BELT, 0.1),
        SeasonalWindow::new("typhoon season", &[7, 8, 9, 10], TYPHOON_BELT, 0.08),
        SeasonalWindow::new("extreme heat", &[5, 6, 7, 8], HEAT_BELT, 0.07),
        SeasonalWindow::new("severe winter", &[12, 1, 2], WINTER_BELT, 0.06),
        SeasonalWindow::new("cyclone season", &[11, 12, 1, 2, 3, 4], CYCLONE_BELT, 0.08),
    ]
}

fn standard_hazard_windows() -> Vec<HazardWindow> {
    vec![
        HazardWindow::new(WeatherHazard::Hurricane, &[6, 7, 8, 9, 10, 11], HURRICANE_BELT),
        HazardWindow::new(WeatherHazard::Hurricane, &[7, 8, 9, 10], TYPHOON_BELT),
        HazardWindow::new(WeatherHazard::Hurricane, &[11, 12, 1, 2, 3, 4], CYCLONE_BELT),
        HazardWindow::new(WeatherHazard::Monsoon, &[6, 7, 8, 9], MONSOON_BELT),
        HazardWindow::new(WeatherHazard::Heat, &[5, 6, 7, 8], HEAT_BELT),
        HazardWindow::new(WeatherHazard::Cold, &[12, 1, 2], WINTER_BELT),
        HazardWindow::new(WeatherHazard::Flood, &[6, 7, 8, 9], RIVER_FLOOD_BELT),
        HazardWindow::new(WeatherHazard::Flood, &[12, 1, 2, 3], WET_SEASON_FLOOD_BELT),
    ]
}

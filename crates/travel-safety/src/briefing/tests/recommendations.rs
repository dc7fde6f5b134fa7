use std::collections::HashSet;

use super::common::*;
use crate::briefing::assessment::RiskAssessmentEngine;
use crate::briefing::recommendations::{RecommendationEngine, TipPools};

fn recommend(query_country: &str, month: u32, seed: u64) -> Vec<String> {
    let knowledge = standard();
    let assessor = RiskAssessmentEngine::new(knowledge.clone());
    let engine = RecommendationEngine::new(knowledge, TipPools::standard());
    let query = country(query_country);
    let today = date(2025, month, 10);
    let assessment = assessor.assess(&query, today);
    engine.recommend(&query, &assessment, today, &mut rng(seed))
}

#[test]
fn low_risk_destination_gets_general_tips_only() {
    let pools = TipPools::standard();
    let tips = recommend("Japan", 4, 7);

    assert_eq!(tips.len(), 3);
    assert!(tips.iter().all(|tip| pools.general.contains(tip)));
}

#[test]
fn high_risk_destination_adds_two_high_risk_tips() {
    let pools = TipPools::standard();
    let tips = recommend("Ukraine", 3, 11);

    assert_eq!(tips.len(), 5);
    let high_risk = tips
        .iter()
        .filter(|tip| pools.high_risk.contains(tip))
        .count();
    assert_eq!(high_risk, 2);
}

#[test]
fn india_in_june_draws_from_several_seasonal_pools() {
    let pools = TipPools::standard();
    let tips = recommend("India", 6, 3);

    assert!(tips.iter().any(|tip| pools.heat.contains(tip)));
    assert!(tips.iter().any(|tip| pools.flood.contains(tip)));
    assert!(!tips.iter().any(|tip| pools.cold.contains(tip)));
    assert_eq!(tips.len(), 7);
}

#[test]
fn recommendations_never_repeat() {
    for seed in 0..32 {
        for (destination, month) in [("India", 6), ("Mexico", 9), ("Afghanistan", 1)] {
            let tips = recommend(destination, month, seed);
            let unique: HashSet<&String> = tips.iter().collect();
            assert_eq!(unique.len(), tips.len(), "{destination} seed {seed}: {tips:?}");
        }
    }
}

#[test]
fn overlapping_pools_collapse_to_one_entry() {
    let knowledge = island_knowledge();
    let shared = "Stay informed through local news and official channels".to_string();
    let pools = TipPools {
        general: vec![shared.clone()],
        high_risk: Vec::new(),
        hurricane: vec![shared.clone()],
        heat: Vec::new(),
        cold: Vec::new(),
        flood: Vec::new(),
    };
    let assessor = RiskAssessmentEngine::new(knowledge.clone());
    let engine = RecommendationEngine::new(knowledge, pools);
    let query = country("Cuba");
    let today = date(2025, 8, 1);
    let assessment = assessor.assess(&query, today);

    let tips = engine.recommend(&query, &assessment, today, &mut rng(1));

    assert_eq!(tips, vec![shared]);
}

#[test]
fn same_seed_gives_same_tips() {
    assert_eq!(recommend("Mexico", 9, 42), recommend("Mexico", 9, 42));
}

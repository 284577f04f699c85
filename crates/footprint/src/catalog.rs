//! Sustainability tips and missions
//!
//! Both tables are fixed at compile time. Lookups hand out clones so callers
//! never touch the shared definitions.

use common::models::{Category, Impact, Mission, Tip};
use rand::seq::SliceRandom;

pub static TIPS: &[Tip] = &[
    Tip {
        id: 1,
        category: Category::Transportation,
        title: "Use Public Transportation",
        description: "Switch from car to bus or train for your daily commute to reduce emissions by up to 50%.",
        impact: Impact::High,
    },
    Tip {
        id: 2,
        category: Category::Transportation,
        title: "Bike or Walk for Short Trips",
        description: "For trips under 3km, consider walking or biking instead of driving.",
        impact: Impact::Medium,
    },
    Tip {
        id: 3,
        category: Category::Transportation,
        title: "Carpool When Possible",
        description: "Share rides with colleagues or friends to reduce individual carbon footprint.",
        impact: Impact::Medium,
    },
    Tip {
        id: 4,
        category: Category::Energy,
        title: "Switch to LED Bulbs",
        description: "LED bulbs use 75% less energy than traditional incandescent bulbs.",
        impact: Impact::Medium,
    },
    Tip {
        id: 5,
        category: Category::Energy,
        title: "Unplug Devices",
        description: "Unplug electronics when not in use to avoid phantom energy consumption.",
        impact: Impact::Low,
    },
    Tip {
        id: 6,
        category: Category::Energy,
        title: "Use Energy-Efficient Appliances",
        description: "Choose appliances with high energy efficiency ratings (A++ or better).",
        impact: Impact::High,
    },
    Tip {
        id: 7,
        category: Category::Food,
        title: "Reduce Meat Consumption",
        description: "Try meatless Mondays or reduce meat portions to lower your food carbon footprint.",
        impact: Impact::High,
    },
    Tip {
        id: 8,
        category: Category::Food,
        title: "Buy Local Produce",
        description: "Choose locally grown fruits and vegetables to reduce transportation emissions.",
        impact: Impact::Medium,
    },
    Tip {
        id: 9,
        category: Category::Food,
        title: "Reduce Food Waste",
        description: "Plan meals and store food properly to minimize waste.",
        impact: Impact::Medium,
    },
    Tip {
        id: 10,
        category: Category::General,
        title: "Recycle and Compost",
        description: "Separate recyclables and compost organic waste to reduce landfill emissions.",
        impact: Impact::Medium,
    },
];

pub static MISSIONS: &[Mission] = &[
    Mission {
        id: 1,
        category: Category::Transportation,
        title: "Public Transport Challenge",
        description: "Use public transportation for 5 consecutive workdays",
        duration_days: 5,
        points: 100,
        co2_savings_kg: 15.0,
    },
    Mission {
        id: 2,
        category: Category::Food,
        title: "Zero Waste Week",
        description: "Reduce your food waste to zero for one week",
        duration_days: 7,
        points: 150,
        co2_savings_kg: 10.0,
    },
    Mission {
        id: 3,
        category: Category::Food,
        title: "Meatless Week",
        description: "Follow a vegetarian diet for 7 days",
        duration_days: 7,
        points: 200,
        co2_savings_kg: 25.0,
    },
    Mission {
        id: 4,
        category: Category::Energy,
        title: "Energy Saver",
        description: "Reduce electricity consumption by 20% for one month",
        duration_days: 30,
        points: 250,
        co2_savings_kg: 40.0,
    },
    Mission {
        id: 5,
        category: Category::Transportation,
        title: "Bike to Work",
        description: "Commute by bike for 10 workdays",
        duration_days: 14,
        points: 180,
        co2_savings_kg: 30.0,
    },
];

/// All tips, or only those in `category`, in catalog order
pub fn tips_by_category(category: Option<Category>) -> Vec<Tip> {
    match category {
        Some(category) => TIPS
            .iter()
            .filter(|t| t.category == category)
            .cloned()
            .collect(),
        None => TIPS.to_vec(),
    }
}

/// Up to `count` distinct tips picked uniformly at random
pub fn random_tips(count: usize) -> Vec<Tip> {
    let mut rng = rand::thread_rng();
    TIPS.choose_multiple(&mut rng, count.min(TIPS.len()))
        .cloned()
        .collect()
}

pub fn tip_by_id(id: u32) -> Option<Tip> {
    TIPS.iter().find(|t| t.id == id).cloned()
}

pub fn missions() -> Vec<Mission> {
    MISSIONS.to_vec()
}

pub fn mission_by_id(id: u32) -> Option<Mission> {
    MISSIONS.iter().find(|m| m.id == id).cloned()
}

pub fn missions_by_category(category: Category) -> Vec<Mission> {
    MISSIONS
        .iter()
        .filter(|m| m.category == category)
        .cloned()
        .collect()
}

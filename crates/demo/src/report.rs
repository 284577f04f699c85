//! Plain-text reports

use common::models::{Mission, Tip};
use footprint::{FootprintReport, UserStatistics};

const RULE: &str = "==================================================";

fn header(title: &str) -> String {
    format!("\n{RULE}\n{title}\n{RULE}\n")
}

pub fn emissions(report: &FootprintReport) -> String {
    let mut out = header("CARBON FOOTPRINT CALCULATION RESULTS");
    out.push_str(&format!("\nDate: {}\n", report.date.format("%Y-%m-%d")));
    out.push_str(&format!(
        "\nTotal Emissions: {:.2} kg CO2e\n",
        report.total_emissions_kg
    ));
    out.push_str("\nBreakdown by Category:\n");
    out.push_str(&format!(
        "  Transportation: {:.2} kg CO2e\n",
        report.breakdown.transportation
    ));
    out.push_str(&format!(
        "  Energy:         {:.2} kg CO2e\n",
        report.breakdown.energy
    ));
    out.push_str(&format!(
        "  Food:           {:.2} kg CO2e\n",
        report.breakdown.food
    ));
    out.push_str(&format!("\n{RULE}\n"));
    out
}

pub fn tips(tips: &[Tip]) -> String {
    let mut out = header("SUSTAINABLE TIPS");
    for tip in tips {
        out.push_str(&format!(
            "\n{} ({})\n  {}\n  Impact: {}\n",
            tip.title,
            tip.category.as_str().to_uppercase(),
            tip.description,
            tip.impact.as_str().to_uppercase()
        ));
    }
    out.push_str(&format!("\n{RULE}\n"));
    out
}

pub fn missions(missions: &[Mission]) -> String {
    let mut out = header("AVAILABLE MISSIONS");
    for mission in missions {
        out.push_str(&format!(
            "\n{}. {}\n   {}\n   Duration: {} days\n   Rewards: {} points, {} kg CO2 saved\n",
            mission.id,
            mission.title,
            mission.description,
            mission.duration_days,
            mission.points,
            mission.co2_savings_kg
        ));
    }
    out.push_str(&format!("\n{RULE}\n"));
    out
}

pub fn statistics(stats: &UserStatistics) -> String {
    let mut out = header("USER STATISTICS");
    out.push_str(&format!(
        "\nName: {}\nUser ID: {}\nPoints: {}\n",
        stats.name, stats.user_id, stats.total_points
    ));
    out.push_str(&format!(
        "\nCarbon Footprint:\n  Total Emissions: {:.2} kg CO2e\n  CO2 Saved (missions): {:.2} kg CO2e\n  Net Impact: {:.2} kg CO2e\n",
        stats.total_emissions_kg, stats.total_co2_saved_kg, stats.net_impact_kg
    ));
    out.push_str(&format!(
        "\nActivity:\n  Missions Completed: {}\n  Active Missions: {}\n  Last 30 days emissions: {:.2} kg CO2e\n",
        stats.missions_completed, stats.active_missions, stats.recent_30_days_emissions
    ));
    out.push_str(&format!("\n{RULE}\n"));
    out
}

//! Respira+ command-line walkthrough
//!
//! Records a sample week for a demo user, then prints tips, missions and the
//! resulting statistics.

use anyhow::Context;
use footprint::{catalog, ActivityLog, Tracker, UserProfile};
use store::{MemoryRepository, Profiles};
use tracing::info;

mod report;

const DEMO_USER: &str = "user001";
const DEMO_MISSION: u32 = 1;

fn sample_week() -> ActivityLog {
    ActivityLog {
        // 5 days commuting by car, 20km a day
        transportation: vec![("car_gasoline_km".to_string(), 100.0)],
        energy: vec![("electricity_kwh".to_string(), 50.0)],
        food: Some(("meat_medium_day".to_string(), 7)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("demo=info".parse()?)
                .add_directive("footprint=info".parse()?),
        )
        .init();

    let config = common::Config::from_env();

    println!("\n{}", "=".repeat(50));
    println!("RESPIRA+ - Carbon Footprint Tracker");
    println!("Based on ODS 13 - Climate Action");
    println!("{}", "=".repeat(50));

    let profiles = Profiles::new(MemoryRepository::new());
    profiles
        .create(UserProfile::new(DEMO_USER, "Demo User"))
        .await?;
    info!("User created: {}", DEMO_USER);

    println!("\n--- WEEKLY CARBON FOOTPRINT CALCULATION ---");
    let log = sample_week();
    let week = profiles
        .update(DEMO_USER, |profile| {
            Tracker::new().calculate_and_record(&log, profile)
        })
        .await?;
    print!("{}", report::emissions(&week));

    print!("{}", report::tips(&catalog::random_tips(config.tips_count)));
    print!("{}", report::missions(&catalog::missions()));

    let mission = catalog::mission_by_id(DEMO_MISSION)
        .with_context(|| format!("mission {} missing from catalog", DEMO_MISSION))?;
    profiles
        .update(DEMO_USER, |profile| {
            profile.start_mission(&mission);
            Ok(())
        })
        .await?;
    println!("\n✓ Mission started: {}", mission.title);

    let profile = profiles.get(DEMO_USER).await?;
    print!("{}", report::statistics(&profile.get_statistics()));

    println!("\n{}", "=".repeat(50));
    println!("Thank you for using Respira+!");
    println!("Together we can make a difference for our planet!");
    println!("{}\n", "=".repeat(50));

    Ok(())
}

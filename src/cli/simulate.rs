//! Simulate command implementation

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use flickerless::Config;
use flickerless::overlay::SurfaceEvent;
use flickerless::simulate::{NavigationReport, Scenario, run_scenario};
use flickerless::store::{ColorStore, JsonFileColorStore, MemoryColorStore};

/// Play a scripted navigation sequence through the engine and print the
/// per-navigation timeline
pub async fn simulate_command(
    config_path: &Path,
    scenario_path: &Path,
    store_path: Option<&Path>,
) -> Result<()> {
    let config = Config::load_or_default(config_path);
    let mut scenario = Scenario::from_file(scenario_path)?;
    if scenario.settings.is_none() {
        scenario.settings = Some(config.settings);
    }

    let store: Arc<dyn ColorStore> = match store_path {
        Some(path) => Arc::new(JsonFileColorStore::new(path)),
        None => Arc::new(MemoryColorStore::new()),
    };

    let reports = run_scenario(&scenario, store).await;
    for report in &reports {
        print_report(report);
    }
    Ok(())
}

fn print_report(report: &NavigationReport) {
    println!("== {} ==", report.page);
    if !report.overlaid {
        println!("  overlay disabled, nothing painted");
        return;
    }
    for entry in &report.timeline {
        let at = entry.at.as_millis();
        match &entry.event {
            SurfaceEvent::Painted(color) => println!("  {at:>6}ms  paint   {color}"),
            SurfaceEvent::FadeStarted(d) => {
                println!("  {at:>6}ms  fade    ({}ms)", d.as_millis())
            }
            SurfaceEvent::Detached => println!("  {at:>6}ms  detach"),
        }
    }
    match report.memoized {
        Some(color) => println!("  memoized for next navigation: {color}"),
        None => println!("  no color memoized"),
    }
}

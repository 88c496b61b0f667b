use crate::config::SimConfig;
use crate::cycle::Cycle;
use crate::error::Result;
use crate::stats::{accuracy, SimulationResult};
use std::path::Path;

const TABLE_HEADER: [&str; 7] = [
    "max_sp",
    "init_vel",
    "final_vel",
    "mean_vel",
    "init_acc%",
    "final_acc%",
    "mean_acc%",
];

/// Render results as an aligned text table, one row per max story size.
pub fn format_table(results: &[SimulationResult]) -> String {
    let mut out = String::new();
    let header: Vec<String> = TABLE_HEADER.iter().map(|h| format!("{:>10}", h)).collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    for r in results {
        out.push_str(&format!(
            "{:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
            r.max_story_size,
            r.initial_velocity,
            r.final_velocity,
            r.mean_velocity,
            r.initial_accuracy,
            r.final_accuracy,
            r.mean_accuracy,
        ));
    }
    out
}

pub fn print_table(results: &[SimulationResult]) {
    print!("{}", format_table(results));
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Save sweep results to CSV.
pub fn save_results_csv(results: &[SimulationResult], path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let mut wtr = csv::Writer::from_path(path)?;
    for r in results {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save sweep results to JSON.
pub fn save_results_json(results: &[SimulationResult], path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Export one cycle's sprints to CSV, with the per-sprint accuracy.
pub fn save_sprints_csv(cycle: &Cycle, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record([
        "sprint",
        "points_predicted",
        "points_planned",
        "capacity",
        "points_completed",
        "accuracy_pct",
    ])?;

    for (i, s) in cycle.sprints.iter().enumerate() {
        wtr.write_record(&[
            (i + 1).to_string(),
            s.points_predicted.to_string(),
            s.points_planned.to_string(),
            s.capacity.to_string(),
            s.points_completed.to_string(),
            format!("{:.2}", accuracy(s)?),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save the effective configuration as TOML.
pub fn save_config_toml(config: &SimConfig, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text)?;
    Ok(())
}

/// Save all outputs for a sweep to a directory.
pub fn save_all(results: &[SimulationResult], config: &SimConfig, output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;
    save_results_csv(results, &output_dir.join("results.csv"))?;
    save_results_json(results, &output_dir.join("results.json"))?;
    save_config_toml(config, &output_dir.join("config.toml"))?;
    Ok(())
}

//! route-runner: headless runner for the cruxline climbing simulation.
//!
//! Usage:
//!   route-runner case1                      # The Pump Clock
//!   route-runner case3 --depth 4            # The Labyrinth, shallower search
//!   route-runner --all --out outputs
//!   route-runner --textured 30 15 42 --energy 120

use anyhow::{anyhow, Context, Result};
use cruxline_core::{
    compute_metrics, simulate, ClimberSpec, MetricsRecord, PolicyKind, Scenario, SimRun, State,
    Wall,
};
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

struct Options {
    out_dir:  String,
    save_csv: bool,
    quiet:    bool,
    energy:   Option<f64>,
    depth:    Option<u32>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let opts = Options {
        out_dir:  parse_flag(&args, "--out").unwrap_or_else(|| "outputs".to_string()),
        save_csv: !args.iter().any(|a| a == "--no-csv"),
        quiet:    args.iter().any(|a| a == "--quiet" || a == "-q"),
        energy:   parse_flag(&args, "--energy").and_then(|v| v.parse().ok()),
        depth:    parse_flag(&args, "--depth").and_then(|v| v.parse().ok()),
    };

    if !opts.quiet {
        println!("cruxline route-runner: Greedy vs Prudent on the same rope");
        println!();
    }

    if args.iter().any(|a| a == "--all") {
        for scenario in Scenario::all() {
            run_scenario(scenario, &opts)?;
        }
        return Ok(());
    }

    if let Some(pos) = args.iter().position(|a| a == "--textured") {
        let dims: Vec<u64> = args[pos + 1..]
            .iter()
            .take(3)
            .filter_map(|v| v.parse().ok())
            .collect();
        let &[height, width, seed] = dims.as_slice() else {
            return Err(anyhow!("--textured needs HEIGHT WIDTH SEED"));
        };
        let wall = Wall::textured(height as usize, width as usize, 0.35, seed)?;
        let climbers = vec![
            ClimberSpec::greedy(opts.energy.unwrap_or(150.0)),
            ClimberSpec::prudent(opts.energy.unwrap_or(150.0), 0.5, 0.4, opts.depth.unwrap_or(5)),
        ];
        let slug = format!("textured_{height}x{width}_{seed}");
        return run_wall(&wall, climbers, &slug, &opts);
    }

    let Some(case) = args.iter().skip(1).find_map(|a| Scenario::from_name(a)) else {
        print_usage();
        return Ok(());
    };
    run_scenario(case, &opts)
}

fn print_usage() {
    println!("usage: route-runner <case1|case2|case3|case4> [options]");
    println!("       route-runner --all [options]");
    println!("       route-runner --textured HEIGHT WIDTH SEED [options]");
    println!();
    println!("  case1: The Pump Clock      case2: The Crux Roulette");
    println!("  case3: The Labyrinth       case4: The Redpoint Crux");
    println!();
    println!("options:");
    println!("  --out DIR      output directory (default: outputs)");
    println!("  --energy E     override both climbers' energy budget");
    println!("  --depth K      override the prudent climber's lookahead");
    println!("  --no-csv       skip CSV export");
    println!("  --quiet, -q    suppress console summary");
}

fn run_scenario(scenario: Scenario, opts: &Options) -> Result<()> {
    if !opts.quiet {
        println!("=== SCENARIO: {} ({}) ===", scenario.label(), scenario.grade());
    }
    let wall = scenario.build()?;
    let mut climbers = scenario.default_climbers();
    for spec in &mut climbers {
        if let Some(e) = opts.energy {
            spec.energy = e;
        }
        if let (Some(k), PolicyKind::Prudent(params)) = (opts.depth, &mut spec.policy) {
            params.lookahead = k;
        }
    }
    run_wall(&wall, climbers, scenario.slug(), opts)
}

fn run_wall(wall: &Wall, climbers: Vec<ClimberSpec>, slug: &str, opts: &Options) -> Result<()> {
    let start = wall
        .start_positions
        .first()
        .copied()
        .unwrap_or((0, wall.width / 2));

    let mut results: Vec<(ClimberSpec, SimRun, MetricsRecord)> = Vec::new();
    for spec in climbers {
        let initial = State::new(start.0, start.1, spec.energy);
        let run = simulate(wall, &spec.policy, initial)?;
        let metrics = compute_metrics(wall, &run.trajectory);
        results.push((spec, run, metrics));
    }

    if !opts.quiet {
        print_summary(wall, &results);
    }
    if opts.save_csv {
        export(wall, &results, slug, &opts.out_dir)?;
        if !opts.quiet {
            println!("  data written to {}/csv/", opts.out_dir);
            println!();
        }
    }
    Ok(())
}

fn print_summary(wall: &Wall, results: &[(ClimberSpec, SimRun, MetricsRecord)]) {
    println!("  wall: {} ({}x{})", wall.name, wall.height, wall.width);
    for (spec, run, m) in results {
        let mark = if m.success { "+" } else { "x" };
        println!("  [{mark}] {}:", spec.name);
        println!("      status: {}", run.status.label());
        println!(
            "      height: {}/{} ({:.0}%)",
            m.final_height,
            m.max_height,
            m.height_efficiency * 100.0
        );
        println!("      energy: {:.1}/{:.1} used", m.energy_used, m.initial_energy);
        println!("      steps:  {}", run.steps);
    }

    // Winner on height; tie broken by energy efficiency.
    if results.len() >= 2 {
        let best = results
            .iter()
            .max_by(|a, b| {
                (a.2.final_height, a.2.energy_efficiency)
                    .partial_cmp(&(b.2.final_height, b.2.energy_efficiency))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(spec, _, _)| spec.name.as_str());
        if let Some(name) = best {
            println!("  winner: {name}");
        }
    }
    println!();
}

// ── CSV / JSON export ────────────────────────────────────────────────────────

#[derive(serde::Serialize)]
struct ClimberReport<'a> {
    name:    &'a str,
    policy:  &'a str,
    status:  &'a str,
    metrics: &'a MetricsRecord,
}

#[derive(serde::Serialize)]
struct RunReport<'a> {
    wall:     &'a str,
    grade:    &'a str,
    height:   usize,
    width:    usize,
    climbers: Vec<ClimberReport<'a>>,
}

fn export(
    wall: &Wall,
    results: &[(ClimberSpec, SimRun, MetricsRecord)],
    slug: &str,
    out_dir: &str,
) -> Result<()> {
    let csv_dir = Path::new(out_dir).join("csv");
    fs::create_dir_all(&csv_dir)
        .with_context(|| format!("cannot create {}", csv_dir.display()))?;

    // Trajectories: one row per (climber, step).
    let mut traj = String::from("agent,policy,step,row,col,energy\n");
    for (spec, run, _) in results {
        for (step, state) in run.trajectory.iter().enumerate() {
            traj.push_str(&format!(
                "{},{},{},{},{},{:.4}\n",
                spec.name,
                spec.policy.name(),
                step,
                state.row,
                state.col,
                state.energy
            ));
        }
    }
    fs::write(csv_dir.join(format!("{slug}_trajectories.csv")), traj)?;

    // Metrics: one row per climber.
    let mut met = String::from(
        "agent,policy,status,final_height,max_height,height_efficiency,\
         initial_energy,final_energy,energy_used,energy_efficiency,\
         total_steps,total_cost,path_length,success,time_to_top\n",
    );
    for (spec, run, m) in results {
        met.push_str(&format!(
            "{},{},{},{},{},{:.4},{:.4},{:.4},{:.4},{:.4},{},{:.4},{},{},{}\n",
            spec.name,
            spec.policy.name(),
            run.status.label(),
            m.final_height,
            m.max_height,
            m.height_efficiency,
            m.initial_energy,
            m.final_energy,
            m.energy_used,
            m.energy_efficiency,
            run.steps,
            run.total_cost,
            m.path_length,
            m.success,
            m.time_to_top.map_or(String::new(), |t| t.to_string()),
        ));
    }
    fs::write(csv_dir.join(format!("{slug}_metrics.csv")), met)?;

    // Wall quality field; infinite cost encoded as -1.
    let mut wcsv = String::from("row,col,quality,cost\n");
    for r in 0..wall.height {
        for c in 0..wall.width {
            let cost = wall.cost(r, c);
            let cost = if cost.is_finite() { cost } else { -1.0 };
            wcsv.push_str(&format!("{r},{c},{:.4},{:.4}\n", wall.quality(r, c), cost));
        }
    }
    fs::write(csv_dir.join(format!("{slug}_wall.csv")), wcsv)?;

    // Machine-readable summary.
    let report = RunReport {
        wall:     &wall.name,
        grade:    &wall.grade,
        height:   wall.height,
        width:    wall.width,
        climbers: results
            .iter()
            .map(|(spec, run, m)| ClimberReport {
                name:    &spec.name,
                policy:  spec.policy.name(),
                status:  run.status.label(),
                metrics: m,
            })
            .collect(),
    };
    let json_path = csv_dir.join(format!("{slug}_summary.json"));
    let mut f = fs::File::create(&json_path)
        .with_context(|| format!("cannot create {}", json_path.display()))?;
    writeln!(f, "{}", serde_json::to_string_pretty(&report)?)?;

    log::debug!("exported {slug} results to {out_dir}/csv");
    Ok(())
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

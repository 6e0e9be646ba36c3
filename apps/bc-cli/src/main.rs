use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use bc_app::{
    analysis_service, query, scenario_service, sweep, AnalysisOptions, AnalysisRequest,
    AnalysisTiming, AppError, AppResult, SweepParameter, SweepRequest, SweepSpacing,
};
use bc_model::PlantResults;
use bc_report::{diagrams, AnalysisReport};

#[derive(Parser)]
#[command(name = "bc-cli")]
#[command(about = "BioCycle CLI - Hybrid biomass power plant analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// List cases in a scenario
    Cases {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Analyze one case and print a result summary
    Analyze {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Case ID to analyze
        case_id: String,
        /// Print the full result record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the analysis report for one case
    Report {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Case ID to report on
        case_id: String,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Sweep one input across a range and export CSV
    Sweep {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Case ID providing the base operating point
        case_id: String,
        /// Input to sweep (e.g. pressure_ratio, turbine_inlet_temp_k)
        #[arg(long)]
        parameter: String,
        /// First swept value
        #[arg(long)]
        start: f64,
        /// Last swept value
        #[arg(long)]
        end: f64,
        /// Number of sweep points
        #[arg(long, default_value_t = 25)]
        points: usize,
        /// Use logarithmic spacing
        #[arg(long)]
        log: bool,
        /// Output column key (repeatable; defaults to eta_combined, total_power_kw)
        #[arg(long = "key")]
        keys: Vec<String>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export cycle diagram data as JSON
    Diagram {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Case ID to diagram
        case_id: String,
        /// Which cycle to export
        #[arg(long, value_parser = ["rankine-hs", "brayton-ts"])]
        cycle: String,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Cases { scenario_path } => cmd_cases(&scenario_path),
        Commands::Analyze {
            scenario_path,
            case_id,
            json,
        } => cmd_analyze(&scenario_path, &case_id, json),
        Commands::Report {
            scenario_path,
            case_id,
            json,
            output,
        } => cmd_report(&scenario_path, &case_id, json, output.as_deref()),
        Commands::Sweep {
            scenario_path,
            case_id,
            parameter,
            start,
            end,
            points,
            log,
            keys,
            output,
        } => cmd_sweep(
            &scenario_path,
            &case_id,
            &parameter,
            start,
            end,
            points,
            log,
            &keys,
            output.as_deref(),
        ),
        Commands::Diagram {
            scenario_path,
            case_id,
            cycle,
            output,
        } => cmd_diagram(&scenario_path, &case_id, &cycle, output.as_deref()),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = scenario_service::load_scenario(scenario_path)?;
    scenario_service::validate_scenario(&scenario)?;
    println!("✓ Scenario is valid ({} cases)", scenario.cases.len());
    Ok(())
}

fn cmd_cases(scenario_path: &Path) -> AppResult<()> {
    let scenario = scenario_service::load_scenario(scenario_path)?;
    let cases = scenario_service::list_cases(&scenario);

    if cases.is_empty() {
        println!("No cases found in scenario");
    } else {
        println!("Cases in scenario '{}':", scenario.name);
        for case in cases {
            println!(
                "  {} - {} (feed {} kg/s, moisture {}, TIT {} K)",
                case.id,
                case.name,
                case.biomass_flow_kg_s,
                case.moisture_fraction,
                case.turbine_inlet_temp_k
            );
        }
    }
    Ok(())
}

fn cmd_analyze(scenario_path: &Path, case_id: &str, json: bool) -> AppResult<()> {
    let request = AnalysisRequest {
        scenario_path,
        case_id,
        options: AnalysisOptions::default(),
    };

    let response = analysis_service::analyze_case(&request)?;

    if json {
        let text = serde_json::to_string_pretty(&response.results)
            .map_err(|e| AppError::Report(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    println!("✓ Analysis completed: {}", response.analysis_id);
    print_results_summary(&response.results);
    print_timing_summary(&response.timing);
    Ok(())
}

fn print_results_summary(results: &PlantResults) {
    println!("\nCycle efficiencies:");
    println!("  Rankine:  {:.2}%", results.eta_rankine * 100.0);
    println!("  Brayton:  {:.2}%", results.eta_brayton * 100.0);
    println!("  Combined: {:.2}%", results.eta_combined * 100.0);

    println!("\nPower:");
    println!("  Brayton: {:.2} kW", results.brayton_power_kw);
    println!("  Rankine: {:.2} kW", results.rankine_power_kw);
    println!("  Total:   {:.2} kW", results.total_power_kw);

    println!("\nAD-HTC byproducts:");
    println!("  Gas A:   {:.3} kg/hr", results.gas_a_kg_hr);
    println!("  Gas B:   {:.3} kg/hr", results.gas_b_kg_hr);
    println!("  Methane: {:.3} kg/hr", results.methane_kg_hr);
    println!("  HTC heating load: {:.0} kJ", results.htc_heating_kj);

    println!("\nFuel consumption: {:.3} kg/hr", results.fuel_consumption_kg_hr);
}

fn print_timing_summary(timing: &AnalysisTiming) {
    println!("\nTiming summary:");
    println!("  Load:    {:.3}s", timing.load_time_s);
    println!("  Compute: {:.6}s", timing.compute_time_s);
    println!("  Total:   {:.3}s", timing.total_time_s);
}

fn cmd_report(
    scenario_path: &Path,
    case_id: &str,
    json: bool,
    output: Option<&Path>,
) -> AppResult<()> {
    let request = AnalysisRequest {
        scenario_path,
        case_id,
        options: AnalysisOptions::default(),
    };

    let response = analysis_service::analyze_case(&request)?;
    let report = AnalysisReport::build(&response.results, &response.analysis_id);

    let rendered = if json {
        report.to_json()?
    } else {
        report.render_text()
    };

    if let Some(path) = output {
        std::fs::write(path, &rendered)?;
        println!("✓ Report written to {}", path.display());
    } else {
        println!("{}", rendered.trim_end());
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_sweep(
    scenario_path: &Path,
    case_id: &str,
    parameter: &str,
    start: f64,
    end: f64,
    points: usize,
    log: bool,
    keys: &[String],
    output: Option<&Path>,
) -> AppResult<()> {
    let scenario = scenario_service::load_scenario(scenario_path)?;
    let case = scenario_service::get_case(&scenario, case_id)?;

    let parameter = SweepParameter::parse(parameter).ok_or_else(|| AppError::InvalidSweep {
        message: format!(
            "Unknown sweep parameter '{}' (expected one of: {})",
            parameter,
            SweepParameter::ALL.map(|p| p.as_str()).join(", ")
        ),
    })?;

    let spacing = if log {
        SweepSpacing::Logarithmic
    } else {
        SweepSpacing::Linear
    };

    let request = SweepRequest {
        base: case.inputs,
        parameter,
        spacing,
        start,
        end,
        points,
    };

    let series = sweep::run_sweep(&request)?;

    let keys: Vec<String> = if keys.is_empty() {
        vec!["eta_combined".to_string(), "total_power_kw".to_string()]
    } else {
        keys.to_vec()
    };

    // Build CSV
    let mut csv = String::from(parameter.as_str());
    for key in &keys {
        csv.push(',');
        csv.push_str(key);
    }
    csv.push('\n');

    for (value, results) in series.values.iter().zip(&series.results) {
        let columns = query::select_outputs(results, &keys)?;
        csv.push_str(&format!("{}", value));
        for column in columns {
            csv.push_str(&format!(",{}", column));
        }
        csv.push('\n');
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} sweep points to {}",
            series.values.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_diagram(
    scenario_path: &Path,
    case_id: &str,
    cycle: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let request = AnalysisRequest {
        scenario_path,
        case_id,
        options: AnalysisOptions::default(),
    };

    let response = analysis_service::analyze_case(&request)?;

    let json = match cycle {
        "rankine-hs" => serde_json::to_string_pretty(&diagrams::rankine_hs(&response.results)),
        _ => serde_json::to_string_pretty(&diagrams::brayton_ts(&response.results)),
    }
    .map_err(|e| AppError::Report(e.to_string()))?;

    if let Some(path) = output {
        std::fs::write(path, &json)?;
        println!("✓ Diagram data written to {}", path.display());
    } else {
        println!("{}", json);
    }
    Ok(())
}

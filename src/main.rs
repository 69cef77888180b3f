use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use merit_calc::config::Config;
use merit_calc::error::ConversionError;
use merit_calc::grading::{self, Scale};
use merit_calc::merit::{self, MeritFormula};
use merit_calc::output;
use merit_calc::records::{self, RecordFilter};
use merit_calc::store::{self, NewFormula, DEFAULT_CUSTOM_COLOR};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a CGPA to a percentage
    Cgpa {
        #[arg(allow_negative_numbers = true)]
        cgpa: f64,
        /// Conversion scale: 4.0, 5.0 or hec
        #[arg(short, long)]
        scale: Option<Scale>,
        /// Total CGPA of the scale (defaults to 4.0, or 5.0 for the 5.0 scale)
        #[arg(short, long)]
        total: Option<f64>,
    },
    /// Convert a percentage (or obtained/total marks) to a CGPA
    Percentage {
        #[arg(allow_negative_numbers = true)]
        percentage: String,
        #[arg(short, long)]
        scale: Option<Scale>,
        #[arg(short, long)]
        total: Option<f64>,
    },
    /// O-Level grades to a matric equivalent (best 8 subjects)
    OLevel {
        #[arg(required = true)]
        grades: Vec<String>,
    },
    /// A-Level grades to an intermediate equivalent (best 3 subjects)
    ALevel {
        #[arg(required = true)]
        grades: Vec<String>,
    },
    /// Compute a merit aggregate
    Aggregate {
        /// Formula id or short name (see `formulas`)
        #[arg(short, long)]
        formula: Option<String>,
        /// Matric percentage or marks, e.g. 92.5 or 1020/1100
        #[arg(long)]
        matric: String,
        /// Intermediate percentage or marks
        #[arg(long)]
        inter: String,
        /// Entry test percentage or marks
        #[arg(long)]
        test: String,
    },
    /// Find the entry test score needed for a target aggregate
    Target {
        #[arg(short, long)]
        formula: Option<String>,
        #[arg(long)]
        matric: String,
        #[arg(long)]
        inter: String,
        /// Desired aggregate percentage
        #[arg(long, allow_negative_numbers = true)]
        target: f64,
    },
    /// Estimate admission chance against past closing merits (advisory)
    Chance {
        #[arg(short, long)]
        formula: Option<String>,
        /// Use this aggregate instead of computing one
        #[arg(long, conflicts_with_all = ["matric", "inter", "test"])]
        aggregate: Option<f64>,
        #[arg(long, requires_all = ["inter", "test"])]
        matric: Option<String>,
        #[arg(long)]
        inter: Option<String>,
        #[arg(long)]
        test: Option<String>,
        /// University short name (defaults to the formula's short name)
        #[arg(short, long)]
        university: Option<String>,
        #[arg(short, long)]
        year: Option<i32>,
        /// Program name, matched as a substring
        #[arg(short, long)]
        program: Option<String>,
        /// Fallback minimum aggregate when no past cutoffs match
        #[arg(long)]
        min_aggregate: Option<f64>,
        /// Merit records JSON file (overrides records_path in config)
        #[arg(long)]
        records: Option<PathBuf>,
    },
    /// List, add or remove merit formulas
    Formulas {
        #[command(subcommand)]
        action: Option<FormulaAction>,
    },
    /// Summarize historical closing merits
    Records {
        #[arg(short, long)]
        university: Option<String>,
        #[arg(short, long)]
        year: Option<i32>,
        #[arg(short, long)]
        program: Option<String>,
        #[arg(long)]
        records: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum FormulaAction {
    /// List built-in and custom formulas (default)
    List,
    /// Save a custom formula; weights must sum to 100
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        short_name: String,
        #[arg(long)]
        matric_weight: u32,
        #[arg(long)]
        inter_weight: u32,
        #[arg(long)]
        test_weight: u32,
        #[arg(long, default_value = "Entry Test")]
        test_name: String,
        #[arg(long, default_value = DEFAULT_CUSTOM_COLOR)]
        color: String,
    },
    /// Remove a custom formula by id or short name
    Remove { id: String },
}

#[derive(Parser, Debug)]
#[command(name = "merit-calc")]
#[command(
    about = "CGPA, IBCC equivalence and university merit aggregate calculator",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/merit-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

struct RunContext {
    config: Config,
    json: bool,
    use_colors: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match merit_calc::config::load_config(cli.config.map(PathBuf::from)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = merit_calc::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let level = merit_calc::telemetry::resolve_level(cli.verbose, config.log_level.as_deref());
    if let Err(e) = merit_calc::telemetry::init(&level) {
        eprintln!("Logging disabled: {:#}", e);
    }

    let ctx = RunContext {
        config,
        json: cli.json,
        use_colors: !cli.json && output::should_use_colors(),
    };

    if let Err(e) = run(cli.command, &ctx) {
        eprintln!("Error: {:#}", e);
        let code = if e.downcast_ref::<ConversionError>().is_some() {
            EXIT_INPUT
        } else {
            EXIT_CONFIG
        };
        std::process::exit(code);
    }

    std::process::exit(EXIT_SUCCESS);
}

fn run(command: Commands, ctx: &RunContext) -> Result<()> {
    match command {
        Commands::Cgpa { cgpa, scale, total } => {
            let scale = scale.unwrap_or_else(|| ctx.config.scale());
            let total = total.unwrap_or_else(|| ctx.config.total_cgpa_for(scale));
            debug!(cgpa, %scale, total, "converting CGPA");

            let result = grading::cgpa_to_percentage(cgpa, scale, total)?;
            emit(ctx, &result, || {
                output::format_conversion(
                    &format!("Percentage ({} scale)", scale),
                    &output::format_percent(result.value),
                    &result,
                    ctx.use_colors,
                )
            })
        }
        Commands::Percentage {
            percentage,
            scale,
            total,
        } => {
            let scale = scale.unwrap_or_else(|| ctx.config.scale());
            let total = total.unwrap_or_else(|| ctx.config.total_cgpa_for(scale));
            let percentage = grading::parse_score(&percentage)?;
            debug!(percentage, %scale, total, "converting percentage");

            let result = grading::percentage_to_cgpa(percentage, scale, total)?;
            emit(ctx, &result, || {
                output::format_conversion(
                    &format!("CGPA ({} scale)", scale),
                    &format!(
                        "{}/{}",
                        output::format_number(result.value),
                        output::format_number(total)
                    ),
                    &result,
                    ctx.use_colors,
                )
            })
        }
        Commands::OLevel { grades } => {
            let result = grading::convert_o_level_to_matric(&grades);
            log_unrecognized(result.unrecognized, grades.len());
            emit(ctx, &result, || {
                output::format_equivalence("Matric", &result, ctx.use_colors)
            })
        }
        Commands::ALevel { grades } => {
            let result = grading::convert_a_level_to_inter(&grades);
            log_unrecognized(result.unrecognized, grades.len());
            emit(ctx, &result, || {
                output::format_equivalence("Intermediate", &result, ctx.use_colors)
            })
        }
        Commands::Aggregate {
            formula,
            matric,
            inter,
            test,
        } => {
            let formula = resolve_formula(formula.as_deref(), ctx)?;
            let (matric, inter, test) = (
                grading::parse_score(&matric)?,
                grading::parse_score(&inter)?,
                grading::parse_score(&test)?,
            );
            warn_weight_sum(&formula);

            let result = merit::compute_aggregate(&formula, matric, inter, test);
            emit(ctx, &json!({ "formula": formula.id, "result": result }), || {
                output::format_aggregate(&formula, &result, ctx.use_colors)
            })
        }
        Commands::Target {
            formula,
            matric,
            inter,
            target,
        } => {
            let formula = resolve_formula(formula.as_deref(), ctx)?;
            let matric = grading::parse_score(&matric)?;
            let inter = grading::parse_score(&inter)?;
            warn_weight_sum(&formula);

            let clamped = grading::clamp_percentage(target)?;
            if clamped != target {
                info!(requested = target, clamped, "target aggregate clamped to [0, 100]");
            }

            let result = merit::solve_required_test_score(&formula, matric, inter, clamped);
            let display = json!({
                "formula": formula.id,
                "target": clamped,
                "display_required_score": result.display_required_score(),
                "result": result,
            });
            emit(ctx, &display, || {
                output::format_target(&formula, clamped, &result, ctx.use_colors)
            })
        }
        Commands::Chance {
            formula,
            aggregate,
            matric,
            inter,
            test,
            university,
            year,
            program,
            min_aggregate,
            records: records_file,
        } => {
            let formula = match (&formula, aggregate) {
                (None, Some(_)) => None,
                _ => Some(resolve_formula(formula.as_deref(), ctx)?),
            };

            let aggregate = match (aggregate, &formula, matric, inter, test) {
                (Some(a), _, _, _, _) => grading::check_percentage(a)?,
                (None, Some(f), Some(m), Some(i), Some(t)) => {
                    warn_weight_sum(f);
                    merit::compute_aggregate(
                        f,
                        grading::parse_score(&m)?,
                        grading::parse_score(&i)?,
                        grading::parse_score(&t)?,
                    )
                    .aggregate
                }
                _ => bail!("Pass --aggregate, or --matric, --inter and --test to compute one"),
            };

            let filter = RecordFilter {
                university: university.or_else(|| formula.as_ref().map(|f| f.short_name.clone())),
                year,
                program,
            };

            let all_records = match records_file.or_else(|| ctx.config.records_path.clone()) {
                Some(path) => records::load_records(&path)?,
                None => Vec::new(),
            };
            let matched = filter.apply(&all_records);
            let cutoffs = records::cutoffs(&matched);
            debug!(matched = matched.len(), ?filter, "selected historical cutoffs");

            let (tier, basis) = match merit::classify_chance(aggregate, &cutoffs) {
                Some(tier) => (
                    tier,
                    format!(
                        "{} past closing merit{}",
                        cutoffs.len(),
                        if cutoffs.len() == 1 { "" } else { "s" }
                    ),
                ),
                None => match min_aggregate {
                    Some(min) => (
                        merit::classify_against_minimum(aggregate, min),
                        format!("minimum aggregate {}", output::format_percent(min)),
                    ),
                    None => bail!(
                        "No historical cutoffs match; set records_path, pass --records, \
                         or give --min-aggregate"
                    ),
                },
            };

            emit(
                ctx,
                &json!({ "aggregate": aggregate, "tier": tier, "basis": basis }),
                || output::format_chance(aggregate, tier, &basis, ctx.use_colors),
            )
        }
        Commands::Formulas { action } => run_formulas(action.unwrap_or(FormulaAction::List), ctx),
        Commands::Records {
            university,
            year,
            program,
            records: records_file,
        } => {
            let Some(path) = records_file.or_else(|| ctx.config.records_path.clone()) else {
                bail!("No merit records file: set records_path in config or pass --records");
            };
            let all_records = records::load_records(&path)?;
            let filter = RecordFilter {
                university,
                year,
                program,
            };
            let summaries = records::summarize(&filter.apply(&all_records));
            emit(ctx, &summaries, || {
                output::format_summary_table(&summaries, ctx.use_colors)
            })
        }
    }
}

fn run_formulas(action: FormulaAction, ctx: &RunContext) -> Result<()> {
    let path = store_path(ctx)?;
    let mut formula_store = store::load_formula_store(&path)?;

    match action {
        FormulaAction::List => {
            let builtin = merit::builtin_formulas();
            let custom = formula_store.formulas();
            let mut rows: Vec<output::FormulaRow> = builtin
                .iter()
                .map(|formula| output::FormulaRow {
                    formula,
                    custom: false,
                })
                .collect();
            rows.extend(custom.iter().map(|formula| output::FormulaRow {
                formula,
                custom: true,
            }));

            emit(
                ctx,
                &json!({ "builtin": builtin, "custom": formula_store.list() }),
                || output::format_formula_table(&rows, ctx.use_colors),
            )
        }
        FormulaAction::Add {
            name,
            short_name,
            matric_weight,
            inter_weight,
            test_weight,
            test_name,
            color,
        } => {
            if merit::find_formula(&short_name, &[]).is_some() {
                bail!("'{}' is a built-in formula; pick another short name", short_name);
            }

            let created = match formula_store.create(NewFormula {
                name,
                short_name,
                matric_weight,
                inter_weight,
                test_weight,
                test_name,
                color,
            }) {
                Ok(stored) => stored.clone(),
                Err(errors) => bail!("Invalid formula:\n  - {}", errors.join("\n  - ")),
            };

            store::save_formula_store(&path, &formula_store)?;
            info!(id = %created.formula.id, "saved custom formula");

            emit(ctx, &created, || {
                format!(
                    "Saved {} ({}) as {}",
                    created.formula.short_name,
                    created.formula.weights_label(),
                    created.formula.id
                )
            })
        }
        FormulaAction::Remove { id } => {
            if !formula_store.delete(&id) {
                bail!("No custom formula matches '{}'", id);
            }
            store::save_formula_store(&path, &formula_store)?;
            emit(ctx, &json!({ "removed": id }), || format!("Removed {}", id))
        }
    }
}

fn store_path(ctx: &RunContext) -> Result<PathBuf> {
    match ctx.config.formulas_path {
        Some(ref path) => Ok(path.clone()),
        None => store::get_store_path(),
    }
}

/// Resolve `--formula` (or the configured default) against presets and the
/// custom store.
fn resolve_formula(key: Option<&str>, ctx: &RunContext) -> Result<MeritFormula> {
    let key = match key.or(ctx.config.default_formula.as_deref()) {
        Some(k) => k,
        None => bail!("No formula given: pass --formula or set default_formula in config"),
    };

    let custom = store::load_formula_store(&store_path(ctx)?)
        .context("Failed to load custom formulas")?
        .formulas();

    match merit::find_formula(key, &custom) {
        Some(formula) => {
            debug!(id = %formula.id, weights = %formula.weights_label(), "using formula");
            Ok(formula)
        }
        None => {
            let known: Vec<String> = merit::builtin_formulas()
                .into_iter()
                .chain(custom)
                .map(|f| f.short_name)
                .collect();
            bail!("Unknown formula '{}'. Known formulas: {}", key, known.join(", "))
        }
    }
}

fn warn_weight_sum(formula: &MeritFormula) {
    if let Err(errors) = merit::validate_formula(formula) {
        for error in errors {
            warn!(formula = %formula.id, "{}", error);
        }
    }
}

fn log_unrecognized(unrecognized: usize, total: usize) {
    if unrecognized > 0 {
        debug!(unrecognized, total, "some grades were not recognized and were ignored");
    }
}

/// Print `value` as JSON in `--json` mode, otherwise the formatted text.
fn emit<T: Serialize>(ctx: &RunContext, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if ctx.json {
        let out = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
        println!("{}", out);
    } else {
        println!("{}", text());
    }
    Ok(())
}

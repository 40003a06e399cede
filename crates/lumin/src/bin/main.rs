//! LUMIN command-line interface

use anyhow::Result;
use clap::{Parser, Subcommand};
use lumin::cli::{concepts, ground, logging, output, validate};
use lumin::eval::engine::DEFAULT_MAX_DEPTH;
use std::path::PathBuf;

/// LUMIN grounding tool
#[derive(Parser)]
#[command(name = "lumin")]
#[command(author, version, about = "Ground set-algebra query plans against a concept ontology", long_about = None)]
struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, pretty, table)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    /// Period for cyclic concepts that omit range_max
    #[arg(long, default_value_t = 24.0, global = true)]
    default_period: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ground a plan against an ontology
    Ground {
        /// Plan as JSON, e.g. '["INTERSECT", "Midnight", "Obs_Window"]'
        plan: Option<String>,

        /// Read the plan from a JSON file ('-' for stdin)
        #[arg(short, long = "plan", conflicts_with = "plan")]
        plan_file: Option<PathBuf>,

        /// Ontology file (default: $LUMIN_ONTOLOGY)
        #[arg(short = 'O', long)]
        ontology: Option<PathBuf>,

        /// Maximum plan depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// List the concepts of an ontology
    Concepts {
        /// Ontology file (default: $LUMIN_ONTOLOGY)
        #[arg(short = 'O', long)]
        ontology: Option<PathBuf>,

        /// Print only the concept names on one line
        #[arg(short, long)]
        names_only: bool,

        /// Separator between names with --names-only
        #[arg(short, long, default_value = ", ")]
        separator: String,
    },

    /// Validate ontology files
    Validate {
        /// Ontology files to validate
        files: Vec<PathBuf>,

        /// Strict mode (cyclic entries must declare range_max)
        #[arg(short, long)]
        strict: bool,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let output_format = output::OutputFormat::from_flag(cli.format.as_deref())?;
    let default_period = Some(cli.default_period);

    match cli.command {
        Commands::Ground {
            plan,
            plan_file,
            ontology,
            max_depth,
        } => {
            let plan = match (plan, plan_file) {
                (Some(text), _) => ground::PlanSource::Inline(text),
                (None, Some(path)) if path.as_os_str() != "-" => ground::PlanSource::File(path),
                (None, _) => ground::PlanSource::Stdin,
            };
            let config = ground::GroundConfig {
                ontology,
                plan,
                default_period,
                max_depth,
                verbose: cli.verbose,
                output_format,
                output_file: cli.output,
            };
            ground::ground(config)
        }

        Commands::Concepts {
            ontology,
            names_only,
            separator,
        } => {
            let config = concepts::ConceptsConfig {
                ontology,
                default_period,
                names_only,
                separator,
                output_format,
                output_file: cli.output,
            };
            concepts::concepts(config)
        }

        Commands::Validate { files, strict } => {
            let config = validate::ValidateConfig {
                files,
                default_period,
                strict,
                verbose: cli.verbose,
            };
            validate::validate(config)
        }
    }
}

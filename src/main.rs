//! Main CLI application for the crossword generator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossword_csp::{
    config::{CliOverrides, OutputFormat, Settings},
    crossword::{create_example_puzzles, load_crossword_from_file, load_vocabulary_from_file},
    generate::{CrosswordProblem, Solution, SolutionValidator},
    utils::{ColorOutput, SolutionFormatter},
};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "crossword")]
#[command(about = "Crossword generator using constraint propagation and backtracking search")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a crossword structure with words
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Structure file (overrides config)
        #[arg(short, long)]
        structure: Option<PathBuf>,

        /// Words file (overrides config)
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Output file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Split the search across threads
        #[arg(short, long)]
        parallel: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and puzzle files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Check a saved JSON solution against a structure and word list
    Validate {
        /// Solution file produced with `--format json`
        #[arg(long)]
        solution: PathBuf,

        /// Structure file
        #[arg(short, long)]
        structure: PathBuf,

        /// Words file
        #[arg(short, long)]
        words: PathBuf,
    },

    /// Report slots, crossings and candidate counts after propagation
    Analyze {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Structure file (overrides config)
        #[arg(short, long)]
        structure: Option<PathBuf>,

        /// Words file (overrides config)
        #[arg(short, long)]
        words: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Solve { verbose: true, .. });
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Solve {
            config,
            structure,
            words,
            output,
            format,
            parallel,
            verbose,
        } => {
            let overrides = CliOverrides {
                structure_file: structure,
                words_file: words,
                output_file: output,
                format,
                parallel,
            };
            solve_command(config, overrides, verbose)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Validate {
            solution,
            structure,
            words,
        } => validate_command(solution, structure, words),
        Commands::Analyze {
            config,
            structure,
            words,
        } => {
            let overrides = CliOverrides {
                structure_file: structure,
                words_file: words,
                ..CliOverrides::default()
            };
            analyze_command(config, overrides)
        }
    }
}

/// Load the config file if present, otherwise fall back to defaults, then apply overrides
fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;
    Ok(settings)
}

fn solve_command(config_path: PathBuf, overrides: CliOverrides, verbose: bool) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;

    if verbose {
        println!("Configuration:");
        println!("  Structure file: {}", settings.input.structure_file.display());
        println!("  Words file: {}", settings.input.words_file.display());
        println!("  Variable ordering: {:?}", settings.solver.variable_ordering);
        println!("  Value ordering: {:?}", settings.solver.value_ordering);
        println!("  LCV scoring: {:?}", settings.solver.lcv_scoring);
        println!("  Parallel: {}", settings.solver.parallel);
        println!();
    }

    let start_time = Instant::now();
    let problem =
        CrosswordProblem::new(settings.clone()).context("Failed to create crossword problem")?;
    let solution = problem.solve().context("Failed to fill crossword")?;

    let Some(solution) = solution else {
        println!("{}", ColorOutput::warning("No solution."));
        return Ok(());
    };

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Found a fill in {:.3}s",
            start_time.elapsed().as_secs_f64()
        ))
    );
    println!();
    print!("{}", SolutionFormatter::format_solution(&solution));

    if verbose {
        println!();
        print!("{}", SolutionFormatter::format_entries(&solution));
        println!();
        print!("{}", solution.statistics);
    }

    if let Some(output_file) = &settings.output.output_file {
        SolutionFormatter::save_solution(&solution, output_file, settings.output.format)
            .context("Failed to save solution")?;
        println!(
            "{}",
            ColorOutput::success(&format!("Solution saved to {}", output_file.display()))
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let puzzle_dir = directory.join("puzzles");
    let output_dir = directory.join("output");

    for dir in [&config_dir, &puzzle_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut default_settings = Settings::default();
        default_settings.input.structure_file = puzzle_dir.join("structure0.txt");
        default_settings.input.words_file = puzzle_dir.join("words0.txt");
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_puzzles(&puzzle_dir).context("Failed to create example puzzles")?;
    println!("Created example puzzles in: {}", puzzle_dir.display());

    // A variant that writes an image of the fill
    let mut svg_settings = Settings::default();
    svg_settings.input.structure_file = puzzle_dir.join("structure0.txt");
    svg_settings.input.words_file = puzzle_dir.join("words0.txt");
    svg_settings.output.format = OutputFormat::Svg;
    svg_settings.output.output_file = Some(output_dir.join("structure0.svg"));
    svg_settings.to_file(&config_dir.join("svg.yaml"))?;

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your structures and word lists to {}", puzzle_dir.display());
    println!("3. Run: crossword solve --config {}", config_path.display());

    Ok(())
}

fn validate_command(solution_path: PathBuf, structure_path: PathBuf, words_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("Validating solution..."));

    let crossword = load_crossword_from_file(&structure_path)?;
    let vocabulary = load_vocabulary_from_file(&words_path)?;
    let solution = Solution::load_from_file(&solution_path)
        .with_context(|| format!("Failed to load solution from {}", solution_path.display()))?;

    let validator = SolutionValidator::new(&crossword, &vocabulary);
    let result = validator
        .validate_solution(&solution)
        .context("Solution does not match the structure")?;

    println!("{}", result);

    if result.is_valid {
        println!("{}", ColorOutput::success("Solution is valid!"));
    } else {
        println!("{}", ColorOutput::error("Solution is invalid"));
        if let Some(error) = result.error_message {
            println!("Error: {}", error);
        }
    }

    Ok(())
}

fn analyze_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    println!("{}", ColorOutput::info("Analyzing crossword..."));

    let settings = load_settings(&config_path, &overrides)?;
    let problem =
        CrosswordProblem::new(settings).context("Failed to create problem for analysis")?;

    let crossword = problem.crossword();
    println!("Structure ({}x{}):", crossword.width, crossword.height);
    println!("{}", SolutionFormatter::format_crossword_with_coords(crossword));

    let report = problem.analyze();
    println!("{}", report);

    if !report.arc_consistent {
        println!("{}", ColorOutput::warning("Propagation emptied a slot: no fill exists"));
    }

    Ok(())
}

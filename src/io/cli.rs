//! Command-line interface for running puzzle layouts
//!
//! Processes a layout file or a directory of layouts: optional seeded
//! scramble, an explicit tilt sequence, and an auto-solve loop driven by the
//! misplacement heuristic, with optional PNG export of the final board.

use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

use crate::engine::puzzle::Puzzle;
use crate::engine::tilt::Direction;
use crate::io::configuration::{DEFAULT_MAX_AUTO_TILTS, DEFAULT_SEED, OUTPUT_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::layout::load_puzzle;
use crate::io::progress::ProgressManager;
use crate::io::visualization::export_snapshot_as_png;

#[derive(Parser)]
#[command(name = "tiltboard")]
#[command(
    author,
    version,
    about = "Run sliding-tile puzzle layouts through the tilt engine"
)]
/// Command-line arguments for the layout runner
pub struct Cli {
    /// Layout file or directory of layout files to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Tilt sequence to apply first, e.g. "llur"
    #[arg(short, long)]
    pub moves: Option<String>,

    /// Number of random scramble tilts to apply before anything else
    #[arg(short = 'n', long, default_value_t = 0)]
    pub scramble: usize,

    /// Random seed for reproducible scrambles
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Solve with the misplacement heuristic after moves are applied
    #[arg(short = 'a', long)]
    pub auto: bool,

    /// Maximum auto-tilt iterations per layout
    #[arg(short, long, default_value_t = DEFAULT_MAX_AUTO_TILTS)]
    pub iterations: usize,

    /// Export the final board as PNG next to the layout file
    #[arg(short, long)]
    pub export: bool,

    /// Suppress progress and board output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates layout processing with progress tracking
pub struct LayoutRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl LayoutRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process layouts according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, layout parsing, a tilt symbol,
    /// or an export fails.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            Self::process_layout(
                file,
                &self.cli,
                self.progress_manager.as_mut(),
            )?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            Ok(vec![self.cli.target.clone()])
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("txt") {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a layout file or directory",
            ))
        }
    }

    fn process_layout(
        path: &Path,
        cli: &Cli,
        mut progress: Option<&mut ProgressManager>,
    ) -> Result<()> {
        let mut puzzle = load_puzzle(path)?;

        if cli.scramble > 0 {
            scramble(&mut puzzle, cli.scramble, cli.seed);
        }

        if let Some(ref moves) = cli.moves {
            for symbol in moves.chars() {
                puzzle.tilt_symbol(symbol)?;
            }
        }

        if cli.auto {
            if let Some(ref mut pm) = progress {
                pm.start_layout(path, cli.iterations);
            }
            let mut solved = puzzle.is_goal();
            for iteration in 1..=cli.iterations {
                if solved {
                    break;
                }
                puzzle.auto_tilt();
                solved = puzzle.is_goal();
                if let Some(ref pm) = progress {
                    pm.update_iteration(iteration, puzzle.misplaced_count());
                }
            }
            if let Some(ref mut pm) = progress {
                pm.complete_layout(solved);
            }
        }

        if !cli.quiet {
            print_board(path, &puzzle);
        }

        if cli.export {
            let output = output_path(path);
            export_snapshot_as_png(
                &puzzle.snapshot(),
                output
                    .to_str()
                    .ok_or_else(|| invalid_parameter("target", &output.display(), &"invalid output path"))?,
            )?;
        }

        Ok(())
    }
}

// Allow print for user-facing board output
#[allow(clippy::print_stdout)]
fn print_board(path: &Path, puzzle: &Puzzle) {
    println!("{}:", path.display());
    for row in puzzle.snapshot().symbol_rows() {
        println!("  {row}");
    }
    println!(
        "  misplaced: {}, goal: {}",
        puzzle.misplaced_count(),
        puzzle.is_goal()
    );
}

/// Apply reproducible random tilts
pub fn scramble(puzzle: &mut Puzzle, count: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..count {
        let direction = Direction::ALL
            .get(rng.random_range(0..Direction::ALL.len()))
            .copied()
            .unwrap_or(Direction::Left);
        puzzle.tilt(direction);
    }
}

fn output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

    input_path
        .parent()
        .map_or_else(|| PathBuf::from(&output_name), |parent| parent.join(&output_name))
}

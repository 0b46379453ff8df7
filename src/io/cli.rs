//! Command-line interface for running and recording searches

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::board::state::BoardState;
use crate::io::configuration::{
    DEFAULT_FRAME_DELAY_MS, DEFAULT_STEP_DELAY_MS, MAX_ANIMATED_BOARD,
};
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::io::image::export_solution_as_png;
use crate::io::pacing::StepPacer;
use crate::io::progress::SearchProgress;
use crate::io::report;
use crate::io::visualization::AnimationCapture;
use crate::search::observer::CompositeObserver;
use crate::search::solver::{SearchOutcome, Solver};

#[derive(Parser)]
#[command(name = "queentrace")]
#[command(
    author,
    version,
    about = "Enumerate N-queens solutions with an animated search replay"
)]
/// Command-line arguments for the search tool
pub struct Cli {
    /// Board dimension N (rows, columns, and queens)
    #[arg(value_name = "SIZE", allow_negative_numbers = true)]
    pub size: i64,

    /// Record the exploration as an animated GIF at this path
    #[arg(short, long, value_name = "PATH")]
    pub gif: Option<PathBuf>,

    /// Save the first discovered solution as a PNG at this path
    #[arg(short, long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Delay between GIF frames in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub frame_delay: u32,

    /// Pause after every search step in milliseconds
    #[arg(short = 'd', long, default_value_t = DEFAULT_STEP_DELAY_MS)]
    pub step_delay: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print only the solution count, not the boards
    #[arg(short = 'c', long)]
    pub count_only: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one search according to CLI arguments
pub struct SearchRunner {
    cli: Cli,
}

impl SearchRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Validate input, run the search, and emit the requested outputs
    ///
    /// # Errors
    ///
    /// Returns an error if the board size is not positive, the report
    /// cannot be written, or a requested export fails.
    pub fn run(&mut self) -> Result<()> {
        let size = self.board_size()?;
        let board = BoardState::new(size)?;

        let mut progress = self
            .cli
            .should_show_progress()
            .then(SearchProgress::new);
        let mut pacer =
            (self.cli.step_delay > 0).then(|| StepPacer::from_millis(self.cli.step_delay));
        let mut capture = self.animation_capture(size);

        let mut observers = CompositeObserver::new();
        if let Some(ref mut observer) = progress {
            observers.attach(observer);
        }
        if let Some(ref mut observer) = pacer {
            observers.attach(observer);
        }
        if let Some(ref mut observer) = capture {
            observers.attach(observer);
        }

        let outcome = Solver::with_observer(board, observers).run();

        self.write_report(&outcome)?;
        self.export_animation(capture.as_ref())?;
        self.export_still(&outcome)?;

        Ok(())
    }

    fn board_size(&self) -> Result<usize> {
        usize::try_from(self.cli.size)
            .ok()
            .filter(|&size| size > 0)
            .ok_or(SolverError::InvalidBoardSize {
                size: self.cli.size,
            })
    }

    // Allow print for user feedback when animation is skipped
    #[allow(clippy::print_stderr)]
    fn animation_capture(&self, size: usize) -> Option<AnimationCapture> {
        self.cli.gif.as_ref()?;

        if size > MAX_ANIMATED_BOARD {
            if !self.cli.quiet {
                eprintln!(
                    "Board size {size} exceeds the animation limit of {MAX_ANIMATED_BOARD} (continuing without GIF capture)"
                );
            }
            return None;
        }

        Some(AnimationCapture::new(size))
    }

    fn write_report(&self, outcome: &SearchOutcome) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        if self.cli.count_only {
            report::write_total(&mut out, &outcome.solutions)?;
        } else {
            report::write_report(&mut out, &outcome.solutions)?;
        }
        out.flush().map_err(|source| SolverError::ReportWrite { source })
    }

    fn export_animation(&self, capture: Option<&AnimationCapture>) -> Result<()> {
        let (Some(path), Some(capture)) = (&self.cli.gif, capture) else {
            return Ok(());
        };

        let target = path
            .to_str()
            .ok_or_else(|| invalid_parameter("gif", &path.display(), &"path is not valid UTF-8"))?;
        capture.export_gif(target, self.cli.frame_delay)
    }

    // Allow print for user feedback when no solution exists to save
    #[allow(clippy::print_stderr)]
    fn export_still(&self, outcome: &SearchOutcome) -> Result<()> {
        let Some(path) = &self.cli.png else {
            return Ok(());
        };

        let Some(first) = outcome.solutions.first() else {
            if !self.cli.quiet {
                eprintln!("No solutions found, skipping PNG export");
            }
            return Ok(());
        };

        let target = path
            .to_str()
            .ok_or_else(|| invalid_parameter("png", &path.display(), &"path is not valid UTF-8"))?;
        export_solution_as_png(first, target)
    }
}

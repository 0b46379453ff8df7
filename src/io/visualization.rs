//! Frame capture and GIF generation for search animation

use image::Frame;

use crate::board::state::BoardState;
use crate::io::configuration::{FINAL_FRAME_HOLD_FACTOR, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, SolverError};
use crate::io::image::render_board;
use crate::search::observer::{SearchEvent, SearchObserver, SearchSignal};

/// One recorded board mutation
#[derive(Debug, Clone, Copy)]
struct BoardChange {
    row: usize,
    /// Column the change affects
    col: usize,
    /// `false` marks a removal
    placed: bool,
}

/// Records board mutations for replay as an animated GIF
///
/// The capture is itself an observer: it stores every placement and
/// removal in mutation order and reconstructs the board frame by frame at
/// export time, so the animation reproduces the search exactly.
pub struct AnimationCapture {
    size: usize,
    changes: Vec<BoardChange>,
}

impl AnimationCapture {
    /// Capture for a board of the given dimension
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            changes: Vec::new(),
        }
    }

    /// Number of recorded mutations
    pub const fn change_count(&self) -> usize {
        self.changes.len()
    }

    /// Export the recorded run as a GIF with automatic frame skipping
    ///
    /// Skips intermediate frames when the requested delay is below what
    /// GIF viewers reliably honor, keeping the apparent speed of the
    /// animation. The last frame is held longer so the final board state
    /// stays visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No board mutations were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.changes.is_empty() {
            return Err(SolverError::NoEventsCaptured);
        }

        let requested_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = requested_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if requested_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(requested_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| SolverError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| SolverError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let mut queens: Vec<Option<usize>> = vec![None; self.size];
        let mut frames = Vec::new();

        frames.push(self.render_frame(&queens, delay_ms));

        for (step, change) in self.changes.iter().enumerate() {
            if let Some(slot) = queens.get_mut(change.row) {
                *slot = change.placed.then_some(change.col);
            }

            if (step + 1) % skip_factor == 0 {
                frames.push(self.render_frame(&queens, delay_ms));
            }
        }

        if self.changes.len() % skip_factor != 0 {
            frames.push(self.render_frame(&queens, delay_ms));
        }

        // Hold the last frame so the fully unwound board stays visible
        if let Some(last) = frames.last().map(|frame| frame.buffer().clone()) {
            frames.push(Frame::from_parts(
                last,
                0,
                0,
                image::Delay::from_numer_denom_ms(delay_ms * FINAL_FRAME_HOLD_FACTOR, 1),
            ));
        }

        frames
    }

    fn render_frame(&self, queens: &[Option<usize>], delay_ms: u32) -> Frame {
        Frame::from_parts(
            render_board(self.size, queens),
            0,
            0,
            image::Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }
}

impl SearchObserver for AnimationCapture {
    fn on_state_changed(&mut self, event: SearchEvent, _board: &BoardState) -> SearchSignal {
        match event {
            SearchEvent::Placed { row, col } => self.changes.push(BoardChange {
                row,
                col,
                placed: true,
            }),
            SearchEvent::Removed { row, col } => self.changes.push(BoardChange {
                row,
                col,
                placed: false,
            }),
            SearchEvent::SolutionFound { .. } => {}
        }
        SearchSignal::Continue
    }
}

//! Board rasterization and PNG export

use image::{Rgba, RgbaImage};

use crate::board::solution::Solution;
use crate::io::configuration::{CELL_PIXELS, DARK_SQUARE, LIGHT_SQUARE, QUEEN_FILL};
use crate::io::error::{Result, SolverError};

/// Render a board occupancy as a checkerboard raster
///
/// Squares alternate light and dark; an occupied cell carries a centered
/// diamond in the queen color. `queens` is row-indexed, one optional
/// column per row, and rows beyond its length render empty.
pub(crate) fn render_board(size: usize, queens: &[Option<usize>]) -> RgbaImage {
    let side = (size * CELL_PIXELS) as u32;
    let center = CELL_PIXELS / 2;
    let radius = CELL_PIXELS / 4;
    let mut img = RgbaImage::new(side, side);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let row = y as usize / CELL_PIXELS;
        let col = x as usize / CELL_PIXELS;
        let local_x = x as usize % CELL_PIXELS;
        let local_y = y as usize % CELL_PIXELS;

        let occupied = queens.get(row).copied().flatten() == Some(col);
        let in_crown = local_x.abs_diff(center) + local_y.abs_diff(center) <= radius;

        let rgba = if occupied && in_crown {
            QUEEN_FILL
        } else if (row + col) % 2 == 0 {
            LIGHT_SQUARE
        } else {
            DARK_SQUARE
        };
        *pixel = Rgba(rgba);
    }

    img
}

/// Export a single solution as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_solution_as_png(solution: &Solution, output_path: &str) -> Result<()> {
    let queens: Vec<Option<usize>> = solution.columns().iter().copied().map(Some).collect();
    let img = render_board(solution.size(), &queens);

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| SolverError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}

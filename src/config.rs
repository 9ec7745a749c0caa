use thiserror::Error;

/// Number of body segments a freshly spawned snake has.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Default playfield width in pixels.
pub const DEFAULT_GRID_WIDTH: u16 = 600;

/// Default playfield height in pixels.
pub const DEFAULT_GRID_HEIGHT: u16 = 600;

/// Default edge length of one grid cell in pixels.
pub const DEFAULT_CELL_SIZE: u16 = 25;

/// Smallest playable field edge, in cells.
///
/// The initial body is three cells laid out horizontally from the center, so
/// anything narrower cannot host a legal starting position.
pub const MIN_PLAYFIELD_CELLS: u16 = 4;

/// Glyph for the snake head.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Glyph for snake body segments.
pub const GLYPH_SNAKE_BODY: &str = "▓";

/// Glyph for food.
pub const GLYPH_FOOD: &str = "●";

/// Rejected session or difficulty configuration.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("speed level {0} is outside the valid range 1..=9")]
    SpeedOutOfRange(u8),
    #[error("grid {width}x{height} is not a whole multiple of cell size {cell_size}")]
    GridMisaligned {
        width: u16,
        height: u16,
        cell_size: u16,
    },
    #[error("grid of {cols}x{rows} cells is below the {MIN_PLAYFIELD_CELLS}-cell minimum")]
    GridTooSmall { cols: u16, rows: u16 },
}

/// Immutable playfield dimensions for one game session.
///
/// `width` and `height` are in pixels; the simulation works in logical cell
/// coordinates, so the playable field is `width / cell_size` columns by
/// `height / cell_size` rows.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    width: u16,
    height: u16,
    cell_size: u16,
}

impl Grid {
    /// Creates a grid, validating cell alignment and minimum size.
    pub fn new(width: u16, height: u16, cell_size: u16) -> Result<Self, ConfigError> {
        if width == 0
            || height == 0
            || cell_size == 0
            || width % cell_size != 0
            || height % cell_size != 0
        {
            return Err(ConfigError::GridMisaligned {
                width,
                height,
                cell_size,
            });
        }

        let grid = Self {
            width,
            height,
            cell_size,
        };
        if grid.cols() < MIN_PLAYFIELD_CELLS || grid.rows() < MIN_PLAYFIELD_CELLS {
            return Err(ConfigError::GridTooSmall {
                cols: grid.cols(),
                rows: grid.rows(),
            });
        }

        Ok(grid)
    }

    /// Returns the playfield width in cells.
    #[must_use]
    pub fn cols(self) -> u16 {
        self.width / self.cell_size
    }

    /// Returns the playfield height in cells.
    #[must_use]
    pub fn rows(self) -> u16 {
        self.height / self.cell_size
    }

    /// Returns the total number of cells in the playfield.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.cols()) * usize::from(self.rows())
    }

    /// Returns the edge length of one cell in pixels.
    #[must_use]
    pub fn cell_size(self) -> u16 {
        self.cell_size
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, Grid};

    #[test]
    fn default_grid_is_24_by_24_cells() {
        let grid = Grid::default();
        assert_eq!(grid.cols(), 24);
        assert_eq!(grid.rows(), 24);
        assert_eq!(grid.total_cells(), 576);
    }

    #[test]
    fn misaligned_grid_is_rejected() {
        assert_eq!(
            Grid::new(601, 600, 25),
            Err(ConfigError::GridMisaligned {
                width: 601,
                height: 600,
                cell_size: 25,
            })
        );
        assert!(Grid::new(600, 0, 25).is_err());
        assert!(Grid::new(600, 600, 0).is_err());
    }

    #[test]
    fn undersized_grid_is_rejected() {
        assert_eq!(
            Grid::new(75, 600, 25),
            Err(ConfigError::GridTooSmall { cols: 3, rows: 24 })
        );
    }

    #[test]
    fn minimum_grid_is_accepted() {
        let grid = Grid::new(100, 100, 25).expect("4x4 cells should be valid");
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.rows(), 4);
    }
}

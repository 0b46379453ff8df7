//! Counters describing the shape of a search run

use std::fmt;

/// Event tallies accumulated while the tree is explored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Queens placed across the whole run
    pub placements: u64,
    /// Queens removed while backtracking
    pub removals: u64,
    /// Complete placements recorded
    pub solutions: u64,
    /// Candidate cells rejected by the safety check
    pub rejected: u64,
}

impl SearchStats {
    /// Queens still on the board implied by the event ledger
    ///
    /// Placements never trail removals, so the difference is the live
    /// queen count; it returns to zero once the top-level search unwinds.
    pub const fn queens_on_board(&self) -> u64 {
        self.placements - self.removals
    }

    /// Total observable events, including solution records
    pub const fn events(&self) -> u64 {
        self.placements + self.removals + self.solutions
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search statistics:")?;
        writeln!(f, "  Placements: {}", self.placements)?;
        writeln!(f, "  Removals: {}", self.removals)?;
        writeln!(f, "  Rejected candidates: {}", self.rejected)?;
        write!(f, "  Solutions: {}", self.solutions)
    }
}

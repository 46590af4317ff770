use std::fmt;

use super::{Grid, Snapshot, count_neighbors};
use crate::error::{SimError, SimResult};

/// Trait for cellular automaton rules.
/// A rule reads the whole grid and returns the next generation without mutating it.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Compute every cell's next state from the current grid
    fn next_generation(&self, grid: &Grid) -> Snapshot;
}

/// Neighbor-count rule in the Game of Life family.
/// Lonely cells (0-1 neighbors) and crowded cells (4+) die,
/// cells with 2-3 survive and empty cells with exactly 3 are born.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl ConwayRule {
    pub const fn evolve(filled: bool, neighbors: u8) -> bool {
        match (filled, neighbors) {
            (true, 0..=1) => false,
            (true, 2 | 3) => true,
            (true, _) => false,
            (false, 3) => true,
            (false, _) => false,
        }
    }
}

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - 8-neighbor, edges do not wrap"
    }

    fn next_generation(&self, grid: &Grid) -> Snapshot {
        let (rows, cols) = grid.dimensions();
        let next = grid
            .iter()
            .map(|(i, j, cell)| Self::evolve(cell.is_filled(), count_neighbors(grid, i, j)))
            .collect();
        Snapshot::from_parts(rows, cols, next)
    }
}

/// Elementary rule 30 applied to each row on its own.
/// Only the left and right neighbors in the same row matter; cells past
/// either end of a row read as unfilled.
#[derive(Clone, Copy, Debug, Default)]
pub struct ElementaryRule30;

impl ElementaryRule30 {
    pub const fn evolve(left: bool, center: bool, right: bool) -> bool {
        left ^ (center || right)
    }

    fn next_row(row: &[bool]) -> impl Iterator<Item = bool> + '_ {
        (0..row.len()).map(move |j| {
            let left = j > 0 && row[j - 1];
            let right = j + 1 < row.len() && row[j + 1];
            Self::evolve(left, row[j], right)
        })
    }
}

impl Rule for ElementaryRule30 {
    fn name(&self) -> &'static str {
        "Rule 30"
    }

    fn description(&self) -> &'static str {
        "Elementary 1D rule, every row independent"
    }

    fn next_generation(&self, grid: &Grid) -> Snapshot {
        let current = grid.states();
        let (rows, cols) = current.dimensions();
        let next = current.rows().flat_map(Self::next_row).collect();
        Snapshot::from_parts(rows, cols, next)
    }
}

/// The closed set of rules a simulation can run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum RuleKind {
    #[default]
    Conway,
    ElementaryRule30,
}

impl RuleKind {
    /// Get all available rules in selector order
    pub const fn all() -> [RuleKind; 2] {
        [RuleKind::Conway, RuleKind::ElementaryRule30]
    }

    /// Map a UI selector value (0 or 1) to a rule
    pub fn from_selector(value: usize) -> SimResult<Self> {
        Self::all()
            .get(value)
            .copied()
            .ok_or(SimError::InvalidRuleSelection(value))
    }

    pub const fn selector(self) -> usize {
        match self {
            RuleKind::Conway => 0,
            RuleKind::ElementaryRule30 => 1,
        }
    }

    /// The rule implementation, resolved once per run
    pub fn rule(self) -> &'static dyn Rule {
        match self {
            RuleKind::Conway => &ConwayRule,
            RuleKind::ElementaryRule30 => &ElementaryRule30,
        }
    }

    /// The other rule, for a two-state selector button
    pub const fn next(self) -> Self {
        match self {
            RuleKind::Conway => RuleKind::ElementaryRule30,
            RuleKind::ElementaryRule30 => RuleKind::Conway,
        }
    }
}

impl TryFrom<usize> for RuleKind {
    type Error = SimError;

    fn try_from(value: usize) -> SimResult<Self> {
        Self::from_selector(value)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&[u8]]) -> Grid {
        let mut grid = Grid::new(rows.len(), rows[0].len(), 20);
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                grid.set_filled(i, j, v == 1).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_conway_rules() {
        // Underpopulation
        assert!(!ConwayRule::evolve(true, 0));
        assert!(!ConwayRule::evolve(true, 1));

        // Survival
        assert!(ConwayRule::evolve(true, 2));
        assert!(ConwayRule::evolve(true, 3));

        // Overpopulation
        assert!(!ConwayRule::evolve(true, 4));
        assert!(!ConwayRule::evolve(true, 8));

        // Birth only with exactly three
        assert!(ConwayRule::evolve(false, 3));
        assert!(!ConwayRule::evolve(false, 2));
        assert!(!ConwayRule::evolve(false, 4));
    }

    #[test]
    fn test_conway_empty_grid_is_fixed_point() {
        let grid = Grid::new(6, 7, 20);
        let next = ConwayRule.next_generation(&grid);
        assert_eq!(next.dimensions(), (6, 7));
        assert_eq!(next.count_filled(), 0);
    }

    #[test]
    fn test_conway_lonely_cell_dies() {
        let grid = grid_from(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]);
        let next = ConwayRule.next_generation(&grid);
        assert!(!next.get(1, 1));
        assert_eq!(next.count_filled(), 0);
    }

    #[test]
    fn test_conway_full_block_center_dies() {
        let grid = grid_from(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);
        let next = ConwayRule.next_generation(&grid);
        assert!(!next.get(1, 1));
        // Corners have three filled neighbors and survive
        assert!(next.get(0, 0));
        assert!(next.get(2, 2));
        // Edge midpoints have five and die
        assert!(!next.get(0, 1));
    }

    #[test]
    fn test_conway_blinker_oscillates() {
        let grid = grid_from(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);
        let next = ConwayRule.next_generation(&grid);
        assert!(next.get(1, 2) && next.get(2, 2) && next.get(3, 2));
        assert_eq!(next.count_filled(), 3);
    }

    #[test]
    fn test_conway_does_not_wrap() {
        // A vertical blinker on the left edge loses its off-grid half
        let grid = grid_from(&[&[1, 0, 0], &[1, 0, 0], &[1, 0, 0]]);
        let next = ConwayRule.next_generation(&grid);
        assert!(next.get(1, 0));
        assert!(next.get(1, 1));
        assert!(!next.get(1, 2));
        assert_eq!(next.count_filled(), 2);
    }

    #[test]
    fn test_rule30_truth_table() {
        let table = [
            ((true, true, true), false),
            ((true, true, false), false),
            ((true, false, true), false),
            ((true, false, false), true),
            ((false, true, true), true),
            ((false, true, false), true),
            ((false, false, true), true),
            ((false, false, false), false),
        ];
        for ((left, center, right), expected) in table {
            assert_eq!(
                ElementaryRule30::evolve(left, center, right),
                expected,
                "left={left} center={center} right={right}"
            );
        }
    }

    #[test]
    fn test_rule30_single_seed_row() {
        let grid = grid_from(&[&[1, 0, 0, 0, 0]]);
        let next = ElementaryRule30.next_generation(&grid);
        let row: Vec<bool> = (0..5).map(|j| next.get(0, j)).collect();
        // Column 0 has no left neighbor, so it keeps its state; column 1 sees a filled left
        assert_eq!(row, vec![true, true, false, false, false]);

        let prev = [true, false, false, false, false];
        for j in 1..4 {
            assert_eq!(next.get(0, j), prev[j - 1] ^ (prev[j] || prev[j + 1]));
        }
    }

    #[test]
    fn test_rule30_right_boundary_is_unfilled() {
        let grid = grid_from(&[&[0, 0, 0, 0, 1]]);
        let next = ElementaryRule30.next_generation(&grid);
        let row: Vec<bool> = (0..5).map(|j| next.get(0, j)).collect();
        assert_eq!(row, vec![false, false, false, true, true]);
    }

    #[test]
    fn test_rule30_rows_are_independent() {
        let grid = grid_from(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]);
        let next = ElementaryRule30.next_generation(&grid);
        // Rows above and below never see the seed
        assert!((0..3).all(|j| !next.get(0, j) && !next.get(2, j)));
        assert_eq!((0..3).map(|j| next.get(1, j)).collect::<Vec<_>>(), vec![true, true, true]);
    }

    #[test]
    fn test_rules_do_not_mutate_grid() {
        let grid = grid_from(&[&[1, 1, 0], &[0, 1, 1], &[1, 0, 1]]);
        let before = grid.clone();
        for kind in RuleKind::all() {
            let _ = kind.rule().next_generation(&grid);
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_snapshot_depends_only_on_state_at_call() {
        let mut grid = grid_from(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
        let original = grid.clone();
        let snapshot = ConwayRule.next_generation(&grid);

        // Editing after the computation leaves the computed snapshot untouched
        grid.set_filled(0, 0, true).unwrap();
        grid.set_filled(2, 2, true).unwrap();
        assert_eq!(snapshot, ConwayRule.next_generation(&original));
        assert_ne!(snapshot, ConwayRule.next_generation(&grid));
    }

    #[test]
    fn test_empty_grid_for_every_rule() {
        let grid = Grid::new(0, 0, 20);
        for kind in RuleKind::all() {
            assert_eq!(kind.rule().next_generation(&grid).dimensions(), (0, 0));
        }
    }

    #[test]
    fn test_selector_mapping() {
        assert_eq!(RuleKind::from_selector(0), Ok(RuleKind::Conway));
        assert_eq!(RuleKind::try_from(1), Ok(RuleKind::ElementaryRule30));
        assert_eq!(RuleKind::from_selector(2), Err(SimError::InvalidRuleSelection(2)));
        for kind in RuleKind::all() {
            assert_eq!(RuleKind::from_selector(kind.selector()), Ok(kind));
            assert_eq!(kind.next().next(), kind);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = RuleKind::all().iter().map(|k| k.rule().name()).collect();
        assert_ne!(names[0], names[1]);
        assert_eq!(RuleKind::Conway.to_string(), "Conway");

        let descriptions: Vec<_> = RuleKind::all().iter().map(|k| k.rule().description()).collect();
        assert!(descriptions.iter().all(|d| !d.is_empty()));
        assert_ne!(descriptions[0], descriptions[1]);
    }
}

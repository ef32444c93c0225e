use std::collections::BTreeSet;

use crate::components::{Bounds, Pos};
use crate::level::Maze;

/// Pellets still on the board, keyed by their top-left pixel. Only shrinks.
#[derive(Clone, Debug, Default)]
pub struct PelletField {
    remaining: BTreeSet<Pos>,
}

impl PelletField {
    /// One pellet on every open cell.
    pub fn from_maze(maze: &Maze) -> Self {
        let remaining = maze
            .open_cells()
            .map(|(col, row)| Pos::from_cell(col as i32, row as i32))
            .collect();
        Self { remaining }
    }

    pub fn from_positions(positions: impl IntoIterator<Item = Pos>) -> Self {
        Self {
            remaining: positions.into_iter().collect(),
        }
    }

    /// Removes every pellet whose box overlaps `agent` and returns how many
    /// were eaten.
    pub fn collect(&mut self, agent: Bounds) -> usize {
        let before = self.remaining.len();
        self.remaining
            .retain(|pellet| !agent.overlaps(&pellet.bounds()));
        before - self.remaining.len()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.remaining.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.remaining.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::GRID_SIZE;

    #[test]
    fn fills_open_cells_only() {
        let maze = Maze::builtin();
        let field = PelletField::from_maze(&maze);
        assert_eq!(field.len(), maze.open_cells().count());
        assert!(field.contains(Pos::from_cell(1, 1)));
        assert!(!field.contains(Pos::from_cell(0, 0)));
        assert!(field.iter().all(|p| !maze.collides_with_wall(p)));
    }

    #[test]
    fn collect_removes_overlapping_pellet() {
        let mut field = PelletField::from_positions([Pos::new(20, 20), Pos::new(40, 20)]);
        assert_eq!(field.collect(Pos::new(20, 20).bounds()), 1);
        assert!(!field.contains(Pos::new(20, 20)));
        assert!(field.contains(Pos::new(40, 20)));
        assert_eq!(field.collect(Pos::new(20, 20).bounds()), 0);
    }

    #[test]
    fn offset_box_can_eat_several() {
        let mut field = PelletField::from_positions([
            Pos::new(20, 20),
            Pos::new(40, 20),
            Pos::new(60, 20),
        ]);
        let straddling = Pos::new(20 + GRID_SIZE / 2, 20).bounds();
        assert_eq!(field.collect(straddling), 2);
        assert_eq!(field.iter().collect::<Vec<_>>(), vec![Pos::new(60, 20)]);
    }
}

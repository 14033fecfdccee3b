use core::fmt;
use std::ops::{Add, Index, IndexMut};

pub const SIZE: i32 = 10;
pub const TOTAL_CELLS: u32 = (SIZE * SIZE) as u32;

pub static NEIGHBOUR_OFFSETS: [GridPos; 8] = [
  GridPos::new(-1, -1),
  GridPos::new(-1, 0),
  GridPos::new(-1, 1),
  GridPos::new(0, -1),
  GridPos::new(0, 1),
  GridPos::new(1, -1),
  GridPos::new(1, 0),
  GridPos::new(1, 1),
];

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
  pub row: i32,
  pub col: i32,
}

impl GridPos {
  pub const fn new(row: i32, col: i32) -> GridPos {
    GridPos { row, col }
  }

  pub fn in_bounds(self) -> bool {
    (0..SIZE).contains(&self.row) && (0..SIZE).contains(&self.col)
  }

  pub fn neighbours(self) -> impl Iterator<Item = GridPos> {
    NEIGHBOUR_OFFSETS.iter().map(move |&offset| self + offset)
  }
}

impl fmt::Debug for GridPos {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.row, self.col)
  }
}

impl Add<GridPos> for GridPos {
  type Output = GridPos;

  fn add(self, rhs: GridPos) -> Self::Output {
    GridPos::new(self.row + rhs.row, self.col + rhs.col)
  }
}

pub fn positions() -> impl Iterator<Item = GridPos> {
  (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| GridPos::new(row, col)))
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
  fields: Vec<T>,
}

impl<T> Grid<T> {
  pub fn new(default: T) -> Self
  where
    T: Clone,
  {
    Self {
      fields: vec![default; TOTAL_CELLS as usize],
    }
  }

  fn pos_to_index(pos: GridPos) -> Option<usize> {
    match (usize::try_from(pos.row), usize::try_from(pos.col)) {
      (Ok(row), Ok(col)) if row < SIZE as usize && col < SIZE as usize => Some(row * SIZE as usize + col),
      _ => None,
    }
  }

  pub fn get(&self, pos: GridPos) -> Option<&T> {
    Self::pos_to_index(pos).and_then(|i| self.fields.get(i))
  }

  pub fn get_mut(&mut self, pos: GridPos) -> Option<&mut T> {
    Self::pos_to_index(pos).and_then(|i| self.fields.get_mut(i))
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.fields.iter()
  }
}

impl<T> Index<GridPos> for Grid<T> {
  type Output = T;

  fn index(&self, index: GridPos) -> &Self::Output {
    self
      .get(index)
      .unwrap_or_else(|| panic!("Cannot access position {:?} on a {}x{} board", index, SIZE, SIZE))
  }
}

impl<T> IndexMut<GridPos> for Grid<T> {
  fn index_mut(&mut self, index: GridPos) -> &mut T {
    self
      .get_mut(index)
      .unwrap_or_else(|| panic!("Cannot mut-access position {:?} on a {}x{} board", index, SIZE, SIZE))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn positions_cover_the_whole_board() {
    assert_eq!(positions().count(), TOTAL_CELLS as usize);
    assert!(positions().all(GridPos::in_bounds));
    assert_eq!(positions().next(), Some(GridPos::new(0, 0)));
    assert_eq!(positions().last(), Some(GridPos::new(9, 9)));
  }

  #[test]
  fn get_rejects_out_of_range_positions() {
    let grid = Grid::new(0u8);
    assert!(grid.get(GridPos::new(-1, 0)).is_none());
    assert!(grid.get(GridPos::new(0, -1)).is_none());
    assert!(grid.get(GridPos::new(10, 0)).is_none());
    assert!(grid.get(GridPos::new(0, 10)).is_none());
    assert!(grid.get(GridPos::new(9, 9)).is_some());
  }

  #[test]
  fn get_and_index_agree() {
    let mut grid = Grid::new(0u32);
    grid[GridPos::new(3, 7)] = 42;
    assert_eq!(grid.get(GridPos::new(3, 7)), Some(&42));
    assert_eq!(grid[GridPos::new(3, 7)], 42);
  }

  #[test]
  fn every_position_has_eight_neighbour_candidates() {
    for pos in positions() {
      assert_eq!(pos.neighbours().count(), 8);
    }
  }

  #[test]
  fn corner_keeps_three_in_bounds_neighbours() {
    let in_bounds: Vec<_> = GridPos::new(0, 0).neighbours().filter(|p| p.in_bounds()).collect();
    assert_eq!(in_bounds.len(), 3);
    assert!(in_bounds.contains(&GridPos::new(0, 1)));
    assert!(in_bounds.contains(&GridPos::new(1, 0)));
    assert!(in_bounds.contains(&GridPos::new(1, 1)));
  }
}

use core::fmt;

use rand::{Rng, RngCore};

pub mod board;

use board::{positions, Grid, GridPos, SIZE, TOTAL_CELLS};

pub const START_LIVES: u32 = 3;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Cell {
  Ground,
  Cleared(u8),
  Mine,
}

impl Cell {
  pub fn symbol(self) -> char {
    match self {
      Cell::Ground => '.',
      Cell::Cleared(mines) => (b'0' + mines) as char,
      Cell::Mine => 'X',
    }
  }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Density {
  SuperEasy,
  Easy,
  Medium,
  Hard,
}

impl Density {
  /// Probability that a cell stays free of a mine.
  pub fn ground_chance(self) -> f64 {
    match self {
      Density::SuperEasy => 0.97,
      Density::Easy => 0.90,
      Density::Medium => 0.80,
      Density::Hard => 0.60,
    }
  }

  pub fn from_name(name: &str) -> Option<Density> {
    match name {
      "supereasy" => Some(Density::SuperEasy),
      "easy" => Some(Density::Easy),
      "medium" => Some(Density::Medium),
      "hard" => Some(Density::Hard),
      _ => None,
    }
  }
}

#[derive(Clone, PartialEq, Eq)]
pub struct MineField {
  mines: Grid<bool>,
  count: u32,
}

impl MineField {
  pub fn plant(density: Density, rng: &mut dyn RngCore) -> Self {
    let mut mines = Grid::new(false);
    let mut count = 0;
    for pos in positions() {
      if rng.gen::<f64>() > density.ground_chance() {
        mines[pos] = true;
        count += 1;
      }
    }
    MineField { mines, count }
  }

  pub fn with_mines(mines: Grid<bool>) -> Self {
    let count = mines.iter().filter(|&&mine| mine).count() as u32;
    MineField { mines, count }
  }

  pub fn mine_count(&self) -> u32 {
    self.count
  }

  pub fn is_mine(&self, pos: GridPos) -> bool {
    *self.mines.get(pos).unwrap_or(&false)
  }

  pub fn adjacent_mines(&self, pos: GridPos) -> u8 {
    pos.neighbours().filter(|&neighbour| self.is_mine(neighbour)).count() as u8
  }
}

impl fmt::Debug for MineField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for row in 0..SIZE {
      for col in 0..SIZE {
        let symbol = if self.is_mine(GridPos::new(row, col)) { 'X' } else { '.' };
        write!(f, "{}", symbol)?;
      }
      writeln!(f)?;
    }

    Ok(())
  }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Status {
  Playing,
  Won,
  Lost,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Reveal {
  Hit,
  Safe(u8),
  Repeat,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Game {
  field: MineField,
  view: Grid<Cell>,
  lives: u32,
  score: u32,
}

impl Game {
  pub fn lives(&self) -> u32 {
    self.lives
  }

  pub fn score(&self) -> u32 {
    self.score
  }

  pub fn mine_count(&self) -> u32 {
    self.field.mine_count()
  }

  pub fn view(&self, pos: GridPos) -> Option<Cell> {
    self.view.get(pos).copied()
  }

  pub fn status(&self) -> Status {
    if self.lives == 0 {
      Status::Lost
    } else if self.score + self.field.mine_count() == TOTAL_CELLS {
      Status::Won
    } else {
      Status::Playing
    }
  }

  /// Opens the cell at `pos`. Returns `None` for positions off the board,
  /// leaving the game untouched. Re-opening an already revealed cell is
  /// reported as `Reveal::Repeat` and changes nothing either.
  pub fn reveal(&mut self, pos: GridPos) -> Option<Reveal> {
    let cell = *self.view.get(pos)?;
    if cell != Cell::Ground {
      return Some(Reveal::Repeat);
    }

    if self.field.is_mine(pos) {
      self.view[pos] = Cell::Mine;
      self.lives -= 1;
      Some(Reveal::Hit)
    } else {
      let mines = self.field.adjacent_mines(pos);
      self.view[pos] = Cell::Cleared(mines);
      self.score += 1;
      Some(Reveal::Safe(mines))
    }
  }

  pub fn banner(&self) -> Banner {
    Banner {
      lives: self.lives,
      score: self.score,
      mines: self.field.mine_count(),
    }
  }

  pub fn reveal_all(&self) -> RevealAll<'_> {
    RevealAll { game: self }
  }
}

impl From<MineField> for Game {
  fn from(field: MineField) -> Self {
    Self {
      field,
      view: Grid::new(Cell::Ground),
      lives: START_LIVES,
      score: 0,
    }
  }
}

fn write_grid(f: &mut fmt::Formatter<'_>, symbol_at: impl Fn(GridPos) -> char) -> fmt::Result {
  write!(f, "  ")?;
  for col in 0..SIZE {
    write!(f, "{:2}", col)?;
  }
  writeln!(f)?;

  for row in 0..SIZE {
    write!(f, "{:2}", row)?;
    for col in 0..SIZE {
      write!(f, "{:>2}", symbol_at(GridPos::new(row, col)))?;
    }
    writeln!(f)?;
  }

  Ok(())
}

impl fmt::Display for Game {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_grid(f, |pos| self.view[pos].symbol())
  }
}

/// Same layout as the playing view, but with every mine uncovered.
pub struct RevealAll<'a> {
  game: &'a Game,
}

impl fmt::Display for RevealAll<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_grid(f, |pos| {
      if self.game.field.is_mine(pos) {
        Cell::Mine.symbol()
      } else {
        self.game.view[pos].symbol()
      }
    })
  }
}

pub struct Banner {
  lives: u32,
  score: u32,
  mines: u32,
}

impl fmt::Display for Banner {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, " **************************")?;
    writeln!(f, " *    Rust Minesweeper    *")?;
    writeln!(f, " **************************")?;
    writeln!(f, "Lives = {} Score = {} Mines = {}", self.lives, self.score, self.mines)?;
    writeln!(f, "Ctrl-c to quit")?;
    writeln!(f)
  }
}

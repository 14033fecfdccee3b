use std::collections::VecDeque;
use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use minesweeper_game::board::GridPos;
use minesweeper_game::{Density, Game, MineField, Reveal, Status};

/// Scanner-style reader: hands out whitespace-delimited integers, pulling in
/// new lines as needed. Anything that is not an integer is a fatal error.
struct TokenReader<R> {
  reader: R,
  tokens: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
  fn new(reader: R) -> Self {
    Self {
      reader,
      tokens: VecDeque::new(),
    }
  }

  fn read_int(&mut self) -> Result<i32> {
    while self.tokens.is_empty() {
      let mut line = String::new();
      let read = self.reader.read_line(&mut line).context("failed to read input")?;
      if read == 0 {
        bail!("unexpected end of input");
      }
      self.tokens.extend(line.split_whitespace().map(str::to_owned));
    }

    let token = self.tokens.pop_front().unwrap();
    token.parse().with_context(|| format!("expected a number, got {:?}", token))
  }
}

fn prompt(text: &str) -> Result<()> {
  print!("{}", text);
  io::stdout().flush().context("failed to flush stdout")?;
  Ok(())
}

fn density_from_args() -> Result<Density> {
  match env::args().nth(1) {
    None => Ok(Density::Medium),
    Some(name) => Density::from_name(&name)
      .with_context(|| format!("unknown difficulty {:?} (expected supereasy, easy, medium or hard)", name)),
  }
}

fn main() -> Result<()> {
  let density = density_from_args()?;
  let mut rng = rand::thread_rng();
  let mut game = Game::from(MineField::plant(density, &mut rng));
  let mut input = TokenReader::new(io::stdin().lock());

  while game.status() == Status::Playing {
    print!("{}", game.banner());
    print!("{}", game);
    println!();

    prompt("Enter row number (0-9): ")?;
    let row = input.read_int()?;
    prompt("Enter column number (0-9): ")?;
    let col = input.read_int()?;

    match game.reveal(GridPos::new(row, col)) {
      None => println!("Invalid input. Please try again."),
      Some(Reveal::Repeat) => println!("Already revealed. Please try again."),
      Some(Reveal::Hit | Reveal::Safe(_)) => (),
    }
  }

  print!("{}", game.banner());
  print!("{}", game.reveal_all());
  match game.status() {
    Status::Won => println!("Congratulations you win!"),
    _ => println!("Sorry, you lose!"),
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::TokenReader;

  #[test]
  fn reads_ints_across_lines_and_tokens() {
    let mut reader = TokenReader::new(Cursor::new("3 4\n7\n  9  0\n"));
    assert_eq!(reader.read_int().unwrap(), 3);
    assert_eq!(reader.read_int().unwrap(), 4);
    assert_eq!(reader.read_int().unwrap(), 7);
    assert_eq!(reader.read_int().unwrap(), 9);
    assert_eq!(reader.read_int().unwrap(), 0);
  }

  #[test]
  fn negative_numbers_parse() {
    let mut reader = TokenReader::new(Cursor::new("-1\n"));
    assert_eq!(reader.read_int().unwrap(), -1);
  }

  #[test]
  fn garbage_is_fatal() {
    let mut reader = TokenReader::new(Cursor::new("five\n"));
    assert!(reader.read_int().is_err());
  }

  #[test]
  fn end_of_input_is_fatal() {
    let mut reader = TokenReader::new(Cursor::new(""));
    assert!(reader.read_int().is_err());
  }
}

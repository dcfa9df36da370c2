//! A grid maze which can be solved with the search algorithms
//! in [searcher].
//!
//! Mazes are written as text, one row per line:
//!
//! ```text
//! %%%%%%%
//! %    P%
//! % %%% %
//! %  %  %
//! %%   %%
//! %. %%%%
//! %%%%%%%
//! ```
//!
//! `%` (or `#`) is a wall, a space is open floor, `P` is where the search
//! starts, and `.` marks a goal. The digits `1` to `9` are open floor which
//! costs that much to step onto; plain floor costs 1.

use std::collections::BTreeSet;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use searcher::{Problem, Successor, Successors};
use thiserror::Error;

use super::{Direction, Point};

/// Error returned for mazes which can't be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("Unexpected maze character {0:?} at {1}")]
    UnexpectedCharacter(char, Point),

    #[error("Maze has no start position")]
    MissingStart,

    #[error("Maze has more than one start position: {0} and {1}")]
    MultipleStarts(Point, Point),

    #[error("Maze has no goals")]
    MissingGoal,

    #[error("{0} is not an open square in the maze")]
    NotOpen(Point),

    #[error("Maze square {0},{1} is too far from the origin")]
    TooLarge(usize, usize),
}

/// A single square in the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,

    /// Open floor, which costs this much to step onto.
    Floor(usize),
}

/// A maze on a 2D grid, where the goal is to walk from the start to
/// any of the goal squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    tiles: Vec<Vec<Tile>>,
    start: Point,
    goals: BTreeSet<Point>,
}

impl Maze {
    /// What tile is at a given location? Anything off the edge
    /// of the grid is a wall.
    pub fn tile(&self, location: Point) -> Tile {
        if location.x < 0 || location.y < 0 {
            return Tile::Wall;
        }
        self.tiles
            .get(location.y as usize)
            .and_then(|row| row.get(location.x as usize))
            .copied()
            .unwrap_or(Tile::Wall)
    }

    /// Cost to step onto a location, or `None` for walls.
    pub fn cost(&self, location: Point) -> Option<usize> {
        match self.tile(location) {
            Tile::Wall => None,
            Tile::Floor(cost) => Some(cost),
        }
    }

    pub fn is_traversable(&self, location: Point) -> bool {
        self.cost(location).is_some()
    }

    /// Where searches of this maze begin.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Goal locations, in reading order.
    pub fn goals(&self) -> impl Iterator<Item = &Point> {
        self.goals.iter()
    }

    pub fn width(&self) -> usize {
        self.tiles.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    /// Move the start of this maze somewhere else.
    pub fn with_start(mut self, start: Point) -> Result<Self, MazeError> {
        if !self.is_traversable(start) {
            return Err(MazeError::NotOpen(start));
        }
        self.start = start;
        Ok(self)
    }

    /// Walk a sequence of directions from the start, returning
    /// where it ends up. Walking into a wall returns `None`.
    pub fn walk<'a>(&self, directions: impl IntoIterator<Item = &'a Direction>) -> Option<Point> {
        directions
            .into_iter()
            .try_fold(self.start, |here, direction| {
                let next = here.step(*direction);
                if self.is_traversable(next) {
                    Some(next)
                } else {
                    None
                }
            })
    }
}

impl Problem for Maze {
    type State = Point;
    type Action = Direction;
    type Cost = usize;

    fn start(&self) -> Point {
        self.start
    }

    fn is_goal(&self, state: &Point) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &Point) -> Successors<Self> {
        Direction::all()
            .filter_map(|direction| {
                let next = state.step(direction);
                self.cost(next)
                    .map(|cost| Successor::new(next, direction, cost))
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> Option<usize> {
        let mut here = self.start;
        let mut total = 0;
        for direction in actions {
            here = here.step(*direction);
            total += self.cost(here)?;
        }
        Some(total)
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tiles = Vec::new();
        let mut start: Option<Point> = None;
        let mut goals = BTreeSet::new();

        let lines: Vec<&str> = s.lines().map(|line| line.trim_end_matches('\r')).collect();

        // Blank lines around the maze are dropped. Inside it they are rows,
        // and a row of spaces is open floor.
        let first = lines
            .iter()
            .position(|line| !line.is_empty())
            .unwrap_or(lines.len());
        let last = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(first, |i| i + 1);

        for (y, line) in lines[first..last].iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, c) in line.chars().enumerate() {
                let point = Point::try_from((x, y)).map_err(|_| MazeError::TooLarge(x, y))?;
                let tile = match c {
                    '%' | '#' => Tile::Wall,
                    ' ' => Tile::Floor(1),
                    'P' => {
                        if let Some(other) = start {
                            return Err(MazeError::MultipleStarts(other, point));
                        }
                        start = Some(point);
                        Tile::Floor(1)
                    }
                    '.' => {
                        goals.insert(point);
                        Tile::Floor(1)
                    }
                    '1'..='9' => Tile::Floor(c as usize - '0' as usize),
                    _ => return Err(MazeError::UnexpectedCharacter(c, point)),
                };
                row.push(tile);
            }
            tiles.push(row);
        }

        let start = start.ok_or(MazeError::MissingStart)?;
        if goals.is_empty() {
            return Err(MazeError::MissingGoal);
        }

        Ok(Maze {
            tiles,
            start,
            goals,
        })
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.tiles.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                let point = Point::try_from((x, y)).map_err(|_| fmt::Error)?;
                let c = if point == self.start {
                    'P'
                } else if self.goals.contains(&point) {
                    '.'
                } else {
                    match tile {
                        Tile::Wall => '%',
                        Tile::Floor(1) => ' ',
                        Tile::Floor(n) => std::char::from_digit(*n as u32, 10).unwrap_or('?'),
                    }
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Coordinate work in two dimensions.

use std::cmp;
use std::convert::TryFrom;
use std::fmt;
use std::num::TryFromIntError;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Position;

pub mod heuristic;
pub mod maze;

/// A movement direction in two dimensions.
///
/// North is towards smaller `y`, i.e. up the page.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

impl Direction {
    /// Enumerates all directions of movement, always in the
    /// same order: north, south, east, west.
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        };
        write!(f, "{}", name)
    }
}

/// A location in 2D space.
///
/// Essentially a 2-tuple of x and y position,
/// but with a few provided methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: Position,
    pub y: Position,
}

impl Point {
    /// Build a new point from coordinates.
    pub fn new(x: Position, y: Position) -> Self {
        Self { x, y }
    }

    /// Step in a given direction.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.x, self.y - 1),
            Direction::South => Self::new(self.x, self.y + 1),
            Direction::East => Self::new(self.x + 1, self.y),
            Direction::West => Self::new(self.x - 1, self.y),
        }
    }

    /// Iterate over all adjacent points.
    pub fn adjacent(self) -> impl Iterator<Item = Self> {
        Direction::all().map(move |d| self.step(d))
    }

    /// Manhattan distance between two points is the distance along
    /// each coordinate
    pub fn manhattan_distance(self, other: Point) -> Position {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Straight line distance between two points.
    pub fn euclidean_distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// What direction connects these two points?
    ///
    /// If they are not adjacent, return `None`.
    pub fn direction(self, other: Point) -> Option<Direction> {
        Direction::all().find(|&d| self.step(d) == other)
    }
}

impl cmp::Ord for Point {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl cmp::PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(Position, Position)> for Point {
    fn from(coordinates: (Position, Position)) -> Self {
        Self::new(coordinates.0, coordinates.1)
    }
}

impl TryFrom<(usize, usize)> for Point {
    type Error = TryFromIntError;

    fn try_from(coordinates: (usize, usize)) -> Result<Self, Self::Error> {
        Ok(Self::new(
            Position::try_from(coordinates.0)?,
            Position::try_from(coordinates.1)?,
        ))
    }
}

/// Error when parsing a point from string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePointError {
    #[error("Invalid Point: {}", _0)]
    InvalidLiteral(String),

    #[error("Invalid Number Literal")]
    InvalidNumber,
}

impl From<::std::num::ParseIntError> for ParsePointError {
    fn from(_: ::std::num::ParseIntError) -> Self {
        ParsePointError::InvalidNumber
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^\s*(?P<x>-?\d+)\s*,\s*(?P<y>-?\d+)\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(ParsePointError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::new(cap["x"].parse()?, cap["y"].parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point() {
        let point = Point::new(1, 1);

        assert_eq!(point.step(Direction::North), Point::new(1, 0));
        assert_eq!(point.step(Direction::South), Point::new(1, 2));
        assert_eq!(point.step(Direction::West), Point::new(0, 1));
        assert_eq!(point.step(Direction::East), Point::new(2, 1));

        assert_eq!(&point.to_string(), "1,1");

        assert_eq!(
            point.adjacent().collect::<Vec<_>>(),
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(0, 1)
            ]
        );
    }

    #[test]
    fn direction() {
        let origin = Point::new(0, 0);

        for direction in Direction::all() {
            let next = origin.step(direction);
            assert_eq!(origin.direction(next), Some(direction));
            assert_eq!(next.step(direction.reverse()), origin);
        }

        assert_eq!(origin.direction(Point::new(1, 1)), None);
    }

    #[test]
    fn distances() {
        let a = Point::new(0, 0);
        let b = Point::new(3, -4);

        assert_eq!(a.manhattan_distance(b), 7);
        assert!((a.euclidean_distance(b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn parse() {
        assert_eq!("3,4".parse(), Ok(Point::new(3, 4)));
        assert_eq!(" 10, -2 ".parse(), Ok(Point::new(10, -2)));
        assert_eq!(
            "three,4".parse::<Point>(),
            Err(ParsePointError::InvalidLiteral("three,4".to_string()))
        );
        assert_eq!(
            "99999999999,4".parse::<Point>(),
            Err(ParsePointError::InvalidNumber)
        );
    }

    #[test]
    fn grid_index() {
        assert_eq!(Point::try_from((3usize, 4usize)), Ok(Point::new(3, 4)));
        assert!(Point::try_from((Position::MAX as usize + 1, 0usize)).is_err());
        assert!(Point::try_from((0usize, usize::MAX)).is_err());
    }
}

#![deny(clippy::all)]

use clap::{value_t, App, Arg, ArgMatches};

use itertools::Itertools;
use lazy_static::lazy_static;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use geometry::coord2d::heuristic;
use geometry::coord2d::maze::Maze;
use geometry::coord2d::{Direction, Point};
use searcher::{SearchOptions, Solution, Strategy};

type Error = anyhow::Error;
type Estimator = fn(&Point, &Maze) -> usize;

/// Maze used when no input is given.
pub const DEFAULT_MAZE: &str = include_str!("../geometry/mazes/tiny.txt");

lazy_static! {
    static ref HEURISTICS: HashMap<&'static str, Estimator> = {
        let mut h: HashMap<&'static str, Estimator> = HashMap::new();
        h.insert("null", heuristic::null);
        h.insert("manhattan", heuristic::manhattan);
        h.insert("euclidean", heuristic::euclidean);
        h
    };
}

pub fn solver() -> Result<(), Error> {
    let matches = App::new("statesearch")
        .version("0.1")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find a path through a maze with a choice of search strategies")
        .arg(
            Arg::with_name("strategy")
                .value_name("STRATEGY")
                .help("dfs, bfs, ucs or astar")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("maze")
                .value_name("MAZE")
                .help("Maze file to solve, or - for stdin")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("heuristic")
                .short("H")
                .long("heuristic")
                .value_name("NAME")
                .help("Heuristic for A*: null, manhattan or euclidean")
                .default_value("null")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("STEPS")
                .help("Give up after expanding this many states")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("progress")
                .short("p")
                .long("progress")
                .value_name("STEPS")
                .help("Log progress every so many expansions")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("start")
                .short("s")
                .long("start")
                .value_name("X,Y")
                .help("Start somewhere other than the P in the maze")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Increase logging verbosity"),
        )
        .get_matches();

    init_tracing(matches.occurrences_of("verbose"));

    let strategy: Strategy = value_t!(matches, "strategy", String)?.parse()?;
    let options = search_options(&matches)?;

    let reader = get_input_reader(matches.value_of("maze"))?;
    let mut maze = read_maze(reader)?;
    if let Some(start) = matches.value_of("start") {
        maze = maze.with_start(start.parse()?)?;
    }

    let name = matches.value_of("heuristic").unwrap_or("null");
    let report = run(&maze, strategy, name, options)?;
    println!("{}", report);

    Ok(())
}

fn init_tracing(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed, e.g. under test.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn search_options(matches: &ArgMatches) -> Result<SearchOptions, Error> {
    let mut options = SearchOptions::default();
    if matches.is_present("limit") {
        options.limit = Some(value_t!(matches, "limit", usize)?);
    }
    if matches.is_present("progress") {
        options.progress = Some(value_t!(matches, "progress", usize)?);
    }
    Ok(options)
}

type BoxedRead = Box<dyn Read + 'static>;

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: BoxedRead = match filename {
        Some("-") => Box::new(io::stdin()),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| SearchCliError::InputNotFound(path.into(), e))?;
            Box::new(f)
        }
        None => Box::new(io::Cursor::new(DEFAULT_MAZE)),
    };
    Ok(reader)
}

pub fn read_maze(mut reader: BoxedRead) -> Result<Maze, Error> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    Ok(buffer.parse()?)
}

/// Look up a maze heuristic by name.
pub fn lookup_heuristic(name: &str) -> Result<Estimator, SearchCliError> {
    HEURISTICS
        .get(name)
        .copied()
        .ok_or_else(|| SearchCliError::UnknownHeuristic(name.to_string()))
}

/// Solve a maze with the given strategy and heuristic.
pub fn run(
    maze: &Maze,
    strategy: Strategy,
    heuristic_name: &str,
    options: SearchOptions,
) -> Result<Report, Error> {
    let estimator = lookup_heuristic(heuristic_name)?;
    if !strategy.is_informed() && heuristic_name != "null" {
        debug!(%strategy, heuristic = heuristic_name, "heuristic ignored");
    }

    let solution = strategy.solve(maze, &estimator, options)?;
    Ok(Report { strategy, solution })
}

/// The outcome of solving a maze, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub strategy: Strategy,
    pub solution: Solution<Direction, usize>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strategy: {}", self.strategy)?;
        writeln!(f, "Path: {}", self.solution.plan.iter().join(", "))?;
        writeln!(f, "Length: {}", self.solution.plan.len())?;
        writeln!(f, "Cost: {}", self.solution.cost)?;
        write!(f, "Expanded: {}", self.solution.expanded)
    }
}

#[derive(Debug, Error)]
pub enum SearchCliError {
    #[error("Unknown heuristic {0:?}, expected one of: null, manhattan, euclidean")]
    UnknownHeuristic(String),

    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf, #[source] io::Error),
}

mod common;

use searcher::{astar, bfs, dfs, ucs, NullHeuristic, Plan, SearchError, SearchOptions, Strategy};

use common::{chain, two_paths, Graph};

fn solve_all(graph: &Graph) -> Vec<(Strategy, Result<Plan<String>, SearchError>)> {
    Strategy::all()
        .map(|s| {
            (
                s,
                s.solve(graph, &NullHeuristic, SearchOptions::default())
                    .map(|solution| solution.plan),
            )
        })
        .collect()
}

#[test]
fn linear_chain() {
    let graph = chain();
    let expected: Vec<String> = vec!["FORWARD".to_string(); 4];

    assert_eq!(dfs(&graph).unwrap().into_actions(), expected);
    assert_eq!(bfs(&graph).unwrap().into_actions(), expected);
    assert_eq!(ucs(&graph).unwrap().into_actions(), expected);
    assert_eq!(astar(&graph, &NullHeuristic).unwrap().into_actions(), expected);
}

#[test]
fn cheapest_of_two_paths() {
    let graph = two_paths();
    let cheap: Vec<String> = vec!["STEP".to_string(); 3];

    assert_eq!(ucs(&graph).unwrap().into_actions(), cheap);
    assert_eq!(astar(&graph, &NullHeuristic).unwrap().into_actions(), cheap);

    // No cost guarantees, but the plan has to reach the goal.
    for plan in vec![dfs(&graph).unwrap(), bfs(&graph).unwrap()] {
        assert_eq!(graph.follow(&plan), Some(9));
    }

    // The expensive hop is the shallowest goal.
    assert_eq!(bfs(&graph).unwrap().into_actions(), vec!["JUMP".to_string()]);
}

#[test]
fn start_is_goal() {
    let graph = Graph::new(3, &[3]).edge(3, 4, "AWAY", 1);

    for (strategy, plan) in solve_all(&graph) {
        assert_eq!(plan, Ok(Plan::default()), "{}", strategy);
    }

    for strategy in Strategy::all() {
        let solution = strategy
            .solve(&graph, &NullHeuristic, SearchOptions::default())
            .unwrap();
        assert_eq!(solution.expanded, 0, "{}", strategy);
        assert_eq!(solution.cost, 0, "{}", strategy);
    }
}

#[test]
fn dead_end() {
    let graph = Graph::new(0, &[1]);

    for (strategy, plan) in solve_all(&graph) {
        assert_eq!(plan, Err(SearchError::NoSolution), "{}", strategy);
    }
}

#[test]
fn unreachable_goal_in_a_cycle() {
    let graph = Graph::new(0, &[7])
        .edge(0, 1, "a", 1)
        .edge(1, 2, "b", 1)
        .edge(2, 0, "c", 1)
        .edge(1, 0, "d", 1);

    for (strategy, plan) in solve_all(&graph) {
        assert_eq!(plan, Err(SearchError::NoSolution), "{}", strategy);
    }
}

#[test]
fn heuristic_guides_astar() {
    // A fan of equally cheap branches, only one of which leads anywhere.
    let mut graph = Graph::new(0, &[100]);
    for branch in 1..=5 {
        graph.add_edge(0, branch, &format!("branch{}", branch), 1);
        graph.add_edge(branch, branch * 10, "deeper", 1);
    }
    graph.add_edge(50, 100, "goal", 1);

    let exact = |state: &u32, _: &Graph| -> u32 {
        match *state {
            5 => 2,
            50 => 1,
            100 => 0,
            _ => 10,
        }
    };

    let guided = searcher::astar::build(&graph, &exact).run().unwrap();
    let blind = searcher::dijkstra::build(&graph).run().unwrap();

    assert_eq!(guided.plan, blind.plan);
    assert_eq!(guided.cost, 3);
    assert!(
        guided.expanded < blind.expanded,
        "{} >= {}",
        guided.expanded,
        blind.expanded
    );
}

#[test]
fn inadmissible_heuristic_is_trusted() {
    // The heuristic hides the cheap route, so A* takes the expensive one.
    let graph = two_paths();
    let misleading = |state: &u32, _: &Graph| -> u32 {
        if *state == 1 {
            100
        } else {
            0
        }
    };

    let plan = astar(&graph, &misleading).unwrap();
    assert_eq!(plan.into_actions(), vec!["JUMP".to_string()]);
}

#[test]
fn unreachable_estimate_ranks_last() {
    // Marking a state as hopeless with the largest cost must not overflow.
    let graph = two_paths();
    let hopeless = |state: &u32, _: &Graph| -> u32 {
        if *state == 1 {
            u32::MAX
        } else {
            0
        }
    };

    let plan = astar(&graph, &hopeless).unwrap();
    assert_eq!(plan.into_actions(), vec!["JUMP".to_string()]);
}

#[test]
fn deterministic() {
    let graph = Graph::new(0, &[6])
        .edge(0, 1, "x", 2)
        .edge(0, 2, "y", 1)
        .edge(0, 3, "z", 1)
        .edge(2, 4, "x", 1)
        .edge(3, 4, "y", 1)
        .edge(1, 6, "z", 1)
        .edge(4, 6, "x", 1);

    let first = solve_all(&graph);
    for _ in 0..5 {
        assert_eq!(solve_all(&graph), first);
    }
}

use mazepath_lib::{
    bfs_distances, plan_search, search, ExhaustionReason, Grid, Heuristic, Maze, SearchConfig,
    SearchMethod, SearchOutcome, SearchReport, SearchRequest, State,
};

fn s(row: i32, col: i32) -> State {
    State::new(row, col)
}

fn run(maze: &Maze, heuristic: Heuristic) -> SearchReport {
    plan_search(maze, &SearchRequest::astar(heuristic)).expect("search completes")
}

fn assert_valid_path(maze: &Maze, report: &SearchReport) {
    let path = &report.path;
    assert_eq!(path.first(), Some(&maze.start()));
    let last = path.last().expect("path is not empty");
    assert!(maze.objectives().contains(last));
    for pair in path.windows(2) {
        assert!(
            maze.neighbors(pair[0]).contains(&pair[1]),
            "{} -> {}",
            pair[0],
            pair[1]
        );
        assert!(maze.is_valid_move(pair[1]));
    }
}

const CORRIDORS: &str = "\
%%%%%%%%%%%%
%P   %     %
% %% % %%% %
% %  %   % %
% %%%%%% % %
%        %.%
%%%%%%%%%%%%
";

#[test]
fn open_three_by_three_grid() {
    let maze = Maze::open(3, 3, s(0, 0), [s(2, 2)].into());
    let report = run(&maze, Heuristic::MinManhattan);

    assert_eq!(report.path.len(), 5);
    assert_eq!(report.moves(), 4);
    assert!(report.explored >= 1);
    assert!(report.explored <= 9);
    assert_valid_path(&maze, &report);
}

#[test]
fn enclosed_objective_exhausts_reachable_cells() {
    let maze: Maze = "\
%%%%%%%
%P  %.%
%   %%%
%%%%%%%
"
    .parse()
    .expect("maze parses");
    let report = run(&maze, Heuristic::MinManhattan);

    assert!(report.path.is_empty());
    assert_eq!(
        report.outcome,
        SearchOutcome::Exhausted {
            reason: ExhaustionReason::NoSolutionFound
        }
    );
    assert_eq!(report.explored, bfs_distances(&maze, maze.start()).len());
    assert_eq!(report.explored, 6);
}

#[test]
fn equidistant_objectives_use_the_shorter_distance() {
    let maze = Maze::open(5, 5, s(2, 2), [s(0, 2), s(2, 4)].into());
    let report = run(&maze, Heuristic::MinManhattan);

    assert_eq!(report.moves(), 2);
    let goal = report.goal().expect("an objective is reached");
    assert!(goal == s(0, 2) || goal == s(2, 4));
    assert_valid_path(&maze, &report);
}

#[test]
fn nearer_objective_wins_regardless_of_order() {
    let maze = Maze::open(1, 9, s(0, 4), [s(0, 0), s(0, 7)].into());
    let report = run(&maze, Heuristic::MinManhattan);
    assert_eq!(report.goal(), Some(s(0, 7)));
    assert_eq!(report.moves(), 3);
}

#[test]
fn corridor_path_matches_breadth_first_distance() {
    let maze: Maze = CORRIDORS.parse().expect("maze parses");
    let report = run(&maze, Heuristic::MinManhattan);
    let goal = report.goal().expect("corridor maze is solvable");
    let distances = bfs_distances(&maze, maze.start());

    assert_eq!(report.moves() as u32, distances[&goal]);
    assert_valid_path(&maze, &report);
}

#[test]
fn every_heuristic_returns_a_valid_path() {
    let maze: Maze = CORRIDORS.parse().expect("maze parses");
    for heuristic in Heuristic::ALL {
        let report = run(&maze, heuristic);
        assert!(report.is_success(), "{heuristic} found no path");
        assert_valid_path(&maze, &report);
    }
}

#[test]
fn grid_pairwise_distances_drive_precomputed_heuristic() {
    let maze: Maze = "\
%%%%%%%
%P . .%
%%%%% %
%.    %
%%%%%%%
"
    .parse()
    .expect("maze parses");
    let request = SearchRequest {
        method: SearchMethod::AStar,
        config: SearchConfig {
            heuristic: Heuristic::PrecomputedDijkstra,
            pairwise: mazepath_lib::PairwiseDistance::Grid,
            ..SearchConfig::default()
        },
    };
    let report = plan_search(&maze, &request).expect("search completes");
    assert_eq!(report.goal(), Some(s(1, 3)));
    assert_eq!(report.moves(), 2);
}

#[test]
fn repeated_searches_are_identical() {
    let maze: Maze = CORRIDORS.parse().expect("maze parses");
    for heuristic in Heuristic::ALL {
        let first = run(&maze, heuristic);
        let second = run(&maze, heuristic);
        assert_eq!(first, second, "{heuristic} is not deterministic");
    }
}

#[test]
fn grid_without_objectives_exhausts() {
    let maze = Maze::open(2, 3, s(0, 0), Default::default());
    for heuristic in Heuristic::ALL {
        let report = run(&maze, heuristic);
        assert!(report.path.is_empty());
        assert_eq!(report.explored, 6);
    }
}

#[test]
fn expansion_budget_reports_budget_exceeded() {
    let maze: Maze = CORRIDORS.parse().expect("maze parses");
    let config = SearchConfig {
        max_expansions: Some(2),
        ..SearchConfig::default()
    };
    let report = search(&maze, SearchMethod::AStar, &config).expect("search completes");
    assert_eq!(
        report.outcome,
        SearchOutcome::Exhausted {
            reason: ExhaustionReason::BudgetExceeded
        }
    );
    assert_eq!(report.explored, 2);
}

#[test]
fn stub_methods_are_rejected() {
    let maze = Maze::open(3, 3, s(0, 0), [s(2, 2)].into());
    for method in [SearchMethod::Bfs, SearchMethod::Dfs, SearchMethod::Greedy] {
        let err = search(&maze, method, &SearchConfig::default()).unwrap_err();
        assert!(matches!(err, mazepath_lib::Error::UnsupportedMethod { .. }));
    }
}

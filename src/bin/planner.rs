//! Command-line grid planner.
//!
//! Loads a text map, runs one search algorithm between two cells, prints
//! the outcome, and writes a plan file next to the map for external
//! viewers.

use std::path::PathBuf;
use std::process::ExitCode;

use log::info;

use gridnav::{
    a_star_search, breadth_first_search, depth_first_search, iterative_deepening_search, load_map,
    visualization, Cell, CollisionMode, TransformAlgorithm,
};

fn print_usage() {
    eprintln!(
        "usage: planner <map_file> <algorithm> <start_x> <start_y> <goal_x> <goal_y> [transform]"
    );
    eprintln!("  algorithm: bfs | dfs | ids | astar");
    eprintln!("  transform: brute | manhattan | euclidean");
    eprintln!("             (runs a distance transform and switches to the fast collision check)");
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 6 || args.len() > 7 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let map_file = PathBuf::from(&args[0]);
    let algorithm = args[1].as_str();

    let mut coords = [0i32; 4];
    for (slot, arg) in coords.iter_mut().zip(&args[2..6]) {
        *slot = match arg.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("invalid cell coordinate: {}", arg);
                return ExitCode::FAILURE;
            }
        };
    }
    let start = Cell::new(coords[0], coords[1]);
    let goal = Cell::new(coords[2], coords[3]);

    let mut graph = match load_map(&map_file) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("invalid map file {}: {}", map_file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    if let Some(name) = args.get(6) {
        let transform: TransformAlgorithm = match name.parse() {
            Ok(transform) => transform,
            Err(err) => {
                eprintln!("{}", err);
                print_usage();
                return ExitCode::FAILURE;
            }
        };
        transform.run(&mut graph);
        graph.set_collision_mode(CollisionMode::DistanceField);
        info!("{} distance transform done, using fast collision check", name);
    }

    let result = match algorithm {
        "bfs" => breadth_first_search(&mut graph, start, goal),
        "dfs" => depth_first_search(&mut graph, start, goal),
        "ids" => iterative_deepening_search(&mut graph, start, goal),
        "astar" => a_star_search(&mut graph, start, goal),
        other => {
            eprintln!("invalid planning algorithm: {}", other);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    if result.found() {
        println!("Found path of length: {}", result.path.len());
    } else {
        println!("No path found.");
    }

    let plan_path = map_file.with_extension(format!("{}.plan", algorithm));
    if let Err(err) =
        visualization::write_plan_file(&plan_path, &graph, algorithm, start, goal, &result)
    {
        eprintln!("failed to write plan file {}: {}", plan_path.display(), err);
        return ExitCode::FAILURE;
    }
    info!("plan written to {}", plan_path.display());

    ExitCode::SUCCESS
}

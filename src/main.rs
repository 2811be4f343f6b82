// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Clippy
#![allow(unknown_lints)] // necessary because rustc doesn't know about clippy
#![warn(clippy::all)]

use std::process;

use clap::{App, Arg, ArgMatches};
use prettytable::{Cell, Row, Table};

use rush_hour_solver::config::Method;
use rush_hour_solver::level::Level;
use rush_hour_solver::solver::{Outcome, SolverOk};
use rush_hour_solver::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("rush-hour-solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves Rush Hour puzzles")
        .arg(
            Arg::with_name("method")
                .short("m")
                .long("method")
                .takes_value(true)
                .default_value("astar")
                .help("bfs, dfs, ids, ucs, astar, astar-gap or all to compare them"),
        ).arg(
            Arg::with_name("max-depth")
                .short("d")
                .long("max-depth")
                .takes_value(true)
                .help("depth limit for dfs and ids"),
        ).arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("don't print the boards of the solution"),
        ).arg(
            Arg::with_name("level")
                .required(true)
                .help("level file, one vehicle per line: row col length H/V"),
        ).get_matches();

    // check arguments before loading so nothing is printed to stdout on error
    let max_depth = parse_max_depth(&matches);
    let method_name = matches.value_of("method").unwrap_or("astar");
    let methods = if method_name.eq_ignore_ascii_case("all") {
        Method::all().to_vec()
    } else {
        let method = method_name.parse::<Method>().unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        });
        vec![method]
    };
    let methods: Vec<_> = methods
        .into_iter()
        .map(|method| match max_depth {
            Some(max_depth) => method.with_max_depth(max_depth),
            None => method,
        }).collect();

    let path = matches.value_of("level").unwrap();
    let level = path.load_level().unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });

    let solutions: Vec<_> = methods
        .iter()
        .map(|&method| {
            level.solve(method).unwrap_or_else(|err| {
                eprintln!("Invalid level {}: {}", path, err);
                process::exit(1);
            })
        }).collect();

    if methods.len() == 1 {
        println!(
            "Solved {} using {} ({})",
            path,
            methods[0],
            methods[0].description()
        );
        print_solution(&level, &solutions[0], matches.is_present("quiet"));
    } else {
        println!("Comparing methods on {}", path);
        print_comparison(&level, &solutions);
    }
}

fn parse_max_depth(matches: &ArgMatches<'_>) -> Option<u32> {
    matches.value_of("max-depth").map(|value| {
        value.parse().unwrap_or_else(|_| {
            eprintln!("Invalid max depth: {}", value);
            process::exit(1);
        })
    })
}

fn print_solution(level: &Level, solution: &SolverOk, quiet: bool) {
    match solution.outcome {
        Outcome::Solved { ref moves, .. } => {
            println!("Found solution:");
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            if solution.method.is_cost_aware() {
                println!("Cost: {}", level.board.path_cost(moves));
            }
            println!("{}", solution.stats);
            if !quiet {
                print!("{}", level.format_solution(moves));
            }
        }
        Outcome::NoSolution => {
            println!("No solution");
            println!("{}", solution.stats);
        }
        Outcome::DepthLimitReached { max_depth } => {
            println!("No solution within depth limit of {} moves", max_depth);
            println!("{}", solution.stats);
        }
    }
}

fn print_comparison(level: &Level, solutions: &[SolverOk]) {
    let mut table = Table::new();
    table.set_titles(Row::new(
        ["Method", "Result", "Moves", "Cost", "Expanded", "Memory (KB)", "Time (ms)"]
            .iter()
            .map(|&title| Cell::new(title))
            .collect(),
    ));

    for solution in solutions {
        let (result, moves, cost) = match solution.outcome {
            Outcome::Solved { ref moves, .. } => (
                "solved".to_owned(),
                moves.move_cnt().to_string(),
                if solution.method.is_cost_aware() {
                    level.board.path_cost(moves).to_string()
                } else {
                    "-".to_owned()
                },
            ),
            Outcome::NoSolution => ("no solution".to_owned(), "-".to_owned(), "-".to_owned()),
            Outcome::DepthLimitReached { max_depth } => (
                format!("depth limit {}", max_depth),
                "-".to_owned(),
                "-".to_owned(),
            ),
        };
        table.add_row(Row::new(vec![
            Cell::new(&solution.method.to_string()),
            Cell::new(&result),
            Cell::new(&moves),
            Cell::new(&cost),
            Cell::new(&solution.stats.total_expanded().to_string()),
            Cell::new(&format!("{:.2}", solution.stats.kilobytes())),
            Cell::new(&format!("{:.3}", solution.stats.millis())),
        ]));
    }

    table.printstd();
}

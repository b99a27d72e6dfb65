//! Command-line front end for the beginner-method solver.
//!
//! Builds a cube from a move sequence, a facelet string or a seeded random
//! scramble, checks that it can be solved and prints the solution.
//!
//! # Usage
//!
//! Solve a random 20-move scramble:
//!
//! ```sh
//! cargo run --release
//! ```
//!
//! Solve a given scramble and show how each phase got there:
//!
//! ```sh
//! cargo run --release -- --scramble "R U R' U' F2 D" --explain
//! ```
//!
//! Solve a cube read off a physical puzzle (faces up, left, front, right,
//! back, down):
//!
//! ```sh
//! cargo run --release -- --facelets "YYYYYYYYY BBBBBBBBB RRRRRRRRR GGGGGGGGG OOOOOOOOO WWWWWWWWW"
//! ```
//!
//! Reproduce a scramble from its seed, or derive one from a phrase:
//!
//! ```sh
//! cargo run --release -- --seed <HEX> --length 25
//! cargo run --release -- --phrase "hello"
//! ```
//!
//! Solve many random scrambles in parallel and report move-count statistics:
//!
//! ```sh
//! cargo run --release -- --batch 10000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use rubik_core::{Cube, FaceletParseError, Move, MoveParseError, format_moves};
use rubik_scrambler::{Scramble, ScrambleGenerator, ScrambleSeed};
use rubik_solver::{BeginnerSolver, Solution, SolverError};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Scramble to apply to a solved cube, as move tokens.
    #[arg(long, value_name = "MOVES", group = "input")]
    scramble: Option<String>,

    /// Cube state as 54 color letters (U, L, F, R, B, D faces).
    #[arg(long, value_name = "FACELETS", group = "input")]
    facelets: Option<String>,

    /// Seed of a random scramble, as 64 hexadecimal digits.
    #[arg(long, value_name = "HEX", group = "input")]
    seed: Option<ScrambleSeed>,

    /// Phrase to derive the seed of a random scramble from.
    #[arg(long, value_name = "TEXT", group = "input")]
    phrase: Option<String>,

    /// Number of moves of generated scrambles.
    #[arg(long, value_name = "COUNT", default_value_t = ScrambleGenerator::DEFAULT_LENGTH)]
    length: usize,

    /// Print the step-by-step explanation of the solution.
    #[arg(short, long)]
    explain: bool,

    /// Solve this many random scrambles and print statistics.
    #[arg(long, value_name = "COUNT", conflicts_with = "input")]
    batch: Option<usize>,
}

/// Errors that end the program, each with its exit code.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    /// The scramble contains a malformed move token.
    #[display("Invalid scramble: {_0}")]
    #[from]
    Scramble(#[error(source)] MoveParseError),
    /// The facelet string cannot be read.
    #[display("Invalid facelets: {_0}")]
    #[from]
    Facelets(#[error(source)] FaceletParseError),
    /// The cube is unreachable or the solver failed.
    #[display("Cannot solve cube: {_0}")]
    #[from]
    Solve(#[error(source)] SolverError),
    /// `--batch 0` was given.
    #[display("--batch must be at least 1.")]
    EmptyBatch,
    /// Some scrambles of a batch were not solved.
    #[display("{failures} of {count} scrambles failed")]
    BatchFailures { failures: usize, count: usize },
}

impl CliError {
    /// Returns 2 for malformed input and 1 for cubes that could not be solved.
    fn exit_code(&self) -> i32 {
        match self {
            Self::Scramble(_) | Self::Facelets(_) | Self::EmptyBatch => 2,
            Self::Solve(_) | Self::BatchFailures { .. } => 1,
        }
    }
}

fn main() {
    better_panic::install();
    env_logger::init();

    if let Err(err) = run(&Args::parse()) {
        eprintln!("{err}");
        process::exit(err.exit_code());
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let solver = BeginnerSolver::with_all_phases();
    let generator = ScrambleGenerator::new(args.length);

    if let Some(count) = args.batch {
        return run_batch(&solver, generator, count);
    }

    let cube = build_cube(args, generator)?;

    println!("Cube:");
    for line in cube.to_net().lines() {
        println!("  {line}");
    }
    println!();
    println!("Verification:");
    println!("  {}", cube.verification_message());
    println!();

    let solution = solve_cube(&solver, &cube)?;
    print_solution(&solver, &solution, args.explain);
    Ok(())
}

fn build_cube(args: &Args, generator: ScrambleGenerator) -> Result<Cube, CliError> {
    if let Some(scramble) = &args.scramble {
        let moves = Move::parse_sequence(scramble)?;
        let mut cube = Cube::new();
        cube.apply_all(&moves);
        println!("Scramble:");
        println!("  {}", format_moves(&moves));
        println!();
        return Ok(cube);
    }

    if let Some(facelets) = &args.facelets {
        return Ok(Cube::from_facelets(facelets)?);
    }

    let seed = match (args.seed, &args.phrase) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => ScrambleSeed::from_phrase(phrase),
        (None, None) => ScrambleSeed::random(),
    };
    let scramble = generator.generate_with_seed(seed);
    print_scramble(&scramble);
    Ok(scramble.cube)
}

fn solve_cube(solver: &BeginnerSolver, cube: &Cube) -> Result<Solution, CliError> {
    solver.solve(cube).map_err(|err| {
        if err.is_internal() {
            log::error!("solver failed on {cube}: {err}");
        }
        CliError::Solve(err)
    })
}

fn print_scramble(scramble: &Scramble) {
    println!("Seed:");
    println!("  {}", scramble.seed);
    println!();
    println!("Scramble:");
    println!("  {}", format_moves(&scramble.moves));
    println!();
}

fn print_solution(solver: &BeginnerSolver, solution: &Solution, explain: bool) {
    println!("Solution ({} moves):", solution.len());
    println!("  {}", format_moves(solution.moves()));
    println!();

    println!("Phases:");
    for (phase, count) in solver.phases().iter().zip(solution.phase_moves()) {
        println!("  {}: {count}", phase.name());
    }

    if explain {
        println!();
        println!("Explanation:");
        for line in solution.explanation().to_string().lines() {
            println!("  {line}");
        }
    }
}

fn run_batch(
    solver: &BeginnerSolver,
    generator: ScrambleGenerator,
    count: usize,
) -> Result<(), CliError> {
    if count == 0 {
        return Err(CliError::EmptyBatch);
    }

    let results: Vec<(Scramble, Result<Solution, SolverError>)> = (0..count)
        .into_par_iter()
        .map(|_| {
            let scramble = generator.generate();
            let result = solver.solve(&scramble.cube);
            (scramble, result)
        })
        .collect();

    let mut lengths = Vec::with_capacity(count);
    let mut failures = 0_usize;
    for (scramble, result) in &results {
        match result {
            Ok(solution) if solution.cube().is_solved() => lengths.push(solution.len()),
            Ok(_) => {
                failures += 1;
                eprintln!("Seed {} left the cube unsolved", scramble.seed);
            }
            Err(err) => {
                failures += 1;
                eprintln!("Seed {}: {err}", scramble.seed);
            }
        }
    }

    println!("Batch:");
    println!("  Scrambles: {count}");
    println!("  Scramble length: {}", generator.length());
    println!("  Solved: {}", lengths.len());
    println!("  Failed: {failures}");
    if let (Some(min), Some(max)) = (lengths.iter().min(), lengths.iter().max()) {
        println!("  Min moves: {min}");
        println!("  Max moves: {max}");
        println!("  Mean moves: {:.1}", mean(&lengths));
    }

    if failures > 0 {
        return Err(CliError::BatchFailures { failures, count });
    }
    Ok(())
}

#[expect(clippy::cast_precision_loss)]
fn mean(values: &[usize]) -> f64 {
    values.iter().sum::<usize>() as f64 / values.len() as f64
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;
    use rubik_core::{Color, Facing, Position, Sticker};

    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rubik").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_malformed_scramble_exits_with_2() {
        let args = args(&["--scramble", "R Q U"]);
        let err = build_cube(&args, ScrambleGenerator::new(args.length)).unwrap_err();
        assert!(matches!(err, CliError::Scramble(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_malformed_facelets_exit_with_2() {
        let args = args(&["--facelets", "YYYY"]);
        let err = build_cube(&args, ScrambleGenerator::new(args.length)).unwrap_err();
        assert!(matches!(err, CliError::Facelets(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_empty_batch_exits_with_2() {
        let err = run(&args(&["--batch", "0"])).unwrap_err();
        assert!(matches!(err, CliError::EmptyBatch));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_invalid_cube_exits_with_1() {
        let mut flipped = Cube::new();
        flipped
            .set_sticker(Sticker::new(Position::FU, Facing::Front, Color::Yellow))
            .unwrap();
        flipped
            .set_sticker(Sticker::new(Position::FU, Facing::Up, Color::Red))
            .unwrap();

        let args = args(&["--facelets", &flipped.to_facelets()]);
        let cube = build_cube(&args, ScrambleGenerator::new(args.length)).unwrap();
        let err = solve_cube(&BeginnerSolver::with_all_phases(), &cube).unwrap_err();
        assert!(matches!(err, CliError::Solve(SolverError::InvalidCube(_))));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_batch_failures_exit_with_1() {
        let err = CliError::BatchFailures {
            failures: 1,
            count: 3,
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "1 of 3 scrambles failed");
    }

    #[test]
    fn test_valid_inputs_run() {
        assert!(run(&args(&["--scramble", "R U R' U' F2 D", "--explain"])).is_ok());
        assert!(run(&args(&["--phrase", "hello", "--length", "25"])).is_ok());
        assert!(run(&args(&["--batch", "4", "--length", "10"])).is_ok());
    }

    #[test]
    fn test_seeded_scramble_is_reproducible() {
        let seed = ScrambleSeed::from_phrase("hello").to_string();
        let generator = ScrambleGenerator::new(20);
        let by_seed = build_cube(&args(&["--seed", &seed]), generator).unwrap();
        let by_phrase = build_cube(&args(&["--phrase", "hello"]), generator).unwrap();
        assert_eq!(by_seed, by_phrase);
    }

    #[test]
    fn test_rejected_arguments() {
        let parse = |argv: &[&str]| {
            Args::try_parse_from(std::iter::once("rubik").chain(argv.iter().copied()))
        };
        assert!(parse(&["--seed", "zz"]).is_err());
        assert!(parse(&["--scramble", "R", "--phrase", "hello"]).is_err());
        assert!(parse(&["--batch", "3", "--scramble", "R"]).is_err());
    }
}

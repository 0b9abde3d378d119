use anyhow::{Context, Result};
use clap::Parser;

use std::io::{stdin, stdout, Write};

use connect_m::{board::*, search::*, DEFAULT_DEPTH};

mod display;
use display::*;

/// The human always plays X against the computer's O
const HUMAN: Token = Token::X;
const COMPUTER: Token = Token::O;

/// Play Connect M against an alpha-beta search agent
#[derive(Parser)]
#[command(name = "connect_m", about = "Play Connect M against an alpha-beta search agent")]
struct Cli {
    /// Board size N, the board is N×N (3-10)
    n: usize,

    /// Number of tokens in a line needed to win (2-N)
    m: usize,

    /// 1 if the human moves first, 0 if the computer does
    h: u8,

    /// Number of plies the computer searches
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,
}

impl Cli {
    fn validate(&self) -> std::result::Result<(), &'static str> {
        if self.n < 3 || self.n > 10 {
            return Err("Board size N must be between 3 and 10.");
        }
        if self.m < 2 || self.m > self.n {
            return Err("Parameter M must be higher than 1 and no higher than N.");
        }
        if self.h > 1 {
            return Err("Parameter H must be 0 or 1.");
        }
        if self.depth == 0 {
            return Err("Search depth must be at least 1.");
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(message) = cli.validate() {
        println!("{}", message);
        std::process::exit(1);
    }

    let mut board = Board::new(cli.n, cli.m).context("failed to create board")?;
    let perspective = Perspective::new(COMPUTER);
    let mut human_to_move = cli.h == 1;

    let stdin = stdin();

    println!("Welcome to Connect {}\n", cli.m);

    // game loop
    loop {
        display(&board).context("Failed to draw board!")?;

        match board.status() {
            Status::Won(HUMAN) => {
                println!("Human wins!");
                break;
            }
            Status::Won(_) => {
                println!("Computer wins!");
                break;
            }
            Status::Draw => {
                println!("The game is a draw.");
                break;
            }
            Status::Playing => {}
        }

        if human_to_move {
            print!("Enter column (1-{}): ", board.size());
            stdout().flush().context("Failed to flush to stdout!")?;

            let mut input_str = String::new();
            if stdin.read_line(&mut input_str)? == 0 {
                // stdin closed, nobody left to play
                break;
            }
            let column = match input_str.trim().parse::<usize>() {
                Ok(column) => column,
                Err(_) => {
                    println!("Invalid input. Please enter a number.");
                    continue;
                }
            };
            if column < 1 || column > board.size() {
                println!("Column out of range.");
                continue;
            }
            if !board.play(column - 1, HUMAN) {
                println!("Column is full. Choose another column.");
                continue;
            }
        } else {
            println!("Computer is thinking...");
            stdout().flush().context("Failed to flush to stdout!")?;

            let mut searcher = Searcher::new(&board, perspective);
            let column = match searcher.select_move(cli.depth) {
                Some(column) => column,
                None => {
                    println!("No valid moves available. Game over.");
                    break;
                }
            };
            board
                .play_checked(column, COMPUTER)
                .context("search chose an unplayable column")?;
            println!("Computer places disk in column {}", column + 1);
        }
        human_to_move = !human_to_move;
    }
    Ok(())
}

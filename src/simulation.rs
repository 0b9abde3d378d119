//! Engine-vs-engine games and depth sweeps

use indicatif::*;
use rayon::prelude::*;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::mpsc::*;
use std::thread;
use std::time::*;

use crate::{
    board::*,
    error::{BoardError, Result},
    search::{Perspective, Searcher},
};

/// The result of one simulated game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    /// Engine #1 (X) made a line
    FirstWins,
    /// Engine #2 (O) made a line
    SecondWins,
    Draw,
}

/// Parameters of one simulated game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameConfig {
    pub size: usize,
    pub connect: usize,
    /// search depth of engine #1, which plays X and moves first
    pub depth_one: usize,
    /// search depth of engine #2, which plays O
    pub depth_two: usize,
    /// moves played before the game is called, `size * size` if `None`
    pub max_moves: Option<usize>,
}

/// Plays one game between two searching engines
pub fn simulate_game(config: &GameConfig) -> Result<Outcome> {
    let mut board = Board::new(config.size, config.connect)?;
    // a depth 0 engine never moves, which would pass for a draw
    if config.depth_one == 0 || config.depth_two == 0 {
        return Err(BoardError::InvalidDepth);
    }
    let max_moves = config.max_moves.unwrap_or(config.size * config.size);

    // engine #2 runs the same search with the roles swapped
    let first = Perspective::new(Token::X);
    let players = [
        (first, config.depth_one),
        (first.swapped(), config.depth_two),
    ];

    for turn in 0..max_moves {
        if board.is_terminal() {
            break;
        }
        let (perspective, depth) = players[turn % 2];
        match Searcher::new(&board, perspective).select_move(depth) {
            Some(column) => {
                board.play_checked(column, perspective.mine)?;
            }
            None => break,
        }
    }

    let outcome = if board.has_line(Token::X) {
        Outcome::FirstWins
    } else if board.has_line(Token::O) {
        Outcome::SecondWins
    } else {
        Outcome::Draw
    };
    log::info!("{:?} finished after {} moves: {:?}", config, board.num_moves(), outcome);
    Ok(outcome)
}

/// Parameters of a depth sweep
#[derive(Clone, Debug)]
pub struct SweepConfig {
    pub sizes: Vec<usize>,
    pub depths: Vec<usize>,
    /// games per (size, depth #1, depth #2) triple
    pub games: usize,
    /// connect length, the board size if `None`
    pub connect: Option<usize>,
    /// draw a progress bar on stderr
    pub progress: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: vec![3, 4, 5, 6],
            depths: vec![1, 2, 3, 4],
            games: 3,
            connect: None,
            progress: true,
        }
    }
}

/// Outcome counts for one pairing of depths
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct Tally {
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::FirstWins => self.first_wins += 1,
            Outcome::SecondWins => self.second_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.first_wins + self.second_wins + self.draws
    }

    /// The side that won more games, `None` when neither did
    pub fn verdict(&self) -> Option<Token> {
        use std::cmp::Ordering;
        match self.first_wins.cmp(&self.second_wins) {
            Ordering::Greater => Some(Token::X),
            Ordering::Less => Some(Token::O),
            Ordering::Equal => None,
        }
    }
}

/// Tallies of a sweep keyed by (size, depth #1, depth #2)
#[derive(Clone, Debug)]
pub struct SweepReport {
    pub depths: Vec<usize>,
    pub results: BTreeMap<(usize, usize, usize), Tally>,
}

impl SweepReport {
    pub fn tally(&self, size: usize, depth_one: usize, depth_two: usize) -> Option<&Tally> {
        self.results.get(&(size, depth_one, depth_two))
    }

    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.results.keys().map(|&(size, _, _)| size).collect();
        sizes.dedup();
        sizes
    }

    /// Draws summed over every depth pairing on `size`
    pub fn total_draws(&self, size: usize) -> usize {
        self.results
            .iter()
            .filter(|((s, _, _), _)| *s == size)
            .map(|(_, tally)| tally.draws)
            .sum()
    }
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for size in self.sizes() {
            writeln!(f, "{}x{} board (rows: AI #1 depth, columns: AI #2 depth)", size, size)?;
            write!(f, "     ")?;
            for depth_two in self.depths.iter() {
                write!(f, "{:>12}", depth_two)?;
            }
            writeln!(f)?;
            for &depth_one in self.depths.iter() {
                write!(f, "{:>5}", depth_one)?;
                for &depth_two in self.depths.iter() {
                    let cell = match self.tally(size, depth_one, depth_two) {
                        Some(tally) => match tally.verdict() {
                            Some(Token::X) => format!("1:{} 2:{}", tally.first_wins, tally.second_wins),
                            Some(Token::O) => format!("2:{} 1:{}", tally.second_wins, tally.first_wins),
                            None => format!("D:{}", tally.draws),
                        },
                        None => "-".to_string(),
                    };
                    write!(f, "{:>12}", cell)?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Total draws by board size")?;
        for size in self.sizes() {
            writeln!(f, "{:>5}x{:<3} {}", size, size, self.total_draws(size))?;
        }
        Ok(())
    }
}

/// Plays every configured game, running independent games in parallel
pub fn run_sweep(config: &SweepConfig) -> Result<SweepReport> {
    let start = Instant::now();

    let mut games = Vec::new();
    for &size in config.sizes.iter() {
        for &depth_one in config.depths.iter() {
            for &depth_two in config.depths.iter() {
                for _ in 0..config.games {
                    games.push(GameConfig {
                        size,
                        connect: config.connect.unwrap_or(size),
                        depth_one,
                        depth_two,
                        max_moves: None,
                    });
                }
            }
        }
    }
    // fail fast on bad parameters rather than partway through the sweep
    for game in games.iter() {
        Board::new(game.size, game.connect)?;
        if game.depth_one == 0 || game.depth_two == 0 {
            return Err(BoardError::InvalidDepth);
        }
    }

    let progress = if config.progress {
        ProgressBar::new(games.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Simulating games: {bar:40.cyan/blue} {msg} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    enum Message {
        Played(GameConfig, Result<Outcome>),
        Finish,
    }
    let (tx, rx) = channel();

    let jobs = games.clone();
    thread::spawn(move || {
        // stop handing out games once the receiver hangs up after a failure
        let played = jobs.par_iter().try_for_each_with(tx.clone(), |tx, game| {
            tx.send(Message::Played(*game, simulate_game(game)))
        });
        if played.is_ok() {
            let _ = tx.send(Message::Finish);
        }
    });

    let mut results: BTreeMap<(usize, usize, usize), Tally> = BTreeMap::new();
    let mut running = true;
    while running {
        match rx.recv() {
            Ok(Message::Played(game, outcome)) => {
                let outcome = match outcome {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        progress.abandon();
                        // dropping the receiver stops the workers
                        drop(rx);
                        return Err(err);
                    }
                };
                results
                    .entry((game.size, game.depth_one, game.depth_two))
                    .or_default()
                    .record(outcome);
                progress.inc(1);
                progress.set_message(&format!("({} / {})", progress.position(), progress.length()));
            }
            Ok(Message::Finish) | Err(_) => running = false,
        }
    }
    progress.finish();

    log::info!(
        "sweep of {} games completed in {}",
        games.len(),
        HumanDuration(start.elapsed())
    );

    Ok(SweepReport {
        depths: config.depths.clone(),
        results,
    })
}

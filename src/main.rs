#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use seabattle::{
    init_logging, persistence, ui, BoardSize, Game, RandomTargeter, MAX_LENGTH, MAX_WIDTH,
    MIN_LENGTH, MIN_WIDTH,
};

#[cfg(feature = "std")]
const SCREEN_WIDTH: usize = 80;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(MIN_LENGTH as i64..=MAX_LENGTH as i64))]
        length: u8,
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(MIN_WIDTH as i64..=MAX_WIDTH as i64))]
        width: u8,
        #[arg(long, default_value = "Player")]
        name: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = ".", help = "Directory holding saved games")]
        save_dir: PathBuf,
        #[arg(long, help = "Start a new game even if one is saved")]
        fresh: bool,
    },
    /// Let two random players fight and print the result.
    Simulate {
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(MIN_LENGTH as i64..=MAX_LENGTH as i64))]
        length: u8,
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(MIN_WIDTH as i64..=MAX_WIDTH as i64))]
        width: u8,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            length,
            width,
            name,
            seed,
            save_dir,
            fresh,
        } => {
            let size = BoardSize::new(length as usize, width as usize)
                .map_err(|e| anyhow::anyhow!(e))?;
            let mut rng = make_rng(seed);
            let saved = if fresh {
                None
            } else {
                persistence::load(&save_dir, size)
            };
            let game = match saved {
                Some(game) => {
                    println!("Resuming saved game.");
                    game
                }
                None => Game::new(size, name, "Computer", &mut rng).map_err(|e| anyhow::anyhow!(e))?,
            };
            play(game, &mut rng, &save_dir)?;
        }
        Commands::Simulate { length, width, seed } => {
            let size = BoardSize::new(length as usize, width as usize)
                .map_err(|e| anyhow::anyhow!(e))?;
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut game = Game::new(size, "Random 1", "Random 2", &mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            let mut targeters = [
                RandomTargeter::new(&mut rng, &game.players()[0]),
                RandomTargeter::new(&mut rng, &game.players()[1]),
            ];
            while !game.is_finished() {
                let turn = game.turn();
                let (x, y) = targeters[turn]
                    .next_target(game.current_player())
                    .ok_or_else(|| anyhow::anyhow!("player {} ran out of targets", turn))?;
                game.shoot(x, y).map_err(|e| anyhow::anyhow!(e))?;
            }
            for player in game.players() {
                println!("{}", ui::status_line(player));
            }
            if let Some(winner) = game.winner() {
                println!("{} wins!", game.players()[winner].name());
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play(mut game: Game, rng: &mut SmallRng, save_dir: &std::path::Path) -> anyhow::Result<()> {
    let host = game.host();
    let opponent = Game::opponent_of(host);
    let mut targeter = RandomTargeter::new(rng, &game.players()[opponent]);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut messages: Vec<String> = Vec::new();

    while !game.is_finished() {
        if game.turn() != host {
            let (x, y) = targeter
                .next_target(game.current_player())
                .ok_or_else(|| anyhow::anyhow!("computer ran out of targets"))?;
            let report = game.shoot(x, y).map_err(|e| anyhow::anyhow!(e))?;
            messages.push(format!(
                "Enemy fired at {}: {}",
                ui::coord_to_string(x, y),
                ui::shot_message(&report, host)
            ));
            continue;
        }

        let me = &game.players()[host];
        println!("\n{}", ui::display(me, SCREEN_WIDTH));
        println!("{}", ui::legend().join("\n"));
        println!("{}", ui::status_line(me));
        for message in messages.drain(..) {
            println!("{}", message);
        }
        print!("Enter target: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            persistence::save(save_dir, &game)?;
            return Ok(());
        };
        let line = line?;
        if line.trim().eq_ignore_ascii_case("q") {
            persistence::save(save_dir, &game)?;
            println!("Game saved.");
            return Ok(());
        }
        let Some((x, y)) = ui::parse_target(&line) else {
            messages.push(ui::target_hint(game.size()));
            continue;
        };
        let report = game.shoot(x, y).map_err(|e| anyhow::anyhow!(e))?;
        messages.push(ui::shot_message(&report, host).to_string());
    }

    println!("\n{}", ui::display(&game.players()[host], SCREEN_WIDTH));
    for player in game.players() {
        println!("{}", ui::status_line(player));
    }
    for message in messages.drain(..) {
        println!("{}", message);
    }
    persistence::discard(save_dir, game.size());
    Ok(())
}

//! Rock Paper Scissors in the terminal
//!
//! Interactive by default. With `--moves` the given moves are played
//! without prompting, which needs `--name` and `--rounds` as well.

mod cli;
mod prompt;
mod render;

use clap::Parser;
use rps_logic::{GameConfig, Phase, PlayError, SeededRng, Session};

use cli::Args;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.load_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("opponent seed {}", seed);

    if args.scripted() {
        play_scripted(&args, config, seed)
    } else {
        play_interactive(&args, config, seed)
    }
}

fn play_interactive(args: &Args, config: GameConfig, seed: u64) -> anyhow::Result<()> {
    if !args.no_intro {
        println!("{}", render::intro());
    }

    let mut name = args.name.clone();
    let mut rounds = args.rounds.clone();
    let mut game = 0u64;
    loop {
        let mut session = Session::new(config.clone(), SeededRng::from_u64(game_seed(seed, game)));
        session.dismiss_intro();

        prompt::setup(&mut session, name.take(), rounds.take())?;
        println!("{}", render::setup(&session.view()));

        while session.phase() == Phase::Playing {
            let player_move = prompt::choose_move()?;
            let report = session.play(player_move)?;
            println!("{}", render::round(&report, &session.view()));
        }

        if !prompt::play_again()? {
            return Ok(());
        }
        game += 1;
    }
}

/// Seed for the `game`-th session of a run
fn game_seed(seed: u64, game: u64) -> u64 {
    seed.wrapping_add(game)
}

fn play_scripted(args: &Args, config: GameConfig, seed: u64) -> anyhow::Result<()> {
    let (Some(name), Some(rounds)) = (&args.name, &args.rounds) else {
        anyhow::bail!("--moves needs --name and --rounds");
    };

    let mut session = Session::new(config, SeededRng::from_u64(seed));
    session.dismiss_intro();
    session.submit_setup(name, rounds)?;
    println!("{}", render::setup(&session.view()));

    for (i, &player_move) in args.moves.iter().enumerate() {
        match session.play(player_move) {
            Ok(report) => println!("{}", render::round(&report, &session.view())),
            Err(PlayError::Finished) => {
                log::warn!("game finished, {} move(s) not played", args.moves.len() - i);
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if session.phase() == Phase::Playing {
        println!("\n{}", render::scoreboard(&session.view()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_logic::{Move, RoundReport};

    fn computer_moves(seed: u64) -> Vec<Move> {
        let mut session = Session::new(GameConfig::default(), SeededRng::from_u64(seed));
        session.submit_setup("ada", "30").unwrap();
        (0..30)
            .map(|_| session.play(Move::Rock))
            .map(|report: Result<RoundReport, PlayError>| report.unwrap().computer_move)
            .collect()
    }

    #[test]
    fn test_play_again_draws_a_new_game() {
        for seed in [0u64, 1, 7, 1 << 40, u64::MAX - 2] {
            let mut previous = computer_moves(game_seed(seed, 0));
            for game in 1..8 {
                let next = computer_moves(game_seed(seed, game));
                assert_ne!(next, previous, "seed {} game {} replayed the previous game", seed, game);
                previous = next;
            }
        }
    }

    #[test]
    fn test_game_seed_wraps() {
        assert_eq!(game_seed(u64::MAX, 1), 0);
        assert_eq!(game_seed(5, 0), 5);
    }
}

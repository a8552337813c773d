//! Interactive input via dialoguer

use dialoguer::{Confirm, Input, Select};
use rps_logic::{Move, MoveSource, Session};

use crate::render;

/// Ask for name and rounds until the session accepts them
///
/// Values given on the command line are tried first.
pub fn setup<S: MoveSource>(
    session: &mut Session<S>,
    mut name: Option<String>,
    mut rounds: Option<String>,
) -> anyhow::Result<()> {
    loop {
        let n = match name.take() {
            Some(n) => n,
            None => Input::<String>::new()
                .with_prompt("Your name")
                .allow_empty(true)
                .interact_text()?,
        };
        let r = match rounds.take() {
            Some(r) => r,
            None => Input::<String>::new()
                .with_prompt("Rounds")
                .default(session.state().round().to_string())
                .allow_empty(true)
                .interact_text()?,
        };
        match session.submit_setup(&n, &r) {
            Ok(_) => return Ok(()),
            Err(e) => println!("{}", render::error(&e)),
        }
    }
}

pub fn choose_move() -> anyhow::Result<Move> {
    let items: Vec<&str> = Move::ALL.iter().map(|m| m.icon()).collect();
    let selection = Select::new()
        .with_prompt("Your move")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Move::from_index(selection))
}

pub fn play_again() -> anyhow::Result<bool> {
    Ok(Confirm::new()
        .with_prompt("Play again?")
        .default(true)
        .interact()?)
}

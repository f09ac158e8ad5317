//! Interactive console game against the uniform random bot.

use colored::Colorize;
use dialoguer::Input;

use rps_plus::{GameSession, Outcome, Player, RoundReport};

fn main() {
    env_logger::init();

    println!();
    println!("{}", "Rock-Paper-Scissors-Plus".bold());
    println!("Best of 3 rounds");
    println!("Moves: rock, paper, scissors, bomb (once)");
    println!("Invalid input wastes the round");
    println!();

    let mut session = GameSession::from_entropy();

    while !session.is_over() {
        let round = session.state().round() + 1;
        println!("{}", format!("--- Round {round} ---").cyan());

        let raw: String = match Input::new().with_prompt("Your move").interact_text() {
            Ok(input) => input,
            Err(err) => {
                log::error!("input closed: {err}");
                return;
            }
        };

        let Some(report) = session.play_round(&raw) else {
            break;
        };

        match report {
            RoundReport::Forfeited { reason, summary } => {
                println!("{} {reason}", "Invalid move:".red());
                println!("Round wasted. Round {} of 3 done.", summary.round);
            }
            RoundReport::Resolved {
                user_move,
                bot_move,
                outcome,
                summary,
            } => {
                println!("You played: {user_move}");
                println!("Bot played: {bot_move}");
                let verdict = match outcome {
                    Outcome::User => "YOU WIN THE ROUND".green(),
                    Outcome::Bot => "BOT WINS THE ROUND".red(),
                    Outcome::Draw => "DRAW".yellow(),
                };
                println!("Round result: {verdict}");
                println!(
                    "Score -> You: {} | Bot: {}",
                    summary.user_score, summary.bot_score
                );
            }
        }
        println!();
    }

    println!("{}", "GAME OVER".bold());
    let state = session.state();
    println!(
        "Final score -> You: {} | Bot: {}",
        state.score(Player::User),
        state.score(Player::Bot)
    );
    match session.final_result() {
        Some(Outcome::User) => println!("{}", "Final Result: YOU WIN".green().bold()),
        Some(Outcome::Bot) => println!("{}", "Final Result: BOT WINS".red().bold()),
        Some(Outcome::Draw) => println!("{}", "Final Result: DRAW".yellow().bold()),
        None => {}
    }
}

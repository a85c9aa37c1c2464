//! CLI blackjack example.
//!
//! Set `RUST_LOG=debug` to watch the engine's transitions.

use std::io::{self, BufRead, Write};

use bj21::{Card, CardView, Game, GameEvent, Participant, Snapshot, Suit};

fn main() {
    env_logger::init();
    println!("Blackjack 21 (type 'q' to quit)");

    let mut game = Game::from_entropy();
    let mut stdin = io::stdin().lock();

    loop {
        match game.deal() {
            Ok(view) => play_events(&view.events),
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        }

        while !game.state().round_over() {
            print_table(&game.current_state());

            let result = match prompt_line(&mut stdin, "[h]it [s]tand [q]uit: ").as_str() {
                "h" | "hit" => game.hit().map(|view| view.events),
                "s" | "stand" => game.stand().map(|view| view.events),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(events) => play_events(&events),
                Err(err) => {
                    println!("Action error: {err}");
                    break;
                }
            }
        }

        print_table(&game.current_state());

        match prompt_line(&mut stdin, "Deal again? (y/n): ").as_str() {
            "y" | "yes" | "" => {}
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

fn play_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::RoundStarted => println!("\nNew round."),
            GameEvent::CardDealt { to, card } => {
                let who = match to {
                    Participant::Player => "Player",
                    Participant::Dealer => "Dealer",
                };
                println!("{who} draws {}", format_view(*card));
            }
            GameEvent::HoleCardRevealed(card) => {
                println!("Dealer reveals {}", format_card(card));
            }
            GameEvent::RoundEnded(result) => {
                println!(
                    "{} (you {}, dealer {})",
                    result.outcome, result.player_value, result.dealer_value
                );
            }
        }
    }
}

/// Reads one trimmed, lowercased line. End of input reads as "q".
fn prompt_line(reader: &mut impl BufRead, prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return String::from("q"),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn print_table(snapshot: &Snapshot) {
    println!("\nDeck: {} cards remaining", snapshot.cards_remaining);

    let dealer = snapshot
        .dealer_hand
        .iter()
        .map(|view| format_view(*view))
        .collect::<Vec<_>>()
        .join(" ");
    let dealer_value = snapshot
        .dealer_score
        .map_or_else(|| String::from("??"), |value| value.to_string());
    println!("Dealer: {dealer} (value {dealer_value})");

    let player = snapshot
        .player_hand
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("You:    {player} (value {})", snapshot.player_score);
    println!();
}

fn format_view(view: CardView) -> String {
    view.card()
        .map_or_else(|| String::from("??"), |card| format_card(&card))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

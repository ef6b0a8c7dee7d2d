//! Deal command handler for sample deal generation and display.
//!
//! Shuffles a seeded deck, deals a ten-card draw input, and prints it with
//! its evaluation. The command supports optional seeding for deterministic
//! dealing and reproducibility.

use std::io::Write;

use drawhand_engine::deck::Deck;
use drawhand_engine::hand::best_hand;

use crate::error::CliError;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(base_seed);
    deck.shuffle();
    let deal = deck
        .deal_draw()
        .ok_or_else(|| CliError::Engine("deck exhausted before ten cards".into()))?;
    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "{} Best hand: {}", deal, best_hand(&deal))?;
    Ok(())
}

//! Sets command handler: the cardset debug view.
//!
//! Prints every five-card set the generator derives from one ten-card deal,
//! one set per line, in pattern order. Useful for inspecting which
//! replacement pattern produced a winning combination.

use std::io::Write;

use drawhand_engine::deal::Deal;
use drawhand_engine::draw;

use crate::error::CliError;

/// Handle the sets command.
///
/// # Arguments
///
/// * `tokens` - The ten card tokens of the deal, as given on the command line
/// * `out` - Output stream for the cardset listing
pub fn handle_sets_command(tokens: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let deal: Deal = tokens.join(" ").parse()?;
    for set in draw::cardsets(&deal) {
        let cards: Vec<String> = set.iter().map(|c| c.to_string()).collect();
        writeln!(out, "{}", cards.join(" "))?;
    }
    Ok(())
}

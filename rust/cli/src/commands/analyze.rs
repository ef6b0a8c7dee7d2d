//! Analyze command handler for line-by-line deal evaluation.
//!
//! Reads ten-token deal lines from stdin or a file, evaluates each through
//! the engine, and prints the deal together with its best hand. Malformed
//! lines are reported on stderr and skipped so a batch run never aborts
//! halfway through its input.

use std::io::{BufRead, BufReader, Write};

use drawhand_engine::deal::Deal;
use drawhand_engine::hand::best_hand;
use drawhand_engine::logger::{EvalLogger, EvalRecord};

use crate::error::CliError;

/// Handle the analyze command.
///
/// # Arguments
///
/// * `input` - Optional path to read deal lines from; stdin when absent
/// * `log` - Optional path for a JSONL record per evaluated deal
/// * `out` - Output stream for evaluation results
/// * `err` - Output stream for per-line input errors
/// * `stdin` - Line source used when no input file is given
///
/// # Returns
///
/// `Ok(())` when the whole input was consumed; malformed lines are not
/// errors, they are reported and skipped.
pub fn handle_analyze_command(
    input: Option<String>,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut logger = log.map(EvalLogger::create).transpose()?;
    match input {
        Some(path) => {
            let file = std::fs::File::open(&path)
                .map_err(|e| CliError::InvalidInput(format!("{}: {}", path, e)))?;
            analyze_lines(&mut BufReader::new(file), &mut logger, out, err)
        }
        None => analyze_lines(stdin, &mut logger, out, err),
    }
}

fn analyze_lines(
    reader: &mut dyn BufRead,
    logger: &mut Option<EvalLogger>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let deal: Deal = match line.parse() {
            Ok(deal) => deal,
            Err(e) => {
                writeln!(err, "Wrong input: {}", e)?;
                continue;
            }
        };
        let best = best_hand(&deal);
        writeln!(out, "{} Best hand: {}", deal, best)?;
        if let Some(logger) = logger.as_mut() {
            let deal_id = logger.next_id();
            logger.write(&EvalRecord {
                deal_id,
                seed: None,
                hand: deal.hand().to_vec(),
                pool: deal.pool().to_vec(),
                best,
                ts: None,
            })?;
        }
    }
    Ok(())
}

//! Core settlement engine.
//!
//! Reads the whole input once, validates it, parses the line-record grammar
//! into trips, and writes one adjustment line per participant with a blank
//! line after each trip.

use crate::error::{EngineError, Result};
use crate::money::Money;
use crate::trip::{Participant, Trip};
use crate::validate::{self, TERMINATOR};
use log::debug;
use std::io::{Read, Write};
use std::str::FromStr;

/// The settlement engine.
///
/// Holds the parsed trips so output can be written repeatedly; writing the
/// same trips twice yields byte-identical output.
///
/// # Record Grammar
///
/// ```text
/// <participantCount>            positive integer, "0" terminates the input
///   <receiptCount>              non-negative integer, per participant
///     <amount>                  decimal, receiptCount lines
/// ```
pub struct SettlementEngine {
    trips: Vec<Trip>,
}

impl SettlementEngine {
    /// Creates a new empty engine.
    pub fn new() -> Self {
        SettlementEngine { trips: Vec::new() }
    }

    /// Reads, validates, and parses an entire input source.
    ///
    /// The source is consumed in a single read; validation and parsing both
    /// run over the in-memory line list.
    pub fn process_reader<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.process_str(&text)
    }

    /// Validates and parses input already held in memory.
    ///
    /// Validation failures are recoverable (the caller may ask for another
    /// file); a grammar failure after a clean validation pass is not.
    pub fn process_str(&mut self, text: &str) -> Result<()> {
        let lines: Vec<&str> = text.lines().collect();
        validate::scan(lines.iter().copied())?;
        self.trips = parse_trips(&lines)?;
        Ok(())
    }

    /// The parsed trips, in input order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Writes settlement adjustments for every trip.
    ///
    /// Per trip: one line per participant in input order, then a blank line.
    pub fn write_output<W: Write>(&self, mut writer: W) -> Result<()> {
        for trip in &self.trips {
            for adjustment in trip.adjustments() {
                writeln!(writer, "{}", adjustment.to_adjustment_string())?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Default for SettlementEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Cursor over the input lines, tracking 1-based line numbers for errors.
struct LineCursor<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(lines: &'a [&'a str]) -> Self {
        LineCursor { lines, pos: 0 }
    }

    fn next(&mut self) -> Option<(usize, &'a str)> {
        let line = *self.lines.get(self.pos)?;
        self.pos += 1;
        Some((self.pos, line))
    }

    fn next_or(&mut self, context: &str) -> Result<(usize, &'a str)> {
        self.next().ok_or_else(|| EngineError::Malformed {
            line: self.lines.len(),
            message: format!("unexpected end of input while reading {}", context),
        })
    }
}

/// Parses validated lines into trips, consuming up to the terminator.
///
/// Content after the terminator is ignored. Grammar violations here mean
/// validation and parsing disagree, so they surface as fatal
/// [`EngineError::Malformed`] rather than a re-promptable rejection.
fn parse_trips(lines: &[&str]) -> Result<Vec<Trip>> {
    let mut cursor = LineCursor::new(lines);
    let mut trips = Vec::new();

    loop {
        let (line_no, raw) = cursor.next_or("a participant count")?;
        if raw == TERMINATOR {
            debug!("terminator reached after {} trip(s)", trips.len());
            return Ok(trips);
        }

        let participant_count = parse_count(raw, line_no)?;
        if participant_count == 0 {
            return Err(EngineError::Malformed {
                line: line_no,
                message: "participant count must be positive".to_string(),
            });
        }

        let mut participants = Vec::with_capacity(participant_count);
        for _ in 0..participant_count {
            let (line_no, raw) = cursor.next_or("a receipt count")?;
            let receipt_count = parse_count(raw, line_no)?;

            let mut receipts = Vec::with_capacity(receipt_count);
            for _ in 0..receipt_count {
                let (line_no, raw) = cursor.next_or("a receipt amount")?;
                let amount = Money::from_str(raw).map_err(|_| EngineError::Malformed {
                    line: line_no,
                    message: format!("expected a decimal amount, found {:?}", raw),
                })?;
                receipts.push(amount);
            }
            participants.push(Participant::new(receipts));
        }

        let trip = Trip::new(participants);
        debug!(
            "trip {}: {} participant(s), total expense {}, share {}",
            trips.len() + 1,
            trip.participant_count(),
            trip.total_expense(),
            trip.share()
        );
        trips.push(trip);
    }
}

fn parse_count(raw: &str, line_no: usize) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| EngineError::Malformed {
            line: line_no,
            message: format!("expected a count, found {:?}", raw),
        })
}

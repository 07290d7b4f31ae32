use crate::models::Dish;
use chrono::NaiveDate;

/// State the client owns: the date being viewed and the dish waiting for a weight.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub date: NaiveDate,
    pub selected_dish: Option<Dish>,
}

impl SessionState {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            selected_dish: None,
        }
    }
}

/// Hands out increasing sequence numbers for one kind of request.
/// Only the newest issued number is current.
#[derive(Debug, Default, Clone)]
pub struct Sequencer {
    latest: u64,
}

impl Sequencer {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Makes every number issued so far stale.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub(crate) seq: u64,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsTicket {
    pub(crate) seq: u64,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_sequence_is_current() {
        let mut seq = Sequencer::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));

        seq.invalidate();
        assert!(!seq.is_current(second));
    }
}

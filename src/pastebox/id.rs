//! Paste id generation.
//!
//! Ids are the creation time in milliseconds, base36 encoded (`lq2k9x1a`).
//! The generator never hands out the same value twice: when the clock has not
//! moved past the last issued tick, the next tick is used instead.

use chrono::Utc;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn encode_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id based on the wall clock.
    pub fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }

    /// Next id for an explicit clock reading in milliseconds.
    pub fn next_at(&mut self, now_millis: u64) -> String {
        let tick = if now_millis > self.last {
            now_millis
        } else {
            self.last + 1
        };
        self.last = tick;
        encode_base36(tick)
    }

    /// Next id that `taken` does not claim.
    pub fn next_unused<F>(&mut self, taken: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let id = self.next_id();
            if !taken(&id) {
                return id;
            }
        }
    }
}

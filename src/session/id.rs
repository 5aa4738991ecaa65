use core::fmt;
use core::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::SessionError;

const PREFIX: &str = "game-";

/// Opaque session identifier, rendered as `game-<digits>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = SessionError;

    /// Accepts exactly `game-` followed by ASCII digits with no leading zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(PREFIX)
            .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
            .filter(|d| d.len() == 1 || !d.starts_with('0'))
            .ok_or(SessionError::InvalidIdentifier)?;
        digits
            .parse()
            .map(Self)
            .map_err(|_| SessionError::InvalidIdentifier)
    }
}

/// Issues identifiers from the wall clock, strictly increasing.
///
/// Two calls never return the same value, even from different threads within
/// the same clock tick.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub(crate) fn next(&self) -> SessionId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64);
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        SessionId(now.max(previous.saturating_add(1)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn parse_accepts_only_the_pattern() {
        let id: SessionId = "game-1712".parse().unwrap();
        assert_eq!(id.to_string(), "game-1712");
        assert_eq!("game-0".parse::<SessionId>().unwrap().to_string(), "game-0");

        for bad in [
            "",
            "game-",
            "game-12a",
            "Game-12",
            "game--12",
            "game-+12",
            "../game-12",
            "game-12 ",
            "game-0007",
            "game-00",
            "game-99999999999999999999999",
        ] {
            assert_eq!(
                bad.parse::<SessionId>().unwrap_err(),
                SessionError::InvalidIdentifier,
                "{bad:?}"
            );
        }
    }

    #[test]
    fn generated_ids_are_unique_across_threads() {
        let generator = Arc::new(IdGenerator::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || (0..500).map(|_| generator.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "{id} issued twice");
            }
        }
        assert_eq!(seen.len(), 8 * 500);
    }

    #[test]
    fn generated_ids_round_trip() {
        let generator = IdGenerator::default();
        let id = generator.next();
        assert_eq!(id.to_string().parse::<SessionId>().unwrap(), id);
        assert!(generator.next() > id);
    }
}

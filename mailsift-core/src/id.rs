//! Human-friendly message id generation.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::seq::SliceRandom;

static COUNTER: AtomicU64 = AtomicU64::new(1);

const ADJECTIVES: &[&str] = &[
    "amber", "brisk", "calm", "dusty", "eager", "faint", "gentle", "hazy", "keen", "lively",
    "mellow", "nimble", "pale", "quiet", "rusty", "stout", "tidy", "vivid", "warm", "young",
];

const NOUNS: &[&str] = &[
    "falcon", "harbor", "meadow", "orchid", "pebble", "quartz", "ravine", "spruce", "thicket",
    "willow", "canyon", "ember", "glacier", "lantern", "marble", "nettle", "osprey", "prairie",
    "summit", "tundra",
];

/// Generate a message id like `gentle-osprey-17`. Unique for the lifetime of
/// the process.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    // the lists are non-empty constants, choose cannot fail
    let adjective = ADJECTIVES.choose(&mut rng).copied().unwrap_or("plain");
    let noun = NOUNS.choose(&mut rng).copied().unwrap_or("note");
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{adjective}-{noun}-{n}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<String> = (0..100).map(|_| generate()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_id_shape() {
        let id = generate();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[2].parse::<u64>().is_ok());
    }
}

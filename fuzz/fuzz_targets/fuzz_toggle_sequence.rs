#![no_main]

use libfuzzer_sys::fuzz_target;
use navtree_core::classify::SecondaryClassifier;
use navtree_core::expansion::{ExpansionSet, apply_toggle};

const KEYS: [&str; 8] = ["t0", "t1", "s0", "s1", "s2", "s3", "d0", "d1"];

fn is_secondary(id: &str) -> bool {
    id.starts_with('s')
}

fuzz_target!(|data: &[u8]| {
    // Each byte is a bitmask over KEYS: the full set the renderer requests.
    let classifier = is_secondary;
    let mut open = ExpansionSet::new();
    for &mask in data.iter().take(256) {
        let requested: Vec<&str> = KEYS
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, k)| *k)
            .collect();
        open = apply_toggle(&open, requested, &classifier);
        assert!(
            open.iter().filter(|id| classifier.is_secondary(id)).count() <= 1,
            "more than one secondary branch open"
        );
    }
});

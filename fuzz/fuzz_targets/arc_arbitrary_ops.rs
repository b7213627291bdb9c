#![no_main]

use arckit::builder::{ArcCacheBuilder, Replacement};
use arckit::policy::arc::{ARCCore, Segment};
use arckit::traits::{CoreCache, MutableCache, ReadOnlyCache};
use libfuzzer_sys::fuzz_target;

// Arbitrary insert / get / remove / clear sequences on ARCCore. The first
// byte picks the capacity and the replacement rule; structural invariants
// and hit accounting are checked after every step.
fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };

    let capacity = (first as usize % 32) + 1;
    let replacement = if first & 0x80 == 0 {
        Replacement::RecencyFirst
    } else {
        Replacement::Adaptive
    };
    let mut cache: ARCCore<u8, u16> = ArcCacheBuilder::new(capacity)
        .replacement(replacement)
        .build();
    let mut expected_hits = 0u64;
    let mut gets = 0u64;

    for chunk in rest.chunks_exact(3) {
        let key = chunk[1] % 64;
        let value = u16::from(chunk[2]);

        match chunk[0] % 8 {
            0..=3 => {
                cache.insert(key, value);
                assert_eq!(cache.peek(&key), Some(&value));
            },
            4..=6 => {
                let resident = cache.contains(&key);
                gets += 1;
                if resident {
                    expected_hits += 1;
                }
                assert_eq!(cache.get(&key).is_some(), resident);
                if resident {
                    assert_eq!(cache.locate(&key), Some(Segment::T2));
                }
            },
            _ => {
                if value % 16 == 0 {
                    cache.clear();
                    assert!(cache.is_empty());
                } else {
                    cache.remove(&key);
                    assert!(!cache.contains(&key));
                }
            },
        }

        cache.debug_validate_invariants();
        assert!(cache.len() <= capacity);
        assert!(cache.p_value() <= capacity);
    }

    assert_eq!(cache.stats().hits(), expected_hits);
    assert_eq!(cache.stats().lookups(), gets);
});

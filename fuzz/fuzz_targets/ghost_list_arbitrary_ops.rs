#![no_main]

use arckit::ds::GhostList;
use libfuzzer_sys::fuzz_target;

// Arbitrary record / remove / contains / clear sequences on GhostList.
// The first byte picks the capacity; the list must stay bounded and prune
// strictly oldest-first.
fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };

    let capacity = (first as usize) % 51;
    let mut ghost: GhostList<u32> = GhostList::new(capacity);
    let mut model: Vec<u32> = Vec::new(); // newest first

    for pair in rest.chunks_exact(2) {
        let op = pair[0] % 4;
        let key = u32::from(pair[1]);

        match op {
            0 => {
                let pruned = ghost.record(key);
                if capacity == 0 {
                    assert_eq!(pruned, None);
                } else if let Some(at) = model.iter().position(|k| *k == key) {
                    model.remove(at);
                    model.insert(0, key);
                    assert_eq!(pruned, None);
                } else {
                    model.insert(0, key);
                    let expected = if model.len() > capacity { model.pop() } else { None };
                    assert_eq!(pruned, expected);
                }
            },
            1 => {
                let was_present = model.iter().any(|k| *k == key);
                assert_eq!(ghost.remove(&key), was_present);
                model.retain(|k| *k != key);
            },
            2 => {
                assert_eq!(ghost.contains(&key), model.contains(&key));
            },
            3 => {
                ghost.clear();
                model.clear();
            },
            _ => unreachable!(),
        }

        ghost.debug_validate_invariants();
        assert!(ghost.len() <= ghost.capacity());
        assert_eq!(ghost.iter().copied().collect::<Vec<_>>(), model);
    }
});

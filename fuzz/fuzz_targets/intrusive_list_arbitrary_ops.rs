#![no_main]

use arckit::ds::IntrusiveList;
use libfuzzer_sys::fuzz_target;

// Arbitrary push_front / pop_back / move_to_front / remove / clear sequences
// on IntrusiveList, checked against a Vec model (front first).
fuzz_target!(|data: &[u8]| {
    let mut list: IntrusiveList<u32> = IntrusiveList::new();
    let mut model: Vec<(arckit::ds::SlotId, u32)> = Vec::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 5;
        let value = u32::from(pair[1]);

        match op {
            0 => {
                let id = list.push_front(value);
                model.insert(0, (id, value));
                assert_eq!(list.front(), Some(&value));
                assert_eq!(list.get(id), Some(&value));
            },
            1 => {
                let popped = list.pop_back();
                assert_eq!(popped, model.pop().map(|(_, v)| v));
            },
            2 => {
                if !model.is_empty() {
                    let at = value as usize % model.len();
                    let entry = model.remove(at);
                    assert!(list.move_to_front(entry.0));
                    model.insert(0, entry);
                    assert_eq!(list.front(), Some(&entry.1));
                }
            },
            3 => {
                if !model.is_empty() {
                    let at = value as usize % model.len();
                    let (id, expected) = model.remove(at);
                    assert_eq!(list.remove(id), Some(expected));
                    assert!(!list.contains(id));
                }
            },
            4 => {
                list.clear();
                model.clear();
            },
            _ => unreachable!(),
        }

        list.debug_validate_invariants();
        assert_eq!(list.len(), model.len());
        let values: Vec<u32> = list.iter().copied().collect();
        let expected: Vec<u32> = model.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, expected);
    }
});

// ==============================================
// ARC SCENARIO TESTS (integration)
// ==============================================
//
// End-to-end walks through the public API that pin down exact list contents,
// p movement and counter values.

use arckit::prelude::*;

fn t1(cache: &ARCCore<&'static str, i32>) -> Vec<&'static str> {
    cache.t1_keys().copied().collect()
}

fn t2(cache: &ARCCore<&'static str, i32>) -> Vec<&'static str> {
    cache.t2_keys().copied().collect()
}

mod construction {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        let err = ARCCore::<String, Vec<u8>>::try_new(0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: cache capacity must be greater than zero"
        );
        assert!(ArcCacheBuilder::new(0).try_build::<u32, u32>().is_err());
        assert!(ArcConfig::new(0).validate().is_err());
    }

    #[test]
    fn initial_target_is_half_capacity() {
        for (capacity, p) in [(1, 0), (2, 1), (7, 3), (100, 50)] {
            let cache: ARCCore<u32, u32> = ARCCore::new(capacity);
            assert_eq!(cache.p_value(), p);
            assert_eq!(cache.capacity(), capacity);
        }
    }

    #[test]
    fn byte_cache_alias_round_trips_values() {
        let mut cache: ByteArcCache = ARCCore::new(4);
        cache.insert("k".to_string(), vec![1, 2, 3]);
        assert_eq!(cache.get(&"k".to_string()), Some(&vec![1, 2, 3]));
        assert_eq!(cache.remove(&"k".to_string()), Some(vec![1, 2, 3]));
        assert!(cache.is_empty());
    }
}

mod size_two_walkthrough {
    use super::*;

    #[test]
    fn ghost_hit_with_empty_t2_evicts_from_t1() {
        let mut cache = ARCCore::new(2);

        cache.insert("a", 1);
        cache.insert("b", 2);
        assert_eq!(t1(&cache), vec!["b", "a"]);

        cache.insert("c", 3);
        assert_eq!(t1(&cache), vec!["c", "b"]);
        assert_eq!(cache.locate(&"a"), Some(Segment::B1));

        cache.insert("a", 10);
        assert_eq!(t1(&cache), vec!["c"]);
        assert_eq!(t2(&cache), vec!["a"]);
        assert_eq!(cache.locate(&"b"), Some(Segment::B1));
        assert_eq!(cache.b1_len(), 1);
        assert_eq!(cache.b2_len(), 0);
        assert_eq!(cache.p_value(), 2);
        assert_eq!(cache.len(), 2);
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn frequency_ghost_pulls_target_back_down() {
        let mut cache = ARCCore::new(2);
        cache.insert("a", 1);
        assert_eq!(cache.get(&"a"), Some(&1));
        cache.insert("b", 2);
        cache.insert("c", 3);

        cache.insert("b", 20);
        assert_eq!(cache.p_value(), 2);
        assert_eq!(cache.locate(&"a"), Some(Segment::B2));

        cache.insert("a", 10);
        assert_eq!(cache.p_value(), 1);
        assert_eq!(t2(&cache), vec!["a", "b"]);
        assert!(t1(&cache).is_empty());
        assert_eq!(cache.locate(&"c"), Some(Segment::B1));
        assert_eq!(cache.peek(&"a"), Some(&10));
        assert!(cache.check_invariants().is_ok());
    }
}

mod promotion {
    use super::*;

    #[test]
    fn first_get_after_insert_promotes_with_value_unchanged() {
        let mut cache = ARCCore::new(8);
        cache.insert("k", 7);
        assert_eq!(cache.locate(&"k"), Some(Segment::T1));

        assert_eq!(cache.get(&"k"), Some(&7));
        assert_eq!(cache.locate(&"k"), Some(Segment::T2));

        for _ in 0..3 {
            assert_eq!(cache.get(&"k"), Some(&7));
            assert_eq!(cache.locate(&"k"), Some(Segment::T2));
        }
    }

    #[test]
    fn t2_entries_are_never_demoted() {
        let mut cache = ARCCore::new(3);
        cache.insert("hot", 1);
        cache.get(&"hot");
        for (i, key) in ["x", "y", "z", "w"].into_iter().enumerate() {
            cache.insert(key, i as i32);
            assert_ne!(cache.locate(&"hot"), Some(Segment::T1));
        }
    }
}

mod ghost_adaptation {
    use super::*;

    #[test]
    fn reinserting_an_evicted_key_raises_p_for_every_size() {
        for size in 1..=16usize {
            let mut cache: ARCCore<usize, usize> = ARCCore::new(size);
            cache.insert(usize::MAX, 0);
            for k in 0..size {
                cache.insert(k, k);
            }
            assert_eq!(cache.locate(&usize::MAX), Some(Segment::B1), "size {size}");

            let before = cache.p_value();
            cache.insert(usize::MAX, 1);

            assert!(cache.p_value() > before, "size {size}");
            assert_eq!(cache.locate(&usize::MAX), Some(Segment::T2));
            assert_eq!(cache.peek(&usize::MAX), Some(&1));
            assert!(cache.len() <= size);
        }
    }

    #[test]
    fn removal_is_not_an_eviction() {
        let mut cache = ARCCore::new(4);
        cache.insert("a", 1);
        assert_eq!(cache.remove(&"a"), Some(1));
        assert_eq!(cache.locate(&"a"), None);

        cache.insert("a", 2);
        assert_eq!(cache.locate(&"a"), Some(Segment::T1));
        assert_eq!(cache.p_value(), 2);
    }
}

mod counters {
    use super::*;

    #[test]
    fn hits_and_misses_follow_residency() {
        let mut cache = ARCCore::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);

        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"nope"), None);
        cache.insert("c", 3); // evicts b
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"c"), Some(&3));

        let stats = cache.stats();
        assert_eq!(stats.hits(), 2);
        assert_eq!(stats.misses(), 2);
        assert_eq!(stats.lookups(), 4);
        assert!((stats.hit_ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn clear_keeps_counters_and_reset_zeroes_them() {
        let mut cache = ARCCore::new(2);
        cache.insert("a", 1);
        cache.get(&"a");
        cache.clear();

        assert_eq!(cache.stats().hits(), 1);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.stats().misses(), 1);

        cache.reset_stats();
        assert_eq!(cache.stats(), CacheStats::default());
    }
}

mod scan_resistance {
    use super::*;

    #[test]
    fn one_pass_scan_does_not_flush_reused_keys() {
        let mut arc: ARCCore<u32, u32> = ARCCore::new(10);
        let mut lru: LruCore<u32, u32> = LruCore::new(10);

        for hot in 0..5 {
            arc.insert(hot, hot);
            arc.get(&hot);
            lru.insert(hot, hot);
            lru.get(&hot);
        }
        for cold in 1_000..1_100 {
            arc.insert(cold, cold);
            lru.insert(cold, cold);
        }

        for hot in 0..5 {
            assert_eq!(arc.locate(&hot), Some(Segment::T2));
            assert!(!lru.contains(&hot));
        }
        assert_eq!(arc.len(), 10);
        assert_eq!(arc.b1_len(), 10);
        assert!(arc.check_invariants().is_ok());
    }
}

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rb_forest::RbSet;

#[derive(Clone, Debug)]
enum Op {
    Insert(u16),
    Remove(u16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u16..200).prop_map(Op::Insert),
        (0u16..200).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn property_invariants_hold_after_every_op(ops in proptest::collection::vec(op(), 1..300)) {
        let mut set = RbSet::new();
        let mut oracle = BTreeSet::new();
        let mut inserted = 0usize;
        let mut removed = 0usize;

        for op in ops {
            match op {
                Op::Insert(v) => {
                    let added = set.insert(v);
                    prop_assert_eq!(added, oracle.insert(v));
                    inserted += usize::from(added);
                }
                Op::Remove(v) => {
                    let gone = set.remove(&v);
                    prop_assert_eq!(gone, oracle.remove(&v));
                    removed += usize::from(gone);
                }
            }
            prop_assert!(set.check().is_ok(), "{:?}", set.check());
            let root = set.tree().root;
            if let Some(root) = root {
                prop_assert_eq!(set.arena()[root as usize].color(), rb_forest::Color::Black);
            }
        }

        prop_assert_eq!(set.tree().size(set.arena()), inserted - removed);
        prop_assert_eq!(set.len(), oracle.len());
        prop_assert!(set.iter().eq(oracle.iter()));
        let n = set.len() as f64;
        prop_assert!(set.tree().height(set.arena()) as f64 <= 2.0 * (n + 1.0).log2());
    }

    #[test]
    fn property_insert_all_then_erase_all_empties(
        values in proptest::collection::btree_set(any::<i32>(), 0..200),
        seed in any::<u64>(),
    ) {
        let mut set: RbSet<i32> = values.iter().copied().collect();
        prop_assert_eq!(set.len(), values.len());

        let mut order: Vec<i32> = values.into_iter().collect();
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        for i in (1..order.len()).rev() {
            order.swap(i, rng.gen_range(0..=i));
        }

        for v in order {
            prop_assert!(set.remove(&v));
            prop_assert!(set.check().is_ok());
        }
        prop_assert_eq!(set.tree().root, None);
        prop_assert_eq!(set.tree().size(set.arena()), 0);
    }
}

#[test]
fn property_seeded_stress_matrix() {
    // Same mix as the demo driver: coin flip between adding a random value
    // and removing one of the values added so far.
    for seed in [0u64, 1, 42, 0xE120_FC15] {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut set = RbSet::new();
        let mut oracle = BTreeSet::new();
        let mut values: Vec<i32> = Vec::new();

        for step in 0..20_000 {
            if rng.gen::<bool>() {
                let v = rng.gen_range(0..100);
                values.push(v);
                set.insert(v);
                oracle.insert(v);
            } else if !set.is_empty() {
                let v = values.remove(rng.gen_range(0..values.len()));
                set.remove(&v);
                oracle.remove(&v);
            }
            if step % 97 == 0 {
                if let Err(err) = set.check() {
                    panic!("seed {seed}, step {step}: {err}");
                }
            }
        }

        set.check().unwrap();
        assert!(set.iter().eq(oracle.iter()), "seed {seed}");
    }
}

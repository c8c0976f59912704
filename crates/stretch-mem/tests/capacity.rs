use proptest::prelude::*;

use stretch_mem::{
    GrowVec, VecError, CountingAlloc,
    HalfOccupancy, Mirror, Doubling, Exact,
};

#[derive(Clone, Debug)]
enum Op {
    Push(u32),
    Pop,
    Truncate(usize),
    Copy,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => any::<u32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        1 => (0usize..64).prop_map(Op::Truncate),
        1 => Just(Op::Copy),
    ]
}

/// Replays `ops` against a `GrowVec` and a `Vec` model, checking contents
/// and the capacity invariant after each step.
fn replay(mut v: GrowVec<u32, &CountingAlloc>, ops: &[Op]) -> Result<(), TestCaseError> {
    let mut model = Vec::new();
    for op in ops {
        match op {
            Op::Push(value) => {
                v.push(*value).map_err(|err| TestCaseError::fail(err.to_string()))?;
                model.push(*value);
            },
            Op::Pop => {
                prop_assert_eq!(v.pop().ok(), model.pop());
            },
            Op::Truncate(len) => {
                let result = v.truncate(*len);
                if *len > model.len() {
                    prop_assert_eq!(
                        result,
                        Err(VecError::InvalidArgument { requested: *len, len: model.len() }),
                    );
                } else {
                    prop_assert!(result.is_ok());
                    model.truncate(*len);
                }
            },
            Op::Copy => {
                let copy = v.copy().map_err(|err| TestCaseError::fail(err.to_string()))?;
                prop_assert_eq!(copy.capacity(), copy.len());
                prop_assert_eq!(copy.as_slice(), model.as_slice());
            },
        }
        prop_assert!(v.capacity() >= v.len());
        prop_assert_eq!(v.as_slice(), model.as_slice());
    }
    Ok(())
}

proptest! {
    #[test]
    fn capacity_covers_len_after_every_push(count in 0usize..500) {
        let mut v = GrowVec::new();
        for i in 0..count {
            v.push(i).unwrap();
            prop_assert!(v.capacity() >= v.len());
        }
    }

    #[test]
    fn default_policy_matches_model(ops in proptest::collection::vec(op(), 0..200)) {
        let counter = CountingAlloc::new();
        replay(GrowVec::new_in(&counter), &ops)?;
        prop_assert_eq!(counter.stats().live_blocks, 0);
    }

    #[test]
    fn half_occupancy_matches_model(
        ops in proptest::collection::vec(op(), 0..200),
        slack in 1.0f64..=1.2,
    ) {
        let counter = CountingAlloc::new();
        let policy = HalfOccupancy::new(slack).unwrap();
        replay(GrowVec::new_in(&counter).with_shrink_policy(policy), &ops)?;
        prop_assert_eq!(counter.stats().live_blocks, 0);
    }

    #[test]
    fn mirror_and_doubling_match_model(ops in proptest::collection::vec(op(), 0..200)) {
        let counter = CountingAlloc::new();
        let v = GrowVec::new_in(&counter)
            .with_growth_policy(Doubling)
            .with_shrink_policy(Mirror);
        replay(v, &ops)?;
        prop_assert_eq!(counter.stats().live_blocks, 0);
    }

    #[test]
    fn copy_never_inherits_excess(len in 0usize..64, extra in 0usize..256) {
        let mut v = GrowVec::new();
        v.reserve_exact(len + extra).unwrap();
        v.try_extend(0..len).unwrap();
        let copy = v.copy().unwrap();
        prop_assert_eq!(copy.capacity(), len);
        prop_assert_eq!(v.capacity(), len + extra);
    }
}

#[test]
fn step_truncation_without_shrink_never_reduces_capacity() {
    let mut v: GrowVec<_> = (0..100).collect();
    let mut last = v.capacity();
    for len in (0..100).rev() {
        v.truncate(len).unwrap();
        assert!(v.capacity() >= last);
        last = v.capacity();
    }
    assert_eq!(last, 108);
}

#[test]
fn step_truncation_with_half_occupancy_shrinks() {
    let mut v: GrowVec<_> = (0..100).collect();
    v.set_shrink_policy(HalfOccupancy::default());
    let mut reductions = vec![];
    for len in (0..100).rev() {
        let before = v.capacity();
        v.truncate(len).unwrap();
        if v.capacity() < before {
            assert!(len * 2 < before);
            assert!(v.capacity() >= len);
            assert!(v.capacity() as f64 <= len as f64 * 1.2);
            reductions.push((len, v.capacity()));
        }
    }
    assert!(!reductions.is_empty());
    assert_eq!(reductions[0], (53, 59));
    assert_eq!(reductions.last(), Some(&(0, 0)));
}

#[test]
fn exact_growth_reallocates_every_push() {
    let mut v = GrowVec::new().with_growth_policy(Exact);
    v.try_extend(0..10).unwrap();
    assert_eq!(v.capacity(), 10);
    assert_eq!(v.realloc_count(), 10);
}

#[test]
fn overallocate_is_amortized() {
    let mut v = GrowVec::new();
    v.try_extend(0..100_000u32).unwrap();
    assert!(v.realloc_count() < 100);
}

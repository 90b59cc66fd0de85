use dyn_arr::DynArr;
use dyn_arr::types::ArrDesc;
use dyn_arr::types::ErrorKind;
use dyn_arr::types::Global;
use dyn_arr::types::IncreaseMode;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Append(u8),
    Prepend(u8),
    InsertAt(u8, usize),
    Increase(usize, bool),
    Remove(usize),
    RemoveDirty(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::Append),
        any::<u8>().prop_map(Op::Prepend),
        (any::<u8>(), 0usize..64).prop_map(|(b, p)| Op::InsertAt(b, p)),
        (0usize..16, any::<bool>()).prop_map(|(n, hard)| Op::Increase(n, hard)),
        (0usize..64).prop_map(Op::Remove),
        (0usize..64).prop_map(Op::RemoveDirty),
    ]
}

fn element(elem: usize, b: u8) -> Vec<u8> {
    return vec![b; elem];
}

/// Applies `op` and returns whether it succeeded.
fn apply(arr: &mut DynArr<Global>, op: &Op) -> bool {
    let elem = arr.element_size();
    match op {
        Op::Append(b) => return arr.append(&element(elem, *b)).is_ok(),
        Op::Prepend(b) => return arr.prepend(&element(elem, *b)).is_ok(),
        Op::InsertAt(b, p) => return arr.insert_at(&element(elem, *b), *p).is_ok(),
        Op::Increase(n, hard) => {
            let mode = if *hard { IncreaseMode::Hard } else { IncreaseMode::Soft };
            return arr.increase(*n, mode).is_ok();
        }
        Op::Remove(p) => return arr.remove(*p).is_ok(),
        Op::RemoveDirty(p) => return arr.remove_dirty(*p).is_ok(),
    }
}

proptest! {
    #[test]
    fn capacity_grows_monotonically_within_limit(
        elem in 1usize..8,
        init in 1usize..4,
        extra in 0usize..64,
        ops in prop::collection::vec(arb_op(), 0..128),
    ) {
        let limit = elem * init + extra;
        let mut arr = DynArr::new(ArrDesc::new(elem, init, limit)).unwrap();
        let mut cap = arr.capacity();

        for op in &ops {
            let before = arr.as_bytes().to_vec();
            let before_cap = arr.capacity();
            let ok = apply(&mut arr, op);

            prop_assert!(arr.capacity() >= cap);
            prop_assert!(arr.capacity() * elem <= limit);
            prop_assert!(arr.len() <= arr.capacity());
            if !ok {
                prop_assert_eq!(arr.as_bytes(), before.as_slice());
                prop_assert_eq!(arr.capacity(), before_cap);
            }
            cap = arr.capacity();
        }
    }

    #[test]
    fn appended_elements_read_back(
        elem in 1usize..16,
        seeds in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let mut arr = DynArr::new(ArrDesc::new(elem, 1, elem * 256)).unwrap();
        for s in &seeds {
            arr.append(&element(elem, *s)).unwrap();
        }
        prop_assert_eq!(arr.len(), seeds.len());
        for (i, s) in seeds.iter().enumerate() {
            let expect = element(elem, *s);
            prop_assert_eq!(arr.get(i).unwrap(), expect.as_slice());
        }
    }

    #[test]
    fn dirty_remove_keeps_multiset(
        seeds in prop::collection::vec(any::<u8>(), 1..64),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut arr = DynArr::new(ArrDesc::new(1, 1, 64)).unwrap();
        for s in &seeds {
            arr.append(&[*s]).unwrap();
        }
        let pos = pick.index(seeds.len());
        arr.remove_dirty(pos).unwrap();

        let mut expect = seeds.clone();
        expect.swap_remove(pos);
        prop_assert_eq!(arr.as_bytes(), expect.as_slice());
    }

    #[test]
    fn oversized_increase_is_rejected(
        elem in 1usize..8,
        init in 1usize..8,
        over in 1usize..32,
    ) {
        let limit = elem * init;
        let mut arr = DynArr::new(ArrDesc::new(elem, init, limit)).unwrap();
        let err = arr.increase(over, IncreaseMode::Hard).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::SizeLimitExceeded);
        prop_assert_eq!(arr.capacity(), init);
    }
}

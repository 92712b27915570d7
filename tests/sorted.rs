use std::panic::{self, AssertUnwindSafe};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use richseq::{compare, quicksort, Seq, Shared, SortedIntSeq, SortedSeq, SortedStrSeq, StrSeqExt};

fn natural(values: Vec<i32>) -> SortedSeq<i32> {
    SortedSeq::from_vec(values, compare::natural())
}

fn assert_sorted(seq: &SortedSeq<i32>) {
    assert!(quicksort::is_sorted_by(&seq.to_vec(), |a, b| a.cmp(b)));
}

#[test]
fn add_keeps_order() {
    let seq = natural(vec![5, 1, 4]);
    assert_eq!(seq.to_vec(), [1, 4, 5]);

    seq.add([3, 0, 9, 4]);
    assert_eq!(seq.to_vec(), [0, 1, 3, 4, 4, 5, 9]);

    seq.append([2]);
    assert_eq!(seq.get(2), Some(2));
}

#[test]
fn custom_comparator() {
    let seq = SortedSeq::<i32>::new(compare::reverse());
    seq.add([3, 9, 1]);
    assert_eq!(seq.to_vec(), [9, 3, 1]);

    seq.set_comparator(compare::natural());
    assert_eq!(seq.to_vec(), [1, 3, 9]);

    let seq = SortedSeq::<i32>::from_vec(vec![10, 9, 100], compare::by_string());
    assert_eq!(seq.to_vec(), [10, 100, 9]);
}

#[test]
fn unique_toggle_affects_future_inserts() {
    let seq = natural(vec![1, 1, 2]);
    seq.set_unique(true);
    assert!(seq.is_unique());

    // Existing duplicates stay until `unique` is called.
    assert_eq!(seq.to_vec(), [1, 1, 2]);

    seq.add([2, 3, 3]);
    assert_eq!(seq.to_vec(), [1, 1, 2, 3]);

    seq.unique();
    assert_eq!(seq.to_vec(), [1, 2, 3]);

    seq.set_unique(false).add([3]);
    assert_eq!(seq.to_vec(), [1, 2, 3, 3]);
}

#[test]
fn search_uses_comparator() {
    let seq = natural(vec![4, 2, 2, 8]);
    assert_eq!(seq.search(&2), Some(0));
    assert_eq!(seq.search(&8), Some(3));
    assert_eq!(seq.search(&5), None);
    assert!(seq.contains(&4));
    assert!(!seq.contains(&0));

    // Case-insensitive comparator, equal under it means found.
    let seq = SortedSeq::<String>::from_vec(
        vec!["b".into(), "A".into()],
        compare::comparator(|a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase())),
    );
    assert_eq!(seq.search(&"a".to_string()), Some(0));
    assert!(seq.remove_value(&"B".to_string()));
    assert_eq!(seq.to_vec(), ["A"]);
}

#[test]
fn removal() {
    let seq = natural(vec![5, 3, 1, 4, 2]);
    assert_eq!(seq.remove(0), Some(1));
    assert_eq!(seq.remove(9), None);
    assert!(seq.remove_value(&4));
    assert!(!seq.remove_value(&4));
    seq.remove_values(&[2, 7]);
    assert_eq!(seq.to_vec(), [3, 5]);

    assert_eq!(seq.pop_left(), Some(3));
    assert_eq!(seq.pop_right(), Some(5));
    assert_eq!(seq.pop_left(), None);
}

#[test]
fn pop_family() {
    let seq = natural((0..10).collect());
    assert_eq!(seq.pop_lefts(2), [0, 1]);
    assert_eq!(seq.pop_rights(2), [8, 9]);

    let mut rng = StdRng::seed_from_u64(5);
    let popped = seq.pop_rands_with(3, &mut rng);
    assert_eq!(popped.len(), 3);
    assert_eq!(seq.len(), 3);
    assert_sorted(&seq);

    let rest = seq.pop_rands_with(10, &mut rng);
    assert_eq!(rest.len(), 3);
    assert!(seq.is_empty());
}

#[test]
fn merge_and_set_vec() {
    let seq = natural(vec![5]);
    seq.merge(&[3, 7]);
    seq.merge(&Seq::<i32>::from_vec(vec![6, 1]));
    seq.merge(&natural(vec![4]));
    seq.merge_slice(&[2]);
    assert_eq!(seq.to_vec(), [1, 2, 3, 4, 5, 6, 7]);

    seq.merge(&seq);
    assert_eq!(seq.len(), 14);
    assert_sorted(&seq);

    seq.set_unique(true);
    seq.merge(&[1, 8]);
    assert_eq!(seq.len(), 15);

    seq.set_vec(vec![3, 1, 2]);
    assert_eq!(seq.to_vec(), [1, 2, 3]);

    seq.clear();
    assert!(seq.is_empty());
}

#[test]
fn walk_resorts() {
    let seq = natural(vec![1, 2, 3]);
    seq.walk(|x| -x);
    assert_eq!(seq.to_vec(), [-3, -2, -1]);
}

#[test]
fn lock_func_resorts_even_on_panic() {
    let seq = natural(vec![1, 2, 3]);
    let len = seq.lock_func(|v| {
        v.push(0);
        v.len()
    });
    assert_eq!(len, 4);
    assert_eq!(seq.to_vec(), [0, 1, 2, 3]);

    let res = panic::catch_unwind(AssertUnwindSafe(|| {
        seq.lock_func(|v| {
            v.reverse();
            v.push(-1);
            panic!("inside critical section");
        });
    }));

    assert!(res.is_err());
    assert_eq!(seq.to_vec(), [-1, 0, 1, 2, 3]);
}

#[test]
fn filter_keeps_order() {
    let seq = natural((0..10).collect());
    seq.filter(|_, x| x % 3 == 0);
    assert_eq!(seq.to_vec(), [1, 2, 4, 5, 7, 8]);

    let strs = SortedSeq::<String>::from_vec(
        vec!["b".into(), "".into(), "a".into()],
        compare::natural(),
    );
    strs.filter_empty();
    assert_eq!(strs.to_vec(), ["a", "b"]);
    assert!(strs.contains_i("B"));
}

#[test]
fn read_only_operations() {
    let seq = natural(vec![6, 5, 4, 3, 2, 1, 0]);
    assert_eq!(seq.range(1, Some(3)), [1, 2]);
    assert_eq!(seq.sub_slice(-2, Some(2)), [5, 6]);
    assert_eq!(seq.chunk(4), [vec![0, 1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(seq.join(","), "0,1,2,3,4,5,6");
    assert_eq!(seq.sum(), 21);
    assert_eq!(seq.count_values().get(&3), Some(&1));
    assert_eq!(seq.to_string(), "[0,1,2,3,4,5,6]");
    assert_eq!(seq.at(99), 0);
    assert!(seq.rand().is_some());
    assert_eq!(seq.rands(5).len(), 5);

    let mut seen = Vec::new();
    seq.iterator_desc(|_, x| {
        seen.push(*x);
        seen.len() < 2
    });
    assert_eq!(seen, [6, 5]);

    let first = seq.r_lock_func(|v| v[0]);
    assert_eq!(first, 0);
}

#[test]
fn sortedness_under_random_operations() {
    let mut rng = StdRng::seed_from_u64(99);
    let seq = SortedSeq::<i32, Shared>::new(compare::natural());

    for _ in 0..500 {
        match rng.gen_range(0..4) {
            0 => {
                seq.add([rng.gen_range(-50..50)]);
            }
            1 => {
                seq.remove_value(&rng.gen_range(-50..50));
            }
            2 => {
                seq.merge(&[rng.gen_range(-50..50), rng.gen_range(-50..50)]);
            }
            _ => {
                seq.remove(rng.gen_range(0..10));
            }
        }

        assert!(quicksort::is_sorted_by(&seq.to_vec(), |a, b| a.cmp(b)));
    }
}

#[test]
fn ranges_and_aliases() {
    let seq = SortedSeq::<i64>::from_range(10, 0, -5).unwrap();
    assert_eq!(seq.to_vec(), [0, 5, 10]);

    let ints: SortedIntSeq = [3, 1, 2].into_iter().collect();
    assert_eq!(ints.to_vec(), [1, 2, 3]);

    let strs: SortedStrSeq<Shared> = vec!["b".to_string(), "a".to_string()].into();
    assert_eq!(strs.to_vec(), ["a", "b"]);
    assert!(strs.is_shared());

    let mut ints = ints;
    ints.extend([0, 4]);
    assert_eq!(ints.clone().into_vec(), [0, 1, 2, 3, 4]);
    assert_eq!(ints, [4, 3, 2, 1, 0].into_iter().collect::<SortedIntSeq>());
}

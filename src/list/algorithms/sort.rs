//! Merge sorts over the ghost-terminated chain view of the ring.
//!
//! Both sorts ignore `prev` while working: following `next` from the
//! front node already reads as a singly-linked chain that ends at the
//! ghost node, so the ghost plays the role of the nil terminator and no
//! unlinking pass is needed up front. Only the final merge rebuilds the
//! `prev` links and recloses the ring.

use crate::list::{List, Node};
use std::cmp::Ordering;
use std::ptr::NonNull;

/// Bottom-up merge sort driven by a binary counter.
///
/// Every element enters the pending stack as a run of one node; the
/// carries of `count` decide when two runs of equal size merge, which
/// keeps at most two runs per power-of-two size on the stack and bounds
/// the stack depth by 2·log₂(n). Worst case is 2·n·log₂(n) comparisons;
/// presorted input degenerates every merge to the one-sided case and
/// costs about a quarter of that.
pub(crate) fn merge_sort<T, F>(list: &mut List<T>, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if list.front_node() == list.back_node() {
        return;
    }
    let ghost = list.ghost_node();
    // Run heads, newest on top. Sizes are powers of two and never
    // decrease toward the bottom.
    let mut pending: Vec<NonNull<Node<T>>> = Vec::new();
    let mut count: usize = 0;
    let mut head = list.front_node();
    unsafe {
        while head != ghost {
            // A carry at bit `k` of `count` merges the runs `k` and
            // `k + 1` levels below the top of the stack, the older run
            // going first to keep the merge stable.
            let k = count.trailing_ones() as usize;
            if count >> k != 0 {
                let i = pending.len() - 1 - k;
                let newer = pending.remove(i);
                pending[i - 1] = merge(ghost, pending[i - 1], newer, &mut cmp);
            }
            let next = head.as_ref().next;
            head.as_mut().next = ghost;
            pending.push(head);
            head = next;
            count += 1;
        }

        // No more input; collapse the stack newest-to-oldest. The merge
        // with the oldest run also restores `prev` and recloses the ring.
        let mut run = match pending.pop() {
            Some(run) => run,
            None => return,
        };
        while let Some(older) = pending.pop() {
            if pending.is_empty() {
                merge_final(ghost, older, run, &mut cmp);
                return;
            }
            run = merge(ghost, older, run, &mut cmp);
        }
    }
}

/// Top-down structural merge sort over the chain view.
///
/// O(log n) recursion depth, O(1) extra node storage; one linear pass at
/// the end rebuilds the back links.
pub(crate) fn merge_sort_recursive<T, F>(list: &mut List<T>, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if list.front_node() == list.back_node() {
        return;
    }
    let mut ghost = list.ghost_node();
    unsafe {
        let head = sort_chain(ghost, list.front_node(), &mut cmp);
        ghost.as_mut().next = head;
        let mut prev = ghost;
        let mut node = head;
        while node != ghost {
            node.as_mut().prev = prev;
            prev = node;
            node = node.as_ref().next;
        }
        ghost.as_mut().prev = prev;
    }
}

/// Merge a sorted `other` into the sorted `list`, reusing its nodes.
///
/// The elements of `list` win ties, so merging is stable in the
/// "own elements first" sense.
pub(crate) fn merge_lists<T, F>(list: &mut List<T>, mut other: List<T>, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if list.is_empty() {
        list.append(&mut other);
        return;
    }
    let detached = match other.detach_all_nodes() {
        Some(detached) => detached,
        None => return,
    };
    let ghost = list.ghost_node();
    let a = list.front_node();
    unsafe {
        // Terminate the foreign chain at our ghost so both chains share
        // one nil.
        let mut back = detached.back;
        back.as_mut().next = ghost;
        merge_final(ghost, a, detached.front, &mut cmp);
    }
}

/// Split `head..ghost` at its structural midpoint (slow/fast walk),
/// sort both halves, and merge them.
unsafe fn sort_chain<T, F>(
    ghost: NonNull<Node<T>>,
    head: NonNull<Node<T>>,
    cmp: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if head == ghost || head.as_ref().next == ghost {
        return head;
    }
    let mut slow = head;
    let mut fast = head;
    loop {
        fast = fast.as_ref().next;
        if fast == ghost {
            break;
        }
        fast = fast.as_ref().next;
        if fast == ghost {
            break;
        }
        slow = slow.as_ref().next;
    }
    let mid = slow.as_ref().next;
    slow.as_mut().next = ghost;
    let a = sort_chain(ghost, head, cmp);
    let b = sort_chain(ghost, mid, cmp);
    merge(ghost, a, b, cmp)
}

/// Merge two non-empty ghost-terminated chains, relinking `next` only.
///
/// `a` is taken while it does not compare `Greater`, which makes the
/// merge stable when `a` is the older run.
unsafe fn merge<T, F>(
    ghost: NonNull<Node<T>>,
    mut a: NonNull<Node<T>>,
    mut b: NonNull<Node<T>>,
    cmp: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let head;
    if cmp(&a.as_ref().element, &b.as_ref().element) != Ordering::Greater {
        head = a;
        a = a.as_ref().next;
    } else {
        head = b;
        b = b.as_ref().next;
    }
    let mut tail = head;
    loop {
        if a == ghost {
            tail.as_mut().next = b;
            break;
        }
        if b == ghost {
            tail.as_mut().next = a;
            break;
        }
        if cmp(&a.as_ref().element, &b.as_ref().element) != Ordering::Greater {
            tail.as_mut().next = a;
            tail = a;
            a = a.as_ref().next;
        } else {
            tail.as_mut().next = b;
            tail = b;
            b = b.as_ref().next;
        }
    }
    head
}

/// Merge two non-empty ghost-terminated chains and rebuild the ring:
/// `prev` links are restored on the way and the result is anchored at
/// the ghost node.
unsafe fn merge_final<T, F>(
    mut ghost: NonNull<Node<T>>,
    mut a: NonNull<Node<T>>,
    mut b: NonNull<Node<T>>,
    cmp: &mut F,
) where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut tail = ghost;
    let mut count: u8 = 0;
    loop {
        if cmp(&a.as_ref().element, &b.as_ref().element) != Ordering::Greater {
            tail.as_mut().next = a;
            a.as_mut().prev = tail;
            tail = a;
            a = a.as_ref().next;
            if a == ghost {
                break;
            }
        } else {
            tail.as_mut().next = b;
            b.as_mut().prev = tail;
            tail = b;
            b = b.as_ref().next;
            if b == ghost {
                b = a;
                break;
            }
        }
    }
    // Finish linking the remainder of chain `b` on to the tail. No more
    // comparisons are needed, but ping the comparator once every 256
    // nodes so a cooperative caller can still yield during the
    // degenerate all-tail case. The self-comparison has no ordering
    // effect.
    tail.as_mut().next = b;
    loop {
        count = count.wrapping_add(1);
        if count == 0 {
            cmp(&b.as_ref().element, &b.as_ref().element);
        }
        b.as_mut().prev = tail;
        tail = b;
        b = b.as_ref().next;
        if b == ghost {
            break;
        }
    }
    tail.as_mut().next = ghost;
    ghost.as_mut().prev = tail;
}

#[cfg(test)]
mod tests {
    use crate::List;
    use itertools::Itertools;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::cell::Cell;
    use std::iter::FromIterator;

    fn check_sorted_against_vec(input: Vec<i32>) {
        let mut expected = input.clone();
        expected.sort();

        let mut list = List::from_iter(input.iter().copied());
        list.sort();
        list.check_ring();
        assert_eq!(Vec::from_iter(&list), Vec::from_iter(&expected));

        let mut list = List::from_iter(input.iter().copied());
        list.sort_recursive(false);
        list.check_ring();
        assert_eq!(Vec::from_iter(&list), Vec::from_iter(&expected));

        expected.reverse();
        let mut list = List::from_iter(input.iter().copied());
        list.sort_by(|a, b| b.cmp(a));
        list.check_ring();
        assert_eq!(Vec::from_iter(&list), Vec::from_iter(&expected));

        let mut list = List::from_iter(input);
        list.sort_recursive(true);
        list.check_ring();
        assert_eq!(Vec::from_iter(&list), Vec::from_iter(&expected));
    }

    #[test]
    fn sort_small_lists() {
        check_sorted_against_vec(vec![]);
        check_sorted_against_vec(vec![1]);
        check_sorted_against_vec(vec![2, 1]);
        check_sorted_against_vec(vec![1, 2]);
        check_sorted_against_vec(vec![2, 2]);
        check_sorted_against_vec(vec![3, 1, 2]);
        check_sorted_against_vec(vec![5, 2, 4, 3, 1]);
        check_sorted_against_vec(vec![1, 1, 1, 1]);
    }

    #[test]
    fn sort_random_lists() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for len in [10usize, 100, 1000] {
            for _ in 0..10 {
                let input: Vec<i32> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
                check_sorted_against_vec(input);
            }
        }
    }

    #[test]
    fn sort_is_stable() {
        // Duplicate keys carry a tag recording their input order.
        let mut rng = SmallRng::seed_from_u64(42);
        let input: Vec<(i32, usize)> = (0..500)
            .map(|tag| (rng.gen_range(0..10), tag))
            .collect();
        let expected = input
            .iter()
            .copied()
            .sorted_by_key(|&(key, _)| key)
            .collect::<Vec<_>>();

        let mut list = List::from_iter(input.iter().copied());
        list.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(Vec::from_iter(list), expected);

        let mut list = List::from_iter(input.iter().copied());
        list.sort_recursive_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(Vec::from_iter(list), expected);

        let mut list = List::from_iter(input);
        list.sort_by_key(|&(key, _)| key);
        assert_eq!(Vec::from_iter(list), expected);
    }

    #[test]
    fn sort_comparison_worst_case_bound() {
        let n = 1024usize;
        let mut rng = SmallRng::seed_from_u64(7);
        let input: Vec<u32> = (0..n).map(|_| rng.gen()).collect();

        let comparisons = Cell::new(0usize);
        let mut list = List::from_iter(input);
        list.sort_by(|a, b| {
            comparisons.set(comparisons.get() + 1);
            a.cmp(b)
        });
        list.check_ring();
        // log2(1024) = 10; never more than 2 n log2 n comparisons.
        assert!(comparisons.get() <= 2 * n * 10);
    }

    #[test]
    fn sort_presorted_is_cheap() {
        let n = 1024usize;
        let comparisons = Cell::new(0usize);
        let mut list = List::from_iter(0..n);
        list.sort_by(|a, b| {
            comparisons.set(comparisons.get() + 1);
            a.cmp(b)
        });
        assert!(list.iter().copied().eq(0..n));
        // Every merge is one-sided on presorted input: about a quarter
        // of the worst-case comparisons, n log2(n) / 2 plus slack for
        // the tail-copy checkpoints.
        assert!(comparisons.get() <= n * 10 / 2 + n);
    }

    #[test]
    fn sort_by_key_example() {
        let mut list = List::from_iter([-5i32, 4, 1, -3, 2]);
        list.sort_by_key(|k| k.abs());
        assert_eq!(Vec::from_iter(list), vec![1, 2, -3, 4, -5]);
    }

    #[test]
    fn merge_sorted_lists() {
        let mut list = List::from_iter([1, 3, 5, 7]);
        list.merge_sorted(List::from_iter([2, 3, 6]));
        list.check_ring();
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3, &3, &5, &6, &7]);

        // Either side empty.
        let mut list = List::<i32>::new();
        list.merge_sorted(List::from_iter([1, 2]));
        assert_eq!(Vec::from_iter(&list), vec![&1, &2]);
        list.merge_sorted(List::new());
        list.check_ring();
        assert_eq!(Vec::from_iter(&list), vec![&1, &2]);
    }

    #[test]
    fn merge_sorted_is_left_biased() {
        // Ties keep the receiver's elements first.
        let mut list = List::from_iter([(1, "left"), (2, "left")]);
        list.merge_sorted_by(List::from_iter([(1, "right"), (3, "right")]), |a, b| {
            a.0.cmp(&b.0)
        });
        assert_eq!(
            Vec::from_iter(list),
            vec![(1, "left"), (1, "right"), (2, "left"), (3, "right")]
        );
    }

    #[test]
    fn merge_sorted_random() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..20 {
            let mut left: Vec<i32> = (0..rng.gen_range(0..100))
                .map(|_| rng.gen_range(-50..50))
                .collect();
            let mut right: Vec<i32> = (0..rng.gen_range(0..100))
                .map(|_| rng.gen_range(-50..50))
                .collect();
            left.sort();
            right.sort();

            let mut expected = left.clone();
            expected.extend(&right);
            expected.sort();

            let mut list = List::from_iter(left);
            list.merge_sorted(List::from_iter(right));
            list.check_ring();
            assert_eq!(Vec::from_iter(&list), Vec::from_iter(&expected));
        }
    }

    #[test]
    fn sort_keeps_multiset() {
        let mut rng = SmallRng::seed_from_u64(3);
        let input: Vec<i32> = (0..200).map(|_| rng.gen_range(0..20)).collect();
        let mut list = List::from_iter(input.iter().copied());
        list.sort();
        let sorted = Vec::from_iter(list);
        assert_eq!(sorted.len(), input.len());
        assert_eq!(
            sorted,
            input.iter().copied().sorted().collect::<Vec<_>>()
        );
    }
}

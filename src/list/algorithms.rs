use crate::list::{connect, List, Node};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ptr::NonNull;

mod sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Sort the list in ascending order.
    ///
    /// This sort is stable (i.e., does not reorder equal elements) and
    /// in-place: nodes are relinked, elements are never moved or cloned.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time (never
    /// more than 2*n*·log₂(*n*) comparisons) and *O*(log(*n*)) memory.
    ///
    /// # Current Implementation
    ///
    /// A bottom-up natural merge sort driven by a binary counter: elements
    /// are collected into power-of-two runs on a pending stack, with at
    /// most two runs per size, and the counter's carries decide when two
    /// runs merge. Nearly-sorted input merges one-sidedly and costs about
    /// a quarter of the worst-case comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    /// use std::iter::FromIterator;
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        sort::merge_sort(self, |a, b| a.cmp(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator returns [`Ordering::Greater`] when its first argument
    /// sorts strictly after the second; on `Less` or `Equal` the first
    /// argument is taken first, which is what keeps equal elements in
    /// their input order.
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// For example, while [`f64`] doesn't implement [`Ord`] because
    /// `NaN != NaN`, we can use `partial_cmp` as our sort function
    /// when we know the list doesn't contain a `NaN`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(log(*n*)) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    /// use std::iter::FromIterator;
    /// let mut v = List::from_iter([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(Vec::from_iter(v.iter().copied()), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(Vec::from_iter(v), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::merge_sort(self, compare)
    }

    /// Sorts the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements)
    /// and *O*(*m* \* *n* \* log(*n*)) worst-case, where the
    /// key function is *O*(*m*).
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    /// use std::iter::FromIterator;
    /// let mut v = List::from_iter([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(Vec::from_iter(v), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        sort::merge_sort(self, |a, b| f(a).cmp(&f(b)));
    }

    /// Sort the list by a top-down structural merge sort.
    ///
    /// The list is treated as a ghost-terminated chain, split at its
    /// structural midpoint by a slow/fast pointer walk, sorted
    /// recursively, and reclosed into a ring by one linear back-link
    /// pass. Stable; `descending` inverts the comparison, not the
    /// algorithm.
    ///
    /// [`List::sort`] is usually the better default; this variant keeps
    /// the recursive splitting strategy available, at *O*(log(*n*))
    /// stack depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([3, 1, 2]);
    /// list.sort_recursive(false);
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);
    ///
    /// list.sort_recursive(true);
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn sort_recursive(&mut self, descending: bool)
    where
        T: Ord,
    {
        if descending {
            sort::merge_sort_recursive(self, |a, b| b.cmp(a));
        } else {
            sort::merge_sort_recursive(self, |a, b| a.cmp(b));
        }
    }

    /// Like [`List::sort_recursive`], but with a comparator function.
    pub fn sort_recursive_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::merge_sort_recursive(self, compare)
    }

    /// Consume another sorted list and merge it into this sorted list.
    ///
    /// Both lists must already be sorted in ascending order. The merge is
    /// stable and left-biased: on ties, elements of `self` come first.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time and *O*(1)
    /// memory; nodes are relinked, never reallocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3, 5]);
    /// list.merge_sorted(List::from_iter([2, 3, 6]));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 3, 5, 6]);
    /// ```
    pub fn merge_sorted(&mut self, other: Self)
    where
        T: Ord,
    {
        sort::merge_lists(self, other, |a, b| a.cmp(b));
    }

    /// Like [`List::merge_sorted`], but with a comparator function.
    ///
    /// Both lists must be sorted with respect to the same comparator.
    pub fn merge_sorted_by<F>(&mut self, other: Self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::merge_lists(self, other, compare)
    }

    /// Remove every element that has a strictly smaller element anywhere
    /// to its right, and return the number of surviving elements.
    ///
    /// The survivors read in ascending order from front to back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time: one backward pass
    /// comparing each element against the minimum of everything kept so
    /// far behind it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 3, 4, 2]);
    /// assert_eq!(list.retain_ascending(), 1);
    /// assert_eq!(Vec::from_iter(list), vec![2]);
    /// ```
    pub fn retain_ascending(&mut self) -> usize
    where
        T: Ord,
    {
        self.retain_toward_back(|prev, kept| prev > kept)
    }

    /// Remove every element that has a strictly greater element anywhere
    /// to its right, and return the number of surviving elements.
    ///
    /// The survivors read in descending order from front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 4, 2, 3]);
    /// assert_eq!(list.retain_descending(), 2);
    /// assert_eq!(Vec::from_iter(list), vec![4, 3]);
    /// ```
    pub fn retain_descending(&mut self) -> usize
    where
        T: Ord,
    {
        self.retain_toward_back(|prev, kept| prev < kept)
    }

    /// Backward kept-frontier walk shared by the monotonic retains.
    ///
    /// The back node is always kept. Walking toward the front, a node is
    /// dropped when `beaten(node, frontier)` holds against the newest
    /// kept node; otherwise it becomes the frontier itself. Because the
    /// kept nodes are monotone toward the back, the frontier carries the
    /// extremum of the whole right-hand side.
    fn retain_toward_back<F>(&mut self, mut beaten: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.is_empty() {
            return 0;
        }
        let ghost = self.ghost_node();
        let mut kept = self.back_node();
        let mut survivors = 1;
        unsafe {
            loop {
                let prev = kept.as_ref().prev;
                if prev == ghost {
                    break;
                }
                if beaten(&prev.as_ref().element, &kept.as_ref().element) {
                    drop(self.detach_node(prev));
                } else {
                    kept = prev;
                    survivors += 1;
                }
            }
        }
        survivors
    }

    /// Remove the middle element (index ⌊len / 2⌋, zero-based) and return
    /// it, or return `None` if the list is empty.
    ///
    /// The midpoint is found structurally by a slow/fast pointer walk; the
    /// length is never counted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4, 5]);
    /// assert_eq!(list.remove_middle(), Some(3));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 5]);
    /// ```
    pub fn remove_middle(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let ghost = self.ghost_node();
        unsafe {
            let mut slow = self.front_node();
            let mut fast = self.front_node();
            while fast != ghost && fast.as_ref().next != ghost {
                fast = fast.as_ref().next.as_ref().next;
                slow = slow.as_ref().next;
            }
            Some(Node::into_element(self.detach_node(slow)))
        }
    }

    /// On a sorted list, remove **all** members of every run of equal
    /// adjacent elements, leaving no survivor of a duplicated value.
    /// Returns whether anything was removed.
    ///
    /// Idempotent: a second call is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(["a", "a", "b", "b", "c"]);
    /// assert!(list.purge_duplicates());
    /// assert_eq!(Vec::from_iter(list), vec!["c"]);
    /// ```
    pub fn purge_duplicates(&mut self) -> bool
    where
        T: PartialEq,
    {
        self.purge_duplicates_by(|a, b| a == b)
    }

    /// Like [`List::purge_duplicates`], but with an equality predicate.
    pub fn purge_duplicates_by<F>(&mut self, mut eq: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        let ghost = self.ghost_node();
        let mut removed = false;
        // Whether the current node closes a run whose earlier members
        // are already gone.
        let mut in_run = false;
        let mut node = self.front_node();
        unsafe {
            while node != ghost {
                let next = node.as_ref().next;
                if next != ghost && eq(&node.as_ref().element, &next.as_ref().element) {
                    drop(self.detach_node(node));
                    removed = true;
                    in_run = true;
                } else if in_run {
                    drop(self.detach_node(node));
                    in_run = false;
                }
                node = next;
            }
        }
        removed
    }

    /// Exchange the elements pairwise: the first two swap places, then the
    /// next two, and so on. With an odd length, the last element stays put.
    ///
    /// Nodes are relinked, elements are not moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4, 5]);
    /// list.swap_pairs();
    /// assert_eq!(Vec::from_iter(list), vec![2, 1, 4, 3, 5]);
    /// ```
    pub fn swap_pairs(&mut self) {
        let ghost = self.ghost_node();
        let mut first = self.front_node();
        unsafe {
            while first != ghost && first.as_ref().next != ghost {
                let second = first.as_ref().next;
                // Moving `first` behind `second` swaps the pair and leaves
                // `first` pointing at the next pair's head afterwards.
                move_node(first, second.as_ref().next);
                first = first.as_ref().next;
            }
        }
    }

    /// Reverse the order of the elements, in place.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory:
    /// every node, the ghost included, swaps its two links.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        let ghost = self.ghost_node();
        let mut node = ghost;
        loop {
            // SAFETY: every node of the ring, the ghost included, has
            // valid `next` and `prev` links.
            unsafe {
                let next = node.as_ref().next;
                let raw = node.as_ptr();
                std::mem::swap(&mut (*raw).next, &mut (*raw).prev);
                node = next;
            }
            if node == ghost {
                break;
            }
        }
    }

    /// Reverse each consecutive group of exactly `k` elements. A trailing
    /// group shorter than `k` is left untouched, and `k < 2` is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4, 5, 6, 7, 8]);
    /// list.reverse_chunks(3);
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1, 6, 5, 4, 7, 8]);
    /// ```
    pub fn reverse_chunks(&mut self, k: usize) {
        if k < 2 {
            return;
        }
        let ghost = self.ghost_node();
        // `anchor` is the node just before the chunk being reversed.
        let mut anchor = ghost;
        unsafe {
            loop {
                // Probe whether a full chunk of `k` nodes follows.
                let mut probe = anchor.as_ref().next;
                let mut found = 0;
                while found < k && probe != ghost {
                    probe = probe.as_ref().next;
                    found += 1;
                }
                if found < k {
                    break;
                }
                // Head insertion: the chunk's first node ends up as its
                // tail, every following node moves to the chunk front.
                let tail = anchor.as_ref().next;
                for _ in 1..k {
                    let node = tail.as_ref().next;
                    move_node(node, anchor.as_ref().next);
                }
                anchor = tail;
            }
        }
    }
}

/// Move the node `from` right before the node `to`.
unsafe fn move_node<T>(from: NonNull<Node<T>>, to: NonNull<Node<T>>) {
    connect(from.as_ref().prev, from.as_ref().next);
    connect(to.as_ref().prev, from);
    connect(from, to);
}

#[cfg(test)]
mod tests {
    use crate::List;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[test]
    fn retain_ascending_keeps_right_minima() {
        let mut list = List::from_iter(["5", "3", "4", "2"]);
        assert_eq!(list.retain_ascending(), 1);
        list.check_ring();
        assert_eq!(Vec::from_iter(list), vec!["2"]);

        let mut list = List::from_iter([1, 2, 3]);
        assert_eq!(list.retain_ascending(), 3);
        assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);

        let mut list = List::<i32>::new();
        assert_eq!(list.retain_ascending(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn retain_descending_keeps_right_maxima() {
        let mut list = List::from_iter([1, 4, 2, 3]);
        assert_eq!(list.retain_descending(), 2);
        list.check_ring();
        assert_eq!(Vec::from_iter(list), vec![4, 3]);

        let mut list = List::from_iter([3, 2, 1]);
        assert_eq!(list.retain_descending(), 3);
        assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    }

    // The kept-frontier walk must agree with the literal definition:
    // drop an element iff something strictly more extreme sits anywhere
    // to its right.
    #[test]
    fn retain_matches_brute_force() {
        fn brute_force_ascend(input: &[i32]) -> Vec<i32> {
            input
                .iter()
                .enumerate()
                .filter(|&(i, &x)| input[i + 1..].iter().all(|&y| y >= x))
                .map(|(_, &x)| x)
                .collect()
        }
        fn brute_force_descend(input: &[i32]) -> Vec<i32> {
            input
                .iter()
                .enumerate()
                .filter(|&(i, &x)| input[i + 1..].iter().all(|&y| y <= x))
                .map(|(_, &x)| x)
                .collect()
        }

        let mut rng = SmallRng::seed_from_u64(0xf11);
        for _ in 0..50 {
            let input: Vec<i32> = (0..rng.gen_range(0..40))
                .map(|_| rng.gen_range(0..10))
                .collect();

            let expected = brute_force_ascend(&input);
            let mut list = List::from_iter(input.iter().copied());
            assert_eq!(list.retain_ascending(), expected.len());
            list.check_ring();
            assert_eq!(Vec::from_iter(&list), Vec::from_iter(&expected));

            let expected = brute_force_descend(&input);
            let mut list = List::from_iter(input.iter().copied());
            assert_eq!(list.retain_descending(), expected.len());
            assert_eq!(Vec::from_iter(&list), Vec::from_iter(&expected));
        }
    }

    #[test]
    fn remove_middle_takes_floor_half() {
        let mut list = List::from_iter([1, 2, 3, 4, 5]);
        assert_eq!(list.remove_middle(), Some(3));
        list.check_ring();
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &4, &5]);

        // Even length: index len / 2.
        let mut list = List::from_iter([1, 2, 3, 4]);
        assert_eq!(list.remove_middle(), Some(3));
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &4]);

        let mut list = List::from_iter([7]);
        assert_eq!(list.remove_middle(), Some(7));
        assert!(list.is_empty());
        assert_eq!(list.remove_middle(), None);
    }

    #[test]
    fn remove_middle_until_empty() {
        let mut list = List::from_iter(0..9);
        let mut taken = Vec::new();
        while let Some(x) = list.remove_middle() {
            taken.push(x);
            list.check_ring();
        }
        assert_eq!(taken.len(), 9);
        taken.sort();
        assert!(taken.into_iter().eq(0..9));
    }

    #[test]
    fn purge_duplicates_removes_whole_runs() {
        let mut list = List::from_iter(["a", "a", "b", "b", "c"]);
        assert!(list.purge_duplicates());
        list.check_ring();
        assert_eq!(Vec::from_iter(&list), vec![&"c"]);

        // Idempotent.
        assert!(!list.purge_duplicates());
        assert_eq!(Vec::from_iter(&list), vec![&"c"]);

        let mut list = List::from_iter([1, 1, 1, 1]);
        assert!(list.purge_duplicates());
        assert!(list.is_empty());

        let mut list = List::from_iter([1, 2, 3]);
        assert!(!list.purge_duplicates());
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3]);

        let mut list = List::<i32>::new();
        assert!(!list.purge_duplicates());
    }

    #[test]
    fn purge_duplicates_by_predicate() {
        let mut list = List::from_iter(["ab", "ax", "by", "cd"]);
        // Group by first letter.
        assert!(list.purge_duplicates_by(|a, b| a.as_bytes()[0] == b.as_bytes()[0]));
        assert_eq!(Vec::from_iter(list), vec!["by", "cd"]);
    }

    #[test]
    fn swap_pairs_even_and_odd() {
        let mut list = List::from_iter([1, 2, 3, 4]);
        list.swap_pairs();
        list.check_ring();
        assert_eq!(Vec::from_iter(&list), vec![&2, &1, &4, &3]);

        let mut list = List::from_iter([1, 2, 3, 4, 5]);
        list.swap_pairs();
        assert_eq!(Vec::from_iter(&list), vec![&2, &1, &4, &3, &5]);

        let mut list = List::from_iter([1]);
        list.swap_pairs();
        assert_eq!(Vec::from_iter(&list), vec![&1]);

        let mut list = List::<i32>::new();
        list.swap_pairs();
        assert!(list.is_empty());
    }

    #[test]
    fn reverse_is_an_involution() {
        let mut list = List::from_iter(0..7);
        list.reverse();
        list.check_ring();
        assert!(list.iter().copied().eq((0..7).rev()));
        list.reverse();
        assert!(list.iter().copied().eq(0..7));

        let mut list = List::<i32>::new();
        list.reverse();
        list.check_ring();
        assert!(list.is_empty());

        let mut list = List::from_iter([1]);
        list.reverse();
        assert_eq!(Vec::from_iter(list), vec![1]);
    }

    #[test]
    fn reverse_chunks_leaves_short_tail() {
        let mut list = List::from_iter([1, 2, 3, 4, 5, 6, 7, 8]);
        list.reverse_chunks(3);
        list.check_ring();
        assert_eq!(Vec::from_iter(&list), vec![&3, &2, &1, &6, &5, &4, &7, &8]);

        let mut list = List::from_iter(0..6);
        list.reverse_chunks(2);
        assert_eq!(Vec::from_iter(&list), vec![&1, &0, &3, &2, &5, &4]);

        // Chunk larger than the list: nothing moves.
        let mut list = List::from_iter([1, 2, 3]);
        list.reverse_chunks(4);
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3]);

        // k < 2 is a no-op.
        let mut list = List::from_iter([1, 2, 3]);
        list.reverse_chunks(1);
        list.reverse_chunks(0);
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3]);

        // Chunk of the whole list is a plain reverse.
        let mut list = List::from_iter(0..5);
        list.reverse_chunks(5);
        assert!(list.iter().copied().eq((0..5).rev()));
    }

    #[test]
    fn filters_drop_removed_elements_once() {
        struct Tracked<'a> {
            value: i32,
            dropped: &'a RefCell<Vec<i32>>,
        }
        impl PartialEq for Tracked<'_> {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }
        impl Eq for Tracked<'_> {}
        impl PartialOrd for Tracked<'_> {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tracked<'_> {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.value.cmp(&other.value)
            }
        }
        impl Drop for Tracked<'_> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        fn sorted_log(dropped: &RefCell<Vec<i32>>) -> Vec<i32> {
            let mut log = dropped.borrow().clone();
            log.sort();
            log
        }

        let dropped = RefCell::new(Vec::new());
        {
            let mut list = List::from_iter([5, 3, 4, 2].iter().map(|&value| Tracked {
                value,
                dropped: &dropped,
            }));
            assert_eq!(list.retain_ascending(), 1);
            assert_eq!(sorted_log(&dropped), vec![3, 4, 5]);
        }
        // The survivor goes once the list does.
        assert_eq!(sorted_log(&dropped), vec![2, 3, 4, 5]);

        dropped.borrow_mut().clear();
        {
            let mut list = List::from_iter([1, 1, 2, 2, 3].iter().map(|&value| Tracked {
                value,
                dropped: &dropped,
            }));
            assert!(list.purge_duplicates());
            assert_eq!(sorted_log(&dropped), vec![1, 1, 2, 2]);
        }
        assert_eq!(sorted_log(&dropped), vec![1, 1, 2, 2, 3]);
    }

    #[test]
    fn contains_and_clone() {
        let list = List::from_iter(0..5);
        assert!(list.contains(&3));
        assert!(!list.contains(&7));

        let cloned = list.clone();
        assert_eq!(list, cloned);
        cloned.check_ring();
    }
}

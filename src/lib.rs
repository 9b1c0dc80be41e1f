//! This crate provides a doubly-linked list with owned nodes, implemented as a
//! circular list anchored at a ghost (sentinel) node.
//!
//! The [`List`] allows inserting, removing elements at any given position in
//! constant time. In compromise, accessing or mutating elements at any position
//! take *O*(*n*) time. On top of the container, the crate ships two in-place,
//! stable merge sorts and a family of single-pass structural filters, all of
//! which relink nodes rather than move elements.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ringlist::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.current(), Some(&1));
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 2, 3, 4]));
//!
//! assert!(cursor.seek_to(3).is_ok()); // move the cursor to position 3
//! assert_eq!(cursor.remove(), Some(3));
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 2, 4]));
//!
//! cursor.push_front(5); // pushing front to the list is also allowed
//! assert_eq!(cursor.view(), &List::from_iter([5, 0, 1, 2, 4]));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains a single pointer `ghost` that points to the ghost node.
//! There is deliberately no cached length: [`List::len`] walks the ring and is
//! *O*(*n*).
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the ghost node if it
//!   is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the ghost node if
//!   it is the first element in the list);
//! - the actual payload `T` that depends on the element type of the list, except
//!   the ghost node.
//!
//! Note that the ghost node has *NO* payload to save memory.
//!
//! Initially, there is a ghost node in an empty list, of which the `next` and `prev`
//! pointer point to itself.
//!
//! As elements are inserted into the list, `ghost.next` points to the first element,
//! and `ghost.prev` points to the last element of the list.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1, ...,
//! *n* - 1, and the ghost node is always indexed by *n*. (In an empty list, the
//! ghost nodes is indexed by 0, which is equal to its length 0).
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//! [`IterMut`] provides mutability of the elements (but not the linked structure of
//! the list).
//!
//! ## Examples
//!
//! ```
//! use ringlist::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of viewing a list.
//!
//! As the names suggest, they are like cursors and can move forward or backward
//! over the list. In a list with length *n*, there are *n* + 1 valid locations
//! for the cursor, indexed by 0, 1, ..., *n*, where *n* is the ghost node of the
//! list.
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] provides many useful ways to mutate the list in any position.
//! - [`insert`]: insert a new item at the cursor;
//! - [`remove`]: remove the item at the cursor;
//! - [`backspace`]: remove the item before the cursor;
//! - [`split`]: split the list into a new one, from the cursor position to the end;
//! - [`splice`]: splice another list before the cursor position;
//!
//! ## Examples
//!
//! ```
//! use ringlist::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [5, 1, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 4]);
//! ```
//!
//! See more functions in [`CursorMut`].
//!
//! # Sorting
//!
//! [`List::sort`], [`List::sort_by`] and [`List::sort_by_key`] run a bottom-up
//! natural merge sort: elements are gathered into power-of-two runs on a small
//! pending stack and a binary counter's carries decide when equal-sized runs
//! merge. The sort is stable, relinks nodes in place, and never exceeds
//! 2*n*·log₂(*n*) comparisons; presorted input costs about a quarter of that.
//!
//! [`List::sort_recursive`] and [`List::sort_recursive_by`] keep the classic
//! top-down alternative: split at the structural midpoint found by a slow/fast
//! pointer walk, sort the halves recursively, merge. Two sorted lists can also
//! be combined without resorting via [`List::merge_sorted`].
//!
//! ```
//! use ringlist::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([5, 2, 4, 3, 1]);
//! list.sort();
//! assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
//! ```
//!
//! # Structural Filters
//!
//! A family of single-pass, in-place operations borrowed from queue
//! discipline exercises:
//! - [`List::retain_ascending`] / [`List::retain_descending`]: keep only the
//!   elements not beaten by anything to their right;
//! - [`List::remove_middle`]: unlink the middle element, found structurally;
//! - [`List::purge_duplicates`]: on a sorted list, drop every member of each
//!   duplicated run;
//! - [`List::swap_pairs`], [`List::reverse`], [`List::reverse_chunks`]:
//!   relink-only reorderings.
//!
//! ```
//! use ringlist::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([5, 3, 4, 2]);
//! assert_eq!(list.retain_ascending(), 1);
//! assert_eq!(Vec::from_iter(list), vec![2]);
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace
//! [`split`]: crate::list::cursor::CursorMut::split
//! [`splice`]: crate::list::cursor::CursorMut::splice

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

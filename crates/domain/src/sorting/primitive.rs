// domain sorting primitives
use std::{cmp::Ordering, fmt};

/// ソートアルゴリズムの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKind {
    /// Hand-rolled partition sort, see [`QuickSort`].
    QuickSort,
    /// The standard library's stable slice sort.
    Stable,
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuickSort => f.write_str("quick-sort"),
            Self::Stable => f.write_str("stable"),
        }
    }
}

/// Comparison-based ordering routine injected into the timeline sorts.
///
/// Implementations consume the items and return them in ascending order according to
/// `compare`. Items that compare equal keep their relative order.
pub trait SortPrimitive {
    fn kind(&self) -> SortKind;

    fn sort_by<T, F>(&self, items: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// Partition sort that never touches the standard library sorts.
///
/// The pivot is the first element of the remaining sub-sequence. Elements comparing less
/// than the pivot go left, everything else (ties included) goes right, and the result is
/// `sort(left) ++ [pivot] ++ sort(right)`. Since both partitions keep input order and an
/// equal element can only follow its pivot, the rule is stable.
///
/// Average O(n log n); already sorted or reverse sorted input degrades to O(n²).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuickSort;

impl SortPrimitive for QuickSort {
    fn kind(&self) -> SortKind {
        SortKind::QuickSort
    }

    fn sort_by<T, F>(&self, items: Vec<T>, mut compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        quick_sort(items, &mut compare)
    }
}

/// Pending step of [`quick_sort`].
enum Work<T> {
    Sort(Vec<T>),
    Emit(T),
}

/// `sort(left) ++ [pivot] ++ sort(right)` driven by a heap-allocated work stack, so sorted
/// input or long runs of equal keys cannot exhaust the thread stack. Pushing right, pivot,
/// left keeps the comparison order of the recursive formulation.
fn quick_sort<T, F>(items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = Vec::with_capacity(items.len());
    let mut work = vec![Work::Sort(items)];

    while let Some(step) = work.pop() {
        match step {
            Work::Emit(item) => sorted.push(item),
            Work::Sort(items) if items.len() < 2 => sorted.extend(items),
            Work::Sort(items) => {
                let mut rest = items.into_iter();
                let Some(pivot) = rest.next() else {
                    continue;
                };
                let (left, right): (Vec<T>, Vec<T>) =
                    rest.partition(|item| compare(item, &pivot) == Ordering::Less);

                work.push(Work::Sort(right));
                work.push(Work::Emit(pivot));
                work.push(Work::Sort(left));
            }
        }
    }
    sorted
}

/// Delegates to [`slice::sort_by`], which is stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StableSort;

impl SortPrimitive for StableSort {
    fn kind(&self) -> SortKind {
        SortKind::Stable
    }

    fn sort_by<T, F>(&self, mut items: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        items.sort_by(compare);
        items
    }
}

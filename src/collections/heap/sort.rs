use std::cmp::Ordering;

/// Sorts `items` in ascending order, in place, using heap sort.
///
/// The slice is first arranged into a max-heap from the bottom up. The largest remaining element
/// is then repeatedly swapped to the end of the unsorted region, which shrinks by one each time.
/// The sort isn't stable and runs in `O(n log n)` time with no extra allocation.
pub fn heap_sort<T: Ord>(items: &mut [T]) {
    heap_sort_by(items, T::cmp);
}

/// Sorts `items` in place with heap sort, using `compare` to order the elements.
pub fn heap_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    for start in (0..len / 2).rev() {
        sift_down(items, start, len, &mut compare);
    }

    for end in (1..len).rev() {
        items.swap(0, end);
        sift_down(items, 0, end, &mut compare);
    }
}

/// Moves the element at `index` down the max-heap formed by `items[..len]` until neither of its
/// children is greater.
fn sift_down<T, F>(items: &mut [T], mut index: usize, len: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * index + 1;
        if left >= len {
            return;
        }

        let right = left + 1;
        let child = if right < len && compare(&items[right], &items[left]).is_gt() {
            right
        } else {
            left
        };

        if compare(&items[child], &items[index]).is_le() {
            return;
        }
        items.swap(index, child);
        index = child;
    }
}

/// Quicksort with Lomuto partitioning.
///
/// The last element of each range is the pivot and elements equal to it move
/// to the left partition. Pending ranges live on an explicit stack, so call
/// depth stays constant regardless of input length.
pub fn quick_sort(input: &str) -> String {
    let mut chars: Vec<char> = input.chars().collect();
    if chars.len() <= 1 {
        return input.to_string();
    }

    let mut ranges = vec![(0, chars.len() - 1)];

    while let Some((left, right)) = ranges.pop() {
        if left >= right {
            continue;
        }

        let pivot = partition(&mut chars, left, right);

        if pivot > left + 1 {
            ranges.push((left, pivot - 1));
        }
        if pivot + 1 < right {
            ranges.push((pivot + 1, right));
        }
    }

    chars.into_iter().collect()
}

/// Partition `chars[left..=right]` around `chars[right]`.
///
/// Returns the final index of the pivot.
fn partition(chars: &mut [char], left: usize, right: usize) -> usize {
    let pivot = chars[right];
    let mut store = left;

    for j in left..right {
        if chars[j] <= pivot {
            chars.swap(store, j);
            store += 1;
        }
    }

    chars.swap(store, right);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_sort_basic() {
        assert_eq!(quick_sort("cba"), "abc");
        assert_eq!(quick_sort("edcbaabcde"), "aabbccddee");
    }

    #[test]
    fn test_quick_sort_trivial_inputs() {
        assert_eq!(quick_sort(""), "");
        assert_eq!(quick_sort("q"), "q");
    }

    #[test]
    fn test_quick_sort_duplicates() {
        assert_eq!(quick_sort("banana"), "aaabnn");
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut chars: Vec<char> = "dacb".chars().collect();
        let pivot = partition(&mut chars, 0, 3);
        assert_eq!(pivot, 1);
        assert_eq!(chars[pivot], 'b');
        assert!(chars[..pivot].iter().all(|c| *c <= 'b'));
        assert!(chars[pivot + 1..].iter().all(|c| *c > 'b'));
    }

    #[test]
    fn test_partition_moves_ties_left() {
        let mut chars: Vec<char> = "bab".chars().collect();
        let pivot = partition(&mut chars, 0, 2);
        assert_eq!(pivot, 2);
        assert_eq!(chars, vec!['b', 'a', 'b']);
    }
}

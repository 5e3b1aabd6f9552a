//! Two interchangeable string sorts.
//!
//! Both produce characters in non-decreasing code-point order and must agree
//! on every input; the caller picks one with [`SortAlgorithm`].

pub mod quick;
pub mod tree;

pub use quick::quick_sort;
pub use tree::tree_sort;

/// Which algorithm [`sort`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortAlgorithm {
    #[default]
    QuickSort,
    TreeSort,
}

impl SortAlgorithm {
    /// Map the endpoint's `isQuickSort` flag to an algorithm.
    pub fn from_quick_sort_flag(is_quick_sort: bool) -> Self {
        if is_quick_sort {
            SortAlgorithm::QuickSort
        } else {
            SortAlgorithm::TreeSort
        }
    }
}

impl std::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortAlgorithm::QuickSort => write!(f, "quicksort"),
            SortAlgorithm::TreeSort => write!(f, "tree sort"),
        }
    }
}

pub fn sort(input: &str, algorithm: SortAlgorithm) -> String {
    match algorithm {
        SortAlgorithm::QuickSort => quick_sort(input),
        SortAlgorithm::TreeSort => tree_sort(input),
    }
}

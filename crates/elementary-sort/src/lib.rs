mod algorithms;

pub use algorithms::bubble_sort::bubble_sort;
pub use algorithms::quick_sort::quick_sort;
pub use algorithms::selection_sort::selection_sort;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    SelectionSort,
    BubbleSort,
    QuickSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::SelectionSort,
    SortAlgorithm::BubbleSort,
    SortAlgorithm::QuickSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::SelectionSort => "selection_sort",
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::QuickSort => "quick_sort",
    }
}

pub fn sort<T: Ord>(algo: SortAlgorithm, data: &mut [T]) {
    match algo {
        SortAlgorithm::SelectionSort => algorithms::selection_sort::sort(data),
        SortAlgorithm::BubbleSort => algorithms::bubble_sort::sort(data),
        SortAlgorithm::QuickSort => algorithms::quick_sort::sort(data),
    }
}

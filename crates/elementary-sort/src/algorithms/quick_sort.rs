pub fn sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }
    quick_sort(data, 0, len - 1);
}

/// Sorts the inclusive index range `[low, high]`. No-op when `low >= high`.
/// Panics on indices outside `[0, data.len() - 1]`.
pub fn quick_sort<T: Ord>(data: &mut [T], mut low: usize, mut high: usize) {
    // Recurse into the smaller partition only and loop on the larger,
    // so stack depth stays logarithmic even on adversarial input.
    while low < high {
        let p = partition(data, low, high);

        if p - low < high - p {
            if p > low {
                quick_sort(data, low, p - 1);
            }
            low = p + 1;
        } else {
            if p < high {
                quick_sort(data, p + 1, high);
            }
            high = p - 1;
        }
    }
}

// Lomuto scheme: pivot is the last element of the range, elements equal to
// the pivot land in the left partition. Returns the pivot's final index.
fn partition<T: Ord>(data: &mut [T], low: usize, high: usize) -> usize {
    let mut store = low;
    for j in low..high {
        if data[j] <= data[high] {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, high);
    store
}

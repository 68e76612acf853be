pub fn sort<T: Ord>(data: &mut [T]) {
    bubble_sort(data);
}

pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut swapped = false;
        for j in 0..len - 1 - i {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }

        // A pass with no swaps means the whole prefix is already ordered.
        if !swapped {
            break;
        }
    }
}

pub fn sort<T: Ord>(data: &mut [T]) {
    selection_sort(data);
}

pub fn selection_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        // Strict `<` keeps the leftmost minimum on ties.
        let mut min = i;
        for j in i + 1..len {
            if data[j] < data[min] {
                min = j;
            }
        }

        if min != i {
            data.swap(i, min);
        }
    }
}

//! # Vectors used as a user of the crate would
use upper_triangular::Vector;

/// # Scenarios
mod test;

/// Vector of length `len` starting at `start_index`, with value `k * k` at logical index `k`.
fn squares(len: isize, start_index: isize) -> Vector<i32> {
    let mut v = Vector::new(len, start_index).unwrap();
    for (k, value) in (v.start_index()..).zip(v.iter_mut()) {
        *value = (k * k) as i32;
    }
    v
}

use upper_triangular::{Error, MAX_VECTOR_SIZE, Vector};
use upper_triangular::io::ReadText;

use super::squares;

#[test]
fn can_create_vector_with_positive_length() {
    let v = Vector::<i32>::new(5, 0).unwrap();
    assert_eq!(v.len(), 5);
    assert_eq!(v.start_index(), 0);
}

#[test]
fn cant_create_too_large_vector() {
    let result = Vector::<i32>::new(MAX_VECTOR_SIZE as isize + 1, 0);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn throws_when_create_vector_with_negative_length() {
    assert!(matches!(Vector::<i32>::new(-5, 0), Err(Error::InvalidArgument(_))));
}

#[test]
fn throws_when_create_vector_with_negative_startindex() {
    assert!(matches!(Vector::<i32>::new(5, -2), Err(Error::InvalidArgument(_))));
}

#[test]
fn new_vector_is_zero() {
    for (len, start_index) in [(0, 0), (1, 0), (4, 3), (10, 100)] {
        let v = Vector::<i64>::new(len, start_index).unwrap();
        assert_eq!(v.len(), len as usize);
        assert_eq!(v.start_index(), start_index as usize);
        assert!(v.iter().all(|&x| x == 0));
    }
}

#[test]
fn copied_vector_is_equal_to_source_one() {
    let v = squares(5, 2);
    let copy = v.clone();
    assert_eq!(copy, v);
    assert_eq!(copy.start_index(), 2);
}

#[test]
fn copied_vector_has_its_own_memory() {
    let v = squares(5, 0);
    let mut copy = v.clone();
    assert_ne!(v.get(0).unwrap() as *const i32, copy.get(0).unwrap() as *const i32);

    copy[1] = -1;
    assert_eq!(v[1], 1);
}

#[test]
fn can_set_and_get_element() {
    let mut v = Vector::<i32>::new(4, 0).unwrap();
    v[0] = 4;
    assert_eq!(v[0], 4);

    *v.get_mut(3).unwrap() = 9;
    assert_eq!(v.get(3), Ok(&9));
}

#[test]
fn throws_when_set_element_with_negative_index() {
    let mut v = Vector::<i32>::new(4, 0).unwrap();
    assert_eq!(
        v.get_mut(-1).err(),
        Some(Error::IndexOutOfRange { index: -1, start_index: 0, len: 4 }),
    );
}

#[test]
fn throws_when_set_element_with_too_large_index() {
    let mut v = Vector::<i32>::new(4, 2).unwrap();
    assert!(matches!(v.get_mut(6), Err(Error::IndexOutOfRange { index: 6, .. })));
    assert!(matches!(v.get_mut(1), Err(Error::IndexOutOfRange { index: 1, .. })));
    assert!(v.get_mut(5).is_ok());
}

#[test]
fn can_assign_vector_to_equal_value() {
    let mut v = squares(4, 1);
    let same = v.clone();
    v.clone_from(&same);
    assert_eq!(v, squares(4, 1));
}

#[test]
fn can_assign_vectors_of_equal_size() {
    let source = squares(4, 1);
    let mut target = Vector::new(4, 0).unwrap();
    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.start_index(), 1);
}

#[test]
fn assign_operator_change_vector_size() {
    let source = squares(3, 0);
    let mut target = Vector::new(7, 0).unwrap();
    target.clone_from(&source);
    assert_eq!(target.len(), 3);
}

#[test]
fn can_assign_vectors_of_different_size() {
    let source = squares(7, 0);
    let mut target = Vector::new(3, 5).unwrap();
    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.start_index(), 0);
}

#[test]
fn compare_equal_vectors_return_true() {
    assert!(squares(5, 0) == squares(5, 0));
    assert!(!(squares(5, 0) != squares(5, 0)));
}

#[test]
#[allow(clippy::eq_op)]
fn compare_vector_with_itself_return_true() {
    let v = squares(5, 0);
    assert!(v == v);
    assert!(!(v != v));
}

#[test]
fn vectors_with_different_size_are_not_equal() {
    let v = Vector::<i32>::new(5, 0).unwrap();
    let w = Vector::<i32>::new(7, 0).unwrap();
    assert!(v != w);
    assert!(!(v == w));
}

#[test]
fn start_index_is_not_compared() {
    let mut v = Vector::<i32>::new(3, 0).unwrap();
    let mut w = Vector::<i32>::new(3, 10).unwrap();
    for (a, b) in v.iter_mut().zip(w.iter_mut()) {
        *a = 2;
        *b = 2;
    }
    assert_eq!(v, w);
}

#[test]
fn can_add_scalar_to_vector() {
    let v = squares(3, 0);
    assert_eq!(&v + 1, Vector::from_values(vec![1, 2, 5], 0).unwrap());
}

#[test]
fn can_subtract_scalar_from_vector() {
    let v = squares(3, 0);
    assert_eq!(&v - 1, Vector::from_values(vec![-1, 0, 3], 0).unwrap());
}

#[test]
fn can_multiply_scalar_by_vector() {
    let v = squares(3, 0);
    assert_eq!(&v * 3, Vector::from_values(vec![0, 3, 12], 0).unwrap());
}

#[test]
fn can_add_vectors_with_equal_size() {
    let v = squares(4, 0);
    let w = squares(4, 0);
    let sum = v.try_add(&w).unwrap();
    assert_eq!(sum.len(), 4);
    assert_eq!(sum, v.mul_scalar(&2));
}

#[test]
fn cant_add_vectors_with_not_equal_size() {
    let v = squares(4, 0);
    let w = squares(5, 0);
    assert_eq!(v.try_add(&w), Err(Error::SizeMismatch { left: 4, right: 5 }));
}

#[test]
fn can_subtract_vectors_with_equal_size() {
    let v = squares(4, 0);
    assert_eq!(v.try_sub(&v), Ok(Vector::new(4, 0).unwrap()));
}

#[test]
fn cant_subtract_vectors_with_not_equal_size() {
    let v = squares(4, 0);
    let w = squares(5, 0);
    assert!(matches!(v.try_sub(&w), Err(Error::SizeMismatch { .. })));
}

#[test]
fn can_multiply_vectors_with_equal_size() {
    let v = squares(3, 0);
    let w = Vector::from_values(vec![1, 1, 1], 0).unwrap();
    assert_eq!(v.dot(&w), Ok(5));
}

#[test]
fn cant_multiply_vectors_with_not_equal_size() {
    let v = squares(3, 0);
    let w = squares(2, 0);
    assert_eq!(v.dot(&w), Err(Error::SizeMismatch { left: 3, right: 2 }));
}

#[test]
fn write_and_read_text() {
    let v = squares(4, 3);
    let text = v.to_string();
    assert_eq!(text, "9 16 25 36");

    let mut w = Vector::<i32>::new(4, 0).unwrap();
    w.read_text(&text).unwrap();
    assert_eq!(w, v);
}

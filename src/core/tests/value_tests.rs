use crate::core::TypeWrapper;
use crate::error::BindError;
use std::ptr;

#[test]
fn test_unset_wrapper_reads_zero() {
    let wrapper = TypeWrapper::new();
    assert!(!wrapper.is_set());
    assert_eq!(wrapper.int_value(), 0);
}

#[test]
fn test_unset_wrapper_pointer_is_an_error() {
    let wrapper = TypeWrapper::new();
    assert!(matches!(wrapper.as_gvalue_ptr(), Err(BindError::UnsetValue)));
}

#[test]
fn test_int_value_is_cached() {
    let mut value = glib::Value::from(42i32);
    let wrapper = TypeWrapper::from_value(&mut value);

    assert!(wrapper.is_set());
    assert_eq!(wrapper.int_value(), 42);
    assert!(!wrapper.as_gvalue_ptr().unwrap().is_null());
}

#[test]
fn test_non_int_value_reads_zero() {
    let mut value = glib::Value::from("forty-two");
    let wrapper = TypeWrapper::from_value(&mut value);

    assert!(wrapper.is_set());
    assert_eq!(wrapper.int_value(), 0);
}

#[test]
fn test_raw_pointer_views() {
    let unset = unsafe { TypeWrapper::from_raw(ptr::null_mut()) };
    assert!(!unset.is_set());

    let mut value = glib::Value::from(-7i32);
    let raw = TypeWrapper::from_value(&mut value).as_gvalue_ptr().unwrap();
    let wrapper = unsafe { TypeWrapper::from_raw(raw) };
    assert_eq!(wrapper.int_value(), -7);
}

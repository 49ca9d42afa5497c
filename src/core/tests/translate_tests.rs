use crate::core::translate::{slist_into_vec, to_cstring, to_optional_cstring};
use crate::core::{from_gboolean, to_gboolean, with_gerror, OwnedGStr, OwnedStrv};
use crate::error::BindError;
use glib::ffi::{self, gpointer};
use glib::translate::from_glib_none;
use std::ffi::{CStr, CString};
use std::ptr;

/// Helper to get a g_malloc'd copy of `text`
fn native_copy(text: &str) -> OwnedGStr {
    let c_text = CString::new(text).unwrap();
    unsafe { OwnedGStr::from_full(ffi::g_strdup(c_text.as_ptr())) }.unwrap()
}

// ============================================================================
// Booleans
// ============================================================================

#[test]
fn test_any_nonzero_gboolean_is_true() {
    assert!(from_gboolean(1));
    assert!(from_gboolean(2));
    assert!(from_gboolean(-1));
    assert!(!from_gboolean(0));
}

#[test]
fn test_to_gboolean_uses_canonical_values() {
    assert_eq!(to_gboolean(true), ffi::GTRUE);
    assert_eq!(to_gboolean(false), ffi::GFALSE);
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_owned_string_reads_and_compares() {
    let owned = native_copy("Ärger über Umlaute");

    assert_eq!(owned.to_str().unwrap(), "Ärger über Umlaute");
    assert!(owned == "Ärger über Umlaute");
    assert_eq!(owned.to_string(), "Ärger über Umlaute");
    assert_eq!(owned.into_string(), "Ärger über Umlaute");
}

#[test]
fn test_null_strings_become_none() {
    assert!(unsafe { OwnedGStr::from_full(ptr::null_mut()) }.is_none());
    assert!(unsafe { from_glib_none::<_, Option<glib::GString>>(ptr::null::<std::ffi::c_char>()) }.is_none());
    assert!(unsafe { OwnedStrv::from_full(ptr::null_mut()) }.is_none());
}

#[test]
fn test_invalid_utf8_is_an_error_not_a_panic() {
    let bytes = CString::new(vec![b'a', 0xff, b'b']).unwrap();
    let owned = unsafe { OwnedGStr::from_full(ffi::g_strdup(bytes.as_ptr())) }.unwrap();

    assert!(matches!(owned.to_str(), Err(BindError::Utf8(_))));
    assert_eq!(owned.to_string_lossy(), "a\u{fffd}b");
}

#[test]
fn test_transfer_none_string_is_copied_not_freed() {
    let source = CString::new("borrowed").unwrap();
    {
        let copy: Option<glib::GString> = unsafe { from_glib_none(source.as_ptr()) };
        let copy = copy.unwrap();
        assert_eq!(copy, "borrowed");
        assert_ne!(copy.as_ptr(), source.as_ptr(), "getter results must not alias native memory");
    }
    // Still readable after the copy is gone
    assert_eq!(source.to_str().unwrap(), "borrowed");
}

#[test]
fn test_strv_iterates_all_entries() {
    let text = CString::new("suggested-action,flat,circular").unwrap();
    let sep = CString::new(",").unwrap();
    let strv = unsafe { OwnedStrv::from_full(ffi::g_strsplit(text.as_ptr(), sep.as_ptr(), -1)) }.unwrap();

    assert_eq!(strv.len(), 3);
    assert!(!strv.is_empty());
    assert_eq!(strv.to_vec(), vec!["suggested-action", "flat", "circular"]);
}

#[test]
fn test_interior_nul_is_rejected() {
    let result = to_cstring("abc\0def");
    assert!(matches!(result, Err(BindError::InteriorNul(_))));
}

#[test]
fn test_optional_cstring_keeps_none() {
    assert!(to_optional_cstring(None).unwrap().is_none());
    let some = to_optional_cstring(Some("x")).unwrap().unwrap();
    assert_eq!(some.as_c_str(), CStr::from_bytes_with_nul(b"x\0").unwrap());
}

// ============================================================================
// GError and lists
// ============================================================================

#[test]
fn test_with_gerror_passes_value_through() {
    let result = with_gerror(|_error| 42);
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn test_with_gerror_reports_native_error() {
    let path = CString::new("/nonexistent/gtkwrap/missing.ui").unwrap();
    let mut contents = ptr::null_mut();
    let mut length = 0;

    let result = with_gerror(|error| unsafe {
        ffi::g_file_get_contents(path.as_ptr(), &mut contents, &mut length, error)
    });

    match result {
        Err(BindError::Native(error)) => {
            assert!(!error.message().is_empty(), "GError should carry a message");
        }
        other => panic!("Expected a native error, got {:?}", other),
    }
    assert!(contents.is_null());
}

#[test]
fn test_slist_into_vec_keeps_order_and_filters() {
    let mut list = ptr::null_mut();
    for value in 1usize..=4 {
        list = unsafe { ffi::g_slist_append(list, value as gpointer) };
    }

    let even: Vec<usize> = unsafe {
        slist_into_vec(list, |data| {
            let value = data as usize;
            (value % 2 == 0).then_some(value)
        })
    };

    assert_eq!(even, vec![2, 4]);
}

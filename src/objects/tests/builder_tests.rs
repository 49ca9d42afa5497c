// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::capabilities::{Buildable, BuildableObject};
use crate::core::{Binding, Object};
use crate::error::BindError;
use crate::objects::{Adjustment, Builder, ListStore};
use crate::test_support::with_gtk;
use crate::widgets::{Entry, Window};
use glib::translate::IntoGlib;
use std::fs;
use tempfile::TempDir;

const UI: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<interface>
  <object class="GtkAdjustment" id="zoom">
    <property name="lower">0</property>
    <property name="upper">400</property>
    <property name="value">100</property>
  </object>
  <object class="GtkWindow" id="main_window">
    <property name="title">Settings</property>
    <child>
      <object class="GtkEntry" id="name_entry">
        <property name="text">Ada</property>
      </object>
    </child>
  </object>
</interface>
"#;

/// Helper to write a UI file into a temporary directory
fn write_ui(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("window.ui");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_from_string() {
    with_gtk(|| {
        let builder = Builder::from_string(UI).unwrap();

        let zoom = builder.object_as::<Adjustment>("zoom").unwrap().unwrap();
        assert_eq!(zoom.value(), 100.0);
        assert_eq!(zoom.upper(), 400.0);
    });
}

#[test]
fn test_load_from_file() {
    with_gtk(|| {
        let (_temp_dir, path) = write_ui(UI);
        let builder = Builder::from_file(&path).unwrap();

        let window = builder.object_as::<Window>("main_window").unwrap();
        assert!(window.is_some(), "main_window should be built from the file");
    });
}

#[test]
fn test_missing_file_is_native_error() {
    with_gtk(|| {
        let temp_dir = TempDir::new().unwrap();
        let result = Builder::from_file(temp_dir.path().join("missing.ui"));

        assert!(matches!(result, Err(BindError::Native(_))));
    });
}

#[test]
fn test_raw_file_load_takes_paths() {
    with_gtk(|| {
        let (_temp_dir, path) = write_ui(UI);
        let builder = Builder::new().unwrap();

        assert!(builder.add_from_file_raw(&path, None).unwrap());
        assert!(builder.object("zoom").unwrap().is_some());

        let mut error = std::ptr::null_mut();
        let missing = path.with_file_name("missing.ui");
        assert!(!builder.add_from_file_raw(missing, Some(&mut error)).unwrap());
        assert!(!error.is_null());
        unsafe { glib::ffi::g_error_free(error) };
    });
}

#[cfg(unix)]
#[test]
fn test_raw_file_load_accepts_non_utf8_name() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    with_gtk(|| {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(OsStr::from_bytes(b"caf\xe9.ui"));
        assert!(path.to_str().is_none());
        fs::write(&path, UI).unwrap();

        let builder = Builder::new().unwrap();
        assert!(builder.add_from_file_raw(&path, None).unwrap());
        assert!(builder.object("main_window").unwrap().is_some());
    });
}

#[test]
fn test_malformed_description_is_an_error_not_an_abort() {
    with_gtk(|| {
        let result = Builder::from_string("<interface><object class=");
        match result {
            Err(BindError::Native(error)) => assert!(!error.message().is_empty()),
            other => panic!("Expected a GError, got {:?}", other),
        }
    });
}

#[test]
fn test_unknown_class_is_an_error() {
    with_gtk(|| {
        let builder = Builder::new().unwrap();
        let result = builder.add_from_string(
            r#"<interface><object class="GtkNoSuchWidget" id="x"/></interface>"#,
        );
        assert!(result.is_err());
    });
}

#[test]
fn test_raw_variant_fills_caller_slot() {
    with_gtk(|| {
        let builder = Builder::new().unwrap();
        let mut error = std::ptr::null_mut();

        let loaded = builder.add_from_string_raw("<interface", Some(&mut error)).unwrap();

        assert!(!loaded);
        assert!(!error.is_null());
        unsafe { glib::ffi::g_error_free(error) };
    });
}

#[test]
fn test_add_objects_builds_only_requested() {
    with_gtk(|| {
        let builder = Builder::new().unwrap();
        builder.add_objects_from_string(UI, &["zoom"]).unwrap();

        assert!(builder.object("zoom").unwrap().is_some());
        assert!(builder.object("main_window").unwrap().is_none());
    });
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_unknown_id_is_none() {
    with_gtk(|| {
        let builder = Builder::from_string(UI).unwrap();
        assert!(builder.object("nope").unwrap().is_none());
        assert!(builder.object_as::<Window>("nope").unwrap().is_none());
    });
}

#[test]
fn test_object_as_wrong_type_is_mismatch() {
    with_gtk(|| {
        let builder = Builder::from_string(UI).unwrap();

        match builder.object_as::<Window>("zoom") {
            Err(BindError::TypeMismatch { expected, found }) => {
                assert_eq!(expected, "GtkWindow");
                assert_eq!(found, "GtkAdjustment");
            }
            other => panic!("Expected a type mismatch, got {:?}", other),
        }
    });
}

#[test]
fn test_borrowed_object_upgrades() {
    with_gtk(|| {
        let builder = Builder::from_string(UI).unwrap();
        let borrowed = builder.object("name_entry").unwrap().unwrap();

        assert_eq!(borrowed.type_name(), "GtkEntry");
        let entry: Entry = borrowed.upgrade_as().unwrap();
        let id = entry.buildable_id().unwrap();
        assert_eq!(id.as_str(), "name_entry");
    });
}

#[test]
fn test_objects_lists_everything() {
    with_gtk(|| {
        let builder = Builder::from_string(UI).unwrap();

        let mut type_names: Vec<String> = builder.objects().iter().map(|object| object.type_name()).collect();
        type_names.sort();
        assert_eq!(type_names, vec!["GtkAdjustment", "GtkEntry", "GtkWindow"]);

        let mut ids: Vec<String> = builder
            .objects()
            .iter()
            .filter_map(|object| object.upgrade_as::<BuildableObject>().ok())
            .filter_map(|object| object.buildable_id().map(String::from))
            .collect();
        ids.sort();
        assert!(ids.contains(&"main_window".to_string()));
        assert!(ids.contains(&"name_entry".to_string()));
    });
}

#[test]
fn test_expose_object_makes_it_referenceable() {
    with_gtk(|| {
        let builder = Builder::new().unwrap();
        let store = ListStore::new(&[glib::Type::STRING]).unwrap();
        builder.expose_object("names", &store).unwrap();

        let found = builder.object_as::<ListStore>("names").unwrap().unwrap();
        assert_eq!(found, store);
    });
}

#[test]
fn test_current_object_round_trip() {
    with_gtk(|| {
        let builder = Builder::new().unwrap();
        assert!(builder.current_object().is_none());

        let store = ListStore::new(&[glib::Type::I32]).unwrap();
        builder.set_current_object(Some(&store));
        let current = builder.current_object().unwrap();
        assert_eq!(current.handle(), store.handle());

        builder.set_current_object(None::<&Object>);
        assert!(builder.current_object().is_none());
    });
}

#[test]
fn test_current_object_outlives_replacement() {
    with_gtk(|| {
        let builder = Builder::new().unwrap();
        let store = ListStore::new(&[glib::Type::I32]).unwrap();
        builder.set_current_object(Some(&store));

        let current = builder.current_object().unwrap();
        let refs_held = current.handle().ref_count();
        drop(store);
        builder.set_current_object(None::<&Object>);

        // Our reference keeps the object alive after the builder lets go.
        assert_eq!(current.handle().ref_count(), refs_held - 2);
        assert_eq!(current.handle().type_name(), "GtkListStore");
    });
}

#[test]
fn test_translation_domain_survives_reset() {
    with_gtk(|| {
        let builder = Builder::new().unwrap();
        builder.set_translation_domain(Some("first-domain")).unwrap();

        let domain = builder.translation_domain().unwrap();
        builder.set_translation_domain(Some("second-domain-".repeat(64).as_str())).unwrap();
        builder.set_translation_domain(None).unwrap();

        assert_eq!(domain, "first-domain");
        assert!(builder.translation_domain().is_none());
    });
}

#[test]
fn test_buildable_id_survives_expose() {
    with_gtk(|| {
        let builder = Builder::from_string(UI).unwrap();
        let entry = builder.object_as::<Entry>("name_entry").unwrap().unwrap();
        let id = entry.buildable_id().unwrap();

        // Exposing under a new name replaces the id string on the object.
        let other = Builder::new().unwrap();
        other.expose_object("renamed_entry", &entry).unwrap();

        assert_eq!(id, "name_entry");
        assert_eq!(entry.buildable_id().unwrap(), "renamed_entry");
    });
}

// ============================================================================
// Metadata
// ============================================================================

#[test]
fn test_translation_domain() {
    with_gtk(|| {
        let builder = Builder::new().unwrap();
        assert!(builder.translation_domain().is_none());

        builder.set_translation_domain(Some("gtkwrap")).unwrap();
        assert_eq!(builder.translation_domain().unwrap().as_str(), "gtkwrap");

        builder.set_translation_domain(None).unwrap();
        assert!(builder.translation_domain().is_none());
    });
}

#[test]
fn test_type_from_name() {
    with_gtk(|| {
        let builder = Builder::new().unwrap();

        assert_eq!(builder.type_from_name("GtkEntry").unwrap().into_glib(), Entry::static_type());
        assert_eq!(builder.type_from_name("NotAType").unwrap(), glib::Type::INVALID);
    });
}

#[test]
fn test_value_from_string_type() {
    with_gtk(|| {
        let builder = Builder::new().unwrap();

        let flag = builder.value_from_string_type(glib::Type::BOOL, "yes").unwrap();
        assert!(flag.get::<bool>().unwrap());

        let number = builder.value_from_string_type(glib::Type::I32, "-12").unwrap();
        assert_eq!(number.get::<i32>().unwrap(), -12);

        assert!(builder.value_from_string_type(glib::Type::I32, "twelve").is_err());
    });
}

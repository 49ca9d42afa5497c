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

//! The `GtkFileChooser` interface
//!
//! Shared by [`FileChooserDialog`](crate::widgets::FileChooserDialog) and
//! [`FileChooserWidget`](crate::widgets::FileChooserWidget). Both get the
//! whole method set from the default bodies below.
//!
//! Methods that report failure through `GError` return `Result`; each has a
//! `_raw` twin that forwards a caller-supplied error slot unchanged.

use crate::core::binding::{cast_instance, Binding};
use crate::core::translate::{
    from_gboolean, list_model_into_vec, out_ptr, to_cstring, to_gboolean, with_gerror, OwnedGStr,
};
use crate::error::BindResult;
use crate::objects::{File, FileFilter};
use glib::ffi::GError;
use glib::translate::from_glib_none;
use gtk4::ffi;
use std::ffi::{c_char, CString};
use std::ptr;

/// Builds a NULL-terminated `const char*` array over `strings`.
fn strv_ptrs(strings: &[CString]) -> Vec<*const c_char> {
    strings
        .iter()
        .map(|s| s.as_ptr())
        .chain(std::iter::once(ptr::null()))
        .collect()
}

/// File selection shared by dialogs and embedded widgets.
///
/// Implement only for bindings whose native type implements `GtkFileChooser`.
pub trait FileChooser: Binding {
    /// Interface pointer for this object.
    fn file_chooser_ptr(&self) -> *mut ffi::GtkFileChooser {
        // SAFETY: live handle; the cast only re-types the pointer.
        unsafe { cast_instance(self.handle().as_ptr(), ffi::gtk_file_chooser_get_type()) }
    }

    fn action(&self) -> ffi::GtkFileChooserAction {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_file_chooser_get_action(self.file_chooser_ptr()) }
    }

    fn set_action(&self, action: ffi::GtkFileChooserAction) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_file_chooser_set_action(self.file_chooser_ptr(), action) }
    }

    /// Adds a choice. Without `options` the choice is a boolean toggle.
    fn add_choice(
        &self,
        id: &str,
        label: &str,
        options: Option<&[&str]>,
        option_labels: Option<&[&str]>,
    ) -> BindResult<()> {
        let c_id = to_cstring(id)?;
        let c_label = to_cstring(label)?;
        let c_options = options
            .map(|o| o.iter().map(|s| to_cstring(s)).collect::<BindResult<Vec<_>>>())
            .transpose()?;
        let c_labels = option_labels
            .map(|o| o.iter().map(|s| to_cstring(s)).collect::<BindResult<Vec<_>>>())
            .transpose()?;
        let mut option_ptrs = c_options.as_deref().map(strv_ptrs);
        let mut label_ptrs = c_labels.as_deref().map(strv_ptrs);
        // SAFETY: arrays are NULL-terminated and outlive the call; NULL is allowed for both.
        unsafe {
            ffi::gtk_file_chooser_add_choice(
                self.file_chooser_ptr(),
                c_id.as_ptr(),
                c_label.as_ptr(),
                option_ptrs.as_mut().map_or(ptr::null_mut(), |v| v.as_mut_ptr()),
                label_ptrs.as_mut().map_or(ptr::null_mut(), |v| v.as_mut_ptr()),
            )
        };
        Ok(())
    }

    /// Currently selected option of a choice.
    fn choice(&self, id: &str) -> BindResult<Option<glib::GString>> {
        let c_id = to_cstring(id)?;
        // SAFETY: transfer none string owned by the chooser; copied before returning.
        Ok(unsafe { from_glib_none(ffi::gtk_file_chooser_get_choice(self.file_chooser_ptr(), c_id.as_ptr())) })
    }

    fn set_choice(&self, id: &str, option: &str) -> BindResult<()> {
        let c_id = to_cstring(id)?;
        let c_option = to_cstring(option)?;
        // SAFETY: valid C strings.
        unsafe { ffi::gtk_file_chooser_set_choice(self.file_chooser_ptr(), c_id.as_ptr(), c_option.as_ptr()) };
        Ok(())
    }

    fn remove_choice(&self, id: &str) -> BindResult<()> {
        let c_id = to_cstring(id)?;
        // SAFETY: valid C string.
        unsafe { ffi::gtk_file_chooser_remove_choice(self.file_chooser_ptr(), c_id.as_ptr()) };
        Ok(())
    }

    fn creates_folders(&self) -> bool {
        // SAFETY: live interface pointer.
        from_gboolean(unsafe { ffi::gtk_file_chooser_get_create_folders(self.file_chooser_ptr()) })
    }

    fn set_create_folders(&self, create_folders: bool) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_file_chooser_set_create_folders(self.file_chooser_ptr(), to_gboolean(create_folders)) }
    }

    fn selects_multiple(&self) -> bool {
        // SAFETY: live interface pointer.
        from_gboolean(unsafe { ffi::gtk_file_chooser_get_select_multiple(self.file_chooser_ptr()) })
    }

    fn set_select_multiple(&self, select_multiple: bool) {
        // SAFETY: live interface pointer.
        unsafe { ffi::gtk_file_chooser_set_select_multiple(self.file_chooser_ptr(), to_gboolean(select_multiple)) }
    }

    /// Name typed into the save entry. Freshly allocated, freed on drop.
    fn current_name(&self) -> Option<OwnedGStr> {
        // SAFETY: transfer full string.
        unsafe { OwnedGStr::from_full(ffi::gtk_file_chooser_get_current_name(self.file_chooser_ptr())) }
    }

    fn set_current_name(&self, name: &str) -> BindResult<()> {
        let c_name = to_cstring(name)?;
        // SAFETY: valid C string.
        unsafe { ffi::gtk_file_chooser_set_current_name(self.file_chooser_ptr(), c_name.as_ptr()) };
        Ok(())
    }

    fn current_folder(&self) -> Option<File> {
        // SAFETY: transfer full object.
        unsafe { File::wrap_optional_full(ffi::gtk_file_chooser_get_current_folder(self.file_chooser_ptr())) }
    }

    /// Changes the folder shown. `None` resets to the default.
    fn set_current_folder(&self, folder: Option<&File>) -> BindResult<bool> {
        let folder = folder.map_or(ptr::null_mut(), |f| f.native());
        // SAFETY: NULL folder allowed; `error` is a valid slot.
        with_gerror(|error| from_gboolean(unsafe { ffi::gtk_file_chooser_set_current_folder(self.file_chooser_ptr(), folder, error) }))
    }

    /// [`FileChooser::set_current_folder`] with a caller-managed error slot.
    fn set_current_folder_raw(&self, folder: Option<&File>, error: Option<&mut *mut GError>) -> bool {
        let folder = folder.map_or(ptr::null_mut(), |f| f.native());
        // SAFETY: NULL folder and NULL error slot are both allowed.
        from_gboolean(unsafe { ffi::gtk_file_chooser_set_current_folder(self.file_chooser_ptr(), folder, out_ptr(error)) })
    }

    fn file(&self) -> Option<File> {
        // SAFETY: transfer full object.
        unsafe { File::wrap_optional_full(ffi::gtk_file_chooser_get_file(self.file_chooser_ptr())) }
    }

    /// Selects `file`, changing folder as needed.
    fn set_file(&self, file: &File) -> BindResult<bool> {
        // SAFETY: live file; `error` is a valid slot.
        with_gerror(|error| from_gboolean(unsafe { ffi::gtk_file_chooser_set_file(self.file_chooser_ptr(), file.native(), error) }))
    }

    fn set_file_raw(&self, file: &File, error: Option<&mut *mut GError>) -> bool {
        // SAFETY: live file; NULL error slot allowed.
        from_gboolean(unsafe { ffi::gtk_file_chooser_set_file(self.file_chooser_ptr(), file.native(), out_ptr(error)) })
    }

    /// All selected files.
    fn files(&self) -> Vec<File> {
        // SAFETY: transfer full list model of GFile.
        unsafe { list_model_into_vec(ffi::gtk_file_chooser_get_files(self.file_chooser_ptr())) }
    }

    fn add_filter(&self, filter: &FileFilter) {
        // SAFETY: the chooser takes its own reference.
        unsafe { ffi::gtk_file_chooser_add_filter(self.file_chooser_ptr(), filter.native()) }
    }

    fn remove_filter(&self, filter: &FileFilter) {
        // SAFETY: live filter.
        unsafe { ffi::gtk_file_chooser_remove_filter(self.file_chooser_ptr(), filter.native()) }
    }

    fn filter(&self) -> Option<FileFilter> {
        // SAFETY: transfer none object.
        unsafe { FileFilter::wrap_optional_none(ffi::gtk_file_chooser_get_filter(self.file_chooser_ptr())) }
    }

    fn set_filter(&self, filter: &FileFilter) {
        // SAFETY: live filter.
        unsafe { ffi::gtk_file_chooser_set_filter(self.file_chooser_ptr(), filter.native()) }
    }

    /// Filters added with [`FileChooser::add_filter`], in order.
    fn filters(&self) -> Vec<FileFilter> {
        // SAFETY: transfer full list model of GtkFileFilter.
        unsafe { list_model_into_vec(ffi::gtk_file_chooser_get_filters(self.file_chooser_ptr())) }
    }

    fn add_shortcut_folder(&self, folder: &File) -> BindResult<bool> {
        // SAFETY: live file; `error` is a valid slot.
        with_gerror(|error| from_gboolean(unsafe { ffi::gtk_file_chooser_add_shortcut_folder(self.file_chooser_ptr(), folder.native(), error) }))
    }

    fn add_shortcut_folder_raw(&self, folder: &File, error: Option<&mut *mut GError>) -> bool {
        // SAFETY: live file; NULL error slot allowed.
        from_gboolean(unsafe {
            ffi::gtk_file_chooser_add_shortcut_folder(self.file_chooser_ptr(), folder.native(), out_ptr(error))
        })
    }

    fn remove_shortcut_folder(&self, folder: &File) -> BindResult<bool> {
        // SAFETY: live file; `error` is a valid slot.
        with_gerror(|error| from_gboolean(unsafe { ffi::gtk_file_chooser_remove_shortcut_folder(self.file_chooser_ptr(), folder.native(), error) }))
    }

    fn remove_shortcut_folder_raw(&self, folder: &File, error: Option<&mut *mut GError>) -> bool {
        // SAFETY: live file; NULL error slot allowed.
        from_gboolean(unsafe {
            ffi::gtk_file_chooser_remove_shortcut_folder(self.file_chooser_ptr(), folder.native(), out_ptr(error))
        })
    }

    fn shortcut_folders(&self) -> Vec<File> {
        // SAFETY: transfer full list model of GFile.
        unsafe { list_model_into_vec(ffi::gtk_file_chooser_get_shortcut_folders(self.file_chooser_ptr())) }
    }
}

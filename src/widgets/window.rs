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

//! Toplevel windows

use crate::capabilities::Buildable;
use crate::core::binding::{binding, Binding, IsA};
use crate::core::translate::{from_gboolean, optional_ptr, out_ptr, to_gboolean, to_optional_cstring};
use crate::error::BindResult;
use crate::widgets::widget::Widget;
use glib::translate::from_glib_none;
use gtk4::ffi;
use std::ptr;

binding!(
    /// A toplevel window.
    ///
    /// GTK keeps every toplevel alive until [`WindowExt::destroy`], so
    /// dropping the last binding does not close the window.
    Window,
    ffi::GtkWindow,
    "GtkWindow",
    ffi::gtk_window_get_type,
    extends Widget
);

impl Buildable for Window {}

impl Window {
    pub fn new() -> BindResult<Self> {
        // SAFETY: no preconditions; GTK owns the toplevel, wrap_none adds our reference.
        unsafe { Self::wrap_none(ffi::gtk_window_new(), "gtk_window_new") }
    }
}

/// Methods shared by windows and dialogs.
pub trait WindowExt: IsA<Window> {
    fn window_ptr(&self) -> *mut ffi::GtkWindow {
        self.upcast_ref::<Window>().native()
    }

    fn title(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the window; copied before returning.
        unsafe { from_glib_none(ffi::gtk_window_get_title(self.window_ptr())) }
    }

    /// `None` clears the title.
    fn set_title(&self, title: Option<&str>) -> BindResult<()> {
        let c_title = to_optional_cstring(title)?;
        // SAFETY: NULL is allowed.
        unsafe { ffi::gtk_window_set_title(self.window_ptr(), optional_ptr(&c_title)) };
        Ok(())
    }

    fn icon_name(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the window; copied before returning.
        unsafe { from_glib_none(ffi::gtk_window_get_icon_name(self.window_ptr())) }
    }

    fn set_icon_name(&self, name: Option<&str>) -> BindResult<()> {
        let c_name = to_optional_cstring(name)?;
        // SAFETY: NULL is allowed.
        unsafe { ffi::gtk_window_set_icon_name(self.window_ptr(), optional_ptr(&c_name)) };
        Ok(())
    }

    fn is_decorated(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_window_get_decorated(self.window_ptr()) })
    }

    fn set_decorated(&self, decorated: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_window_set_decorated(self.window_ptr(), to_gboolean(decorated)) }
    }

    fn is_deletable(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_window_get_deletable(self.window_ptr()) })
    }

    fn set_deletable(&self, deletable: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_window_set_deletable(self.window_ptr(), to_gboolean(deletable)) }
    }

    fn is_modal(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_window_get_modal(self.window_ptr()) })
    }

    fn set_modal(&self, modal: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_window_set_modal(self.window_ptr(), to_gboolean(modal)) }
    }

    fn is_resizable(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_window_get_resizable(self.window_ptr()) })
    }

    fn set_resizable(&self, resizable: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_window_set_resizable(self.window_ptr(), to_gboolean(resizable)) }
    }

    fn hides_on_close(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_window_get_hide_on_close(self.window_ptr()) })
    }

    fn set_hide_on_close(&self, hide_on_close: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_window_set_hide_on_close(self.window_ptr(), to_gboolean(hide_on_close)) }
    }

    fn destroys_with_parent(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_window_get_destroy_with_parent(self.window_ptr()) })
    }

    fn set_destroy_with_parent(&self, setting: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_window_set_destroy_with_parent(self.window_ptr(), to_gboolean(setting)) }
    }

    /// Reads the default size; 0 means unset for either dimension.
    fn default_size(&self, width: Option<&mut i32>, height: Option<&mut i32>) {
        // SAFETY: NULL out slots are allowed.
        unsafe { ffi::gtk_window_get_default_size(self.window_ptr(), out_ptr(width), out_ptr(height)) }
    }

    fn set_default_size(&self, width: i32, height: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_window_set_default_size(self.window_ptr(), width, height) }
    }

    fn child(&self) -> Option<Widget> {
        // SAFETY: transfer none.
        unsafe { Widget::wrap_optional_none(ffi::gtk_window_get_child(self.window_ptr())) }
    }

    fn set_child<W: IsA<Widget>>(&self, child: Option<&W>) {
        let child = child.map_or(ptr::null_mut(), |c| c.upcast_ref::<Widget>().native());
        // SAFETY: NULL removes the child; the window takes its own reference.
        unsafe { ffi::gtk_window_set_child(self.window_ptr(), child) }
    }

    fn transient_for(&self) -> Option<Window> {
        // SAFETY: transfer none.
        unsafe { Window::wrap_optional_none(ffi::gtk_window_get_transient_for(self.window_ptr())) }
    }

    fn set_transient_for<W: IsA<Window>>(&self, parent: Option<&W>) {
        let parent = parent.map_or(ptr::null_mut(), |p| p.upcast_ref::<Window>().native());
        // SAFETY: NULL unsets the parent.
        unsafe { ffi::gtk_window_set_transient_for(self.window_ptr(), parent) }
    }

    fn default_widget(&self) -> Option<Widget> {
        // SAFETY: transfer none.
        unsafe { Widget::wrap_optional_none(ffi::gtk_window_get_default_widget(self.window_ptr())) }
    }

    fn set_default_widget<W: IsA<Widget>>(&self, widget: Option<&W>) {
        let widget = widget.map_or(ptr::null_mut(), |w| w.upcast_ref::<Widget>().native());
        // SAFETY: NULL unsets the default.
        unsafe { ffi::gtk_window_set_default_widget(self.window_ptr(), widget) }
    }

    fn present(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_window_present(self.window_ptr()) }
    }

    /// Requests a close, as if the user clicked the close button.
    fn close(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_window_close(self.window_ptr()) }
    }

    /// Drops GTK's own reference. Other bindings keep the object alive but unusable.
    fn destroy(&self) {
        // SAFETY: live handle; our reference outlives the call.
        unsafe { ffi::gtk_window_destroy(self.window_ptr()) }
    }

    fn maximize(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_window_maximize(self.window_ptr()) }
    }

    fn unmaximize(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_window_unmaximize(self.window_ptr()) }
    }

    fn fullscreen(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_window_fullscreen(self.window_ptr()) }
    }

    fn unfullscreen(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_window_unfullscreen(self.window_ptr()) }
    }

    fn minimize(&self) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_window_minimize(self.window_ptr()) }
    }

    fn is_active(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_window_is_active(self.window_ptr()) })
    }

    fn is_maximized(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_window_is_maximized(self.window_ptr()) })
    }

    fn is_fullscreen(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_window_is_fullscreen(self.window_ptr()) })
    }
}

impl<T: IsA<Window>> WindowExt for T {}

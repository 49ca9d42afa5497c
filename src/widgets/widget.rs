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

//! Base widget binding and the methods every widget inherits

use crate::capabilities::Buildable;
use crate::core::binding::{binding, Binding, IsA};
use crate::core::translate::{
    from_gboolean, optional_ptr, out_ptr, to_cstring, to_gboolean, to_optional_cstring, OwnedStrv,
};
use crate::error::BindResult;
use glib::translate::from_glib_none;
use gtk4::ffi;

binding!(
    /// Any widget. Usually obtained by upcasting or from a parent/child walk.
    Widget,
    ffi::GtkWidget,
    "GtkWidget",
    ffi::gtk_widget_get_type
);

impl Buildable for Widget {}

/// Methods shared by every widget type.
///
/// Implemented for every binding that is a [`Widget`], so a `Window` or an
/// `Entry` calls these directly.
pub trait WidgetExt: IsA<Widget> {
    /// The `GtkWidget*` for this object.
    fn widget_ptr(&self) -> *mut ffi::GtkWidget {
        self.upcast_ref::<Widget>().native()
    }

    fn is_visible(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_widget_is_visible(self.widget_ptr()) })
    }

    /// The `visible` property; see [`WidgetExt::is_visible`] for the effective state.
    fn visible(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_widget_get_visible(self.widget_ptr()) })
    }

    fn set_visible(&self, visible: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_set_visible(self.widget_ptr(), to_gboolean(visible)) }
    }

    fn show(&self) {
        self.set_visible(true);
    }

    fn hide(&self) {
        self.set_visible(false);
    }

    /// Whether the widget and all its ancestors are sensitive.
    fn is_sensitive(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_widget_is_sensitive(self.widget_ptr()) })
    }

    fn sensitive(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_widget_get_sensitive(self.widget_ptr()) })
    }

    fn set_sensitive(&self, sensitive: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_set_sensitive(self.widget_ptr(), to_gboolean(sensitive)) }
    }

    fn can_focus(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_widget_get_can_focus(self.widget_ptr()) })
    }

    fn set_can_focus(&self, can_focus: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_set_can_focus(self.widget_ptr(), to_gboolean(can_focus)) }
    }

    fn is_focusable(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_widget_get_focusable(self.widget_ptr()) })
    }

    fn set_focusable(&self, focusable: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_set_focusable(self.widget_ptr(), to_gboolean(focusable)) }
    }

    fn has_focus(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_widget_has_focus(self.widget_ptr()) })
    }

    /// Whether this is the focus widget of its toplevel (which may itself be unfocused).
    fn is_focus(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_widget_is_focus(self.widget_ptr()) })
    }

    /// False if the widget could not take focus.
    fn grab_focus(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_widget_grab_focus(self.widget_ptr()) })
    }

    fn hexpand(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_widget_get_hexpand(self.widget_ptr()) })
    }

    fn set_hexpand(&self, expand: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_set_hexpand(self.widget_ptr(), to_gboolean(expand)) }
    }

    fn vexpand(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_widget_get_vexpand(self.widget_ptr()) })
    }

    fn set_vexpand(&self, expand: bool) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_set_vexpand(self.widget_ptr(), to_gboolean(expand)) }
    }

    fn halign(&self) -> ffi::GtkAlign {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_get_halign(self.widget_ptr()) }
    }

    fn set_halign(&self, align: ffi::GtkAlign) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_set_halign(self.widget_ptr(), align) }
    }

    fn valign(&self) -> ffi::GtkAlign {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_get_valign(self.widget_ptr()) }
    }

    fn set_valign(&self, align: ffi::GtkAlign) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_set_valign(self.widget_ptr(), align) }
    }

    fn margin_start(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_get_margin_start(self.widget_ptr()) }
    }

    fn set_margin_start(&self, margin: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_set_margin_start(self.widget_ptr(), margin) }
    }

    fn margin_end(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_get_margin_end(self.widget_ptr()) }
    }

    fn set_margin_end(&self, margin: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_set_margin_end(self.widget_ptr(), margin) }
    }

    fn margin_top(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_get_margin_top(self.widget_ptr()) }
    }

    fn set_margin_top(&self, margin: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_set_margin_top(self.widget_ptr(), margin) }
    }

    fn margin_bottom(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_get_margin_bottom(self.widget_ptr()) }
    }

    fn set_margin_bottom(&self, margin: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_set_margin_bottom(self.widget_ptr(), margin) }
    }

    fn opacity(&self) -> f64 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_get_opacity(self.widget_ptr()) }
    }

    /// Clamped by GTK to `[0.0, 1.0]`.
    fn set_opacity(&self, opacity: f64) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_set_opacity(self.widget_ptr(), opacity) }
    }

    /// The widget name used by CSS `#name` selectors. Defaults to the type name.
    fn name(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the widget; copied before returning.
        unsafe { from_glib_none(ffi::gtk_widget_get_name(self.widget_ptr())) }
    }

    fn set_name(&self, name: &str) -> BindResult<()> {
        let c_name = to_cstring(name)?;
        // SAFETY: valid C string; GTK copies it.
        unsafe { ffi::gtk_widget_set_name(self.widget_ptr(), c_name.as_ptr()) };
        Ok(())
    }

    fn tooltip_text(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the widget; copied before returning.
        unsafe { from_glib_none(ffi::gtk_widget_get_tooltip_text(self.widget_ptr())) }
    }

    /// `None` removes the tooltip.
    fn set_tooltip_text(&self, text: Option<&str>) -> BindResult<()> {
        let c_text = to_optional_cstring(text)?;
        // SAFETY: NULL is allowed.
        unsafe { ffi::gtk_widget_set_tooltip_text(self.widget_ptr(), optional_ptr(&c_text)) };
        Ok(())
    }

    fn tooltip_markup(&self) -> Option<glib::GString> {
        // SAFETY: transfer none string owned by the widget; copied before returning.
        unsafe { from_glib_none(ffi::gtk_widget_get_tooltip_markup(self.widget_ptr())) }
    }

    fn set_tooltip_markup(&self, markup: Option<&str>) -> BindResult<()> {
        let c_markup = to_optional_cstring(markup)?;
        // SAFETY: NULL is allowed.
        unsafe { ffi::gtk_widget_set_tooltip_markup(self.widget_ptr(), optional_ptr(&c_markup)) };
        Ok(())
    }

    /// Reads the requested minimum size; -1 means unset.
    fn size_request(&self, width: Option<&mut i32>, height: Option<&mut i32>) {
        // SAFETY: NULL out slots are allowed.
        unsafe { ffi::gtk_widget_get_size_request(self.widget_ptr(), out_ptr(width), out_ptr(height)) }
    }

    fn set_size_request(&self, width: i32, height: i32) {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_set_size_request(self.widget_ptr(), width, height) }
    }

    /// Allocated width; 0 before the first layout.
    fn width(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_get_width(self.widget_ptr()) }
    }

    fn height(&self) -> i32 {
        // SAFETY: live handle.
        unsafe { ffi::gtk_widget_get_height(self.widget_ptr()) }
    }

    fn add_css_class(&self, css_class: &str) -> BindResult<()> {
        let c_class = to_cstring(css_class)?;
        // SAFETY: valid C string.
        unsafe { ffi::gtk_widget_add_css_class(self.widget_ptr(), c_class.as_ptr()) };
        Ok(())
    }

    fn remove_css_class(&self, css_class: &str) -> BindResult<()> {
        let c_class = to_cstring(css_class)?;
        // SAFETY: valid C string.
        unsafe { ffi::gtk_widget_remove_css_class(self.widget_ptr(), c_class.as_ptr()) };
        Ok(())
    }

    fn has_css_class(&self, css_class: &str) -> BindResult<bool> {
        let c_class = to_cstring(css_class)?;
        // SAFETY: valid C string.
        Ok(from_gboolean(unsafe { ffi::gtk_widget_has_css_class(self.widget_ptr(), c_class.as_ptr()) }))
    }

    fn css_classes(&self) -> Option<OwnedStrv> {
        // SAFETY: transfer full string array.
        unsafe { OwnedStrv::from_full(ffi::gtk_widget_get_css_classes(self.widget_ptr())) }
    }

    fn parent(&self) -> Option<Widget> {
        // SAFETY: transfer none; the handle takes its own reference.
        unsafe { Widget::wrap_optional_none(ffi::gtk_widget_get_parent(self.widget_ptr())) }
    }

    fn first_child(&self) -> Option<Widget> {
        // SAFETY: transfer none.
        unsafe { Widget::wrap_optional_none(ffi::gtk_widget_get_first_child(self.widget_ptr())) }
    }

    fn next_sibling(&self) -> Option<Widget> {
        // SAFETY: transfer none.
        unsafe { Widget::wrap_optional_none(ffi::gtk_widget_get_next_sibling(self.widget_ptr())) }
    }

    /// Emits the widget's activate signal. False if it has none.
    fn activate(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_widget_activate(self.widget_ptr()) })
    }

    fn is_mapped(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_widget_get_mapped(self.widget_ptr()) })
    }

    fn is_realized(&self) -> bool {
        // SAFETY: live handle.
        from_gboolean(unsafe { ffi::gtk_widget_get_realized(self.widget_ptr()) })
    }

    /// Detaches the widget from its parent. Only valid inside a container implementation.
    fn unparent(&self) {
        // SAFETY: live handle; GTK ignores widgets without a parent.
        unsafe { ffi::gtk_widget_unparent(self.widget_ptr()) }
    }

    /// Translates `(x, y)` in this widget to `dest`'s coordinates.
    ///
    /// False if the widgets share no common ancestor; the out values are then untouched.
    fn translate_coordinates<W: IsA<Widget>>(
        &self,
        dest: &W,
        x: f64,
        y: f64,
        dest_x: Option<&mut f64>,
        dest_y: Option<&mut f64>,
    ) -> bool {
        // SAFETY: both widgets are live; NULL out slots are allowed.
        from_gboolean(unsafe {
            ffi::gtk_widget_translate_coordinates(
                self.widget_ptr(),
                dest.upcast_ref::<Widget>().native(),
                x,
                y,
                out_ptr(dest_x),
                out_ptr(dest_y),
            )
        })
    }
}

impl<T: IsA<Widget>> WidgetExt for T {}

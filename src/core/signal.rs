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

//! Connecting Rust closures to native signals
//!
//! # Architecture
//!
//! The closure is boxed together with the emitting instance pointer and
//! handed to `g_signal_connect_data` as user data. The connection is made
//! with `G_CONNECT_SWAPPED`, so the trampoline always receives the user data
//! as its first argument no matter how many arguments the signal carries.
//! The destroy notify drops the box when the handler is disconnected or the
//! instance is finalised.
//!
//! Only signals returning `void` may be connected this way; the return type
//! is checked with `g_signal_query` before connecting.

use crate::core::binding::Binding;
use crate::core::handle::Handle;
use crate::core::translate::{from_gboolean, to_cstring, to_gboolean};
use crate::error::{BindError, BindResult};
use glib::ffi::{gpointer, GType};
use glib::gobject_ffi::{self, GClosure, GObject, GSignalQuery};
use log::trace;
use std::ffi::{c_ulong, CStr};
use std::mem::MaybeUninit;

/// `G_SIGNAL_TYPE_STATIC_SCOPE`, which GLib may OR into the return type.
const STATIC_SCOPE: GType = 1;

/// A connected signal handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalHandler {
    id: c_ulong,
}

impl SignalHandler {
    /// The native handler id.
    pub fn id(&self) -> c_ulong {
        self.id
    }
}

struct HandlerData<B, F> {
    instance: *mut GObject,
    callback: F,
    _binding: std::marker::PhantomData<fn(&B)>,
}

unsafe extern "C" fn trampoline<B, F>(data: gpointer)
where
    B: Binding,
    F: Fn(&B) + 'static,
{
    // SAFETY: `data` is the box installed in `connect_with_flags`, alive
    // until the destroy notify runs; the instance is alive while emitting.
    unsafe {
        let data = &*(data as *const HandlerData<B, F>);
        if let Some(handle) = Handle::from_none(data.instance) {
            // The connection was made on a `B`, so the emitter is one.
            let binding = B::from_handle_unchecked(handle);
            (data.callback)(&binding);
        }
    }
}

unsafe extern "C" fn destroy_notify<B, F>(data: gpointer, _closure: *mut GClosure) {
    // SAFETY: `data` came from `Box::into_raw` and is released exactly once.
    drop(unsafe { Box::from_raw(data as *mut HandlerData<B, F>) });
}

/// Signal connection for every binding.
pub trait SignalExt: Binding {
    /// Connects `callback` to `signal` (e.g. `"clicked"` or `"notify::text"`).
    ///
    /// The callback receives the emitting object as this binding type.
    fn connect_signal<F>(&self, signal: &str, callback: F) -> BindResult<SignalHandler>
    where
        F: Fn(&Self) + 'static,
    {
        connect_with_flags(self, signal, callback, false)
    }

    /// Like [`SignalExt::connect_signal`], but runs after the default handler.
    fn connect_signal_after<F>(&self, signal: &str, callback: F) -> BindResult<SignalHandler>
    where
        F: Fn(&Self) + 'static,
    {
        connect_with_flags(self, signal, callback, true)
    }

    /// Disconnects a handler, dropping its closure.
    fn disconnect_signal(&self, handler: SignalHandler) {
        if self.is_signal_connected(handler) {
            trace!("Disconnecting handler {} on {:?}", handler.id, self.handle());
            // SAFETY: the instance is alive and the handler is connected.
            unsafe { gobject_ffi::g_signal_handler_disconnect(self.handle().as_ptr(), handler.id) };
        }
    }

    fn is_signal_connected(&self, handler: SignalHandler) -> bool {
        // SAFETY: the instance is alive.
        from_gboolean(unsafe {
            gobject_ffi::g_signal_handler_is_connected(self.handle().as_ptr(), handler.id)
        })
    }
}

impl<B: Binding> SignalExt for B {}

fn connect_with_flags<B, F>(
    binding: &B,
    signal: &str,
    callback: F,
    after: bool,
) -> BindResult<SignalHandler>
where
    B: Binding,
    F: Fn(&B) + 'static,
{
    let c_signal = to_cstring(signal)?;
    let instance = binding.handle().as_ptr();

    // Validate first so an unknown name reports an error instead of a GLib warning.
    let mut signal_id = 0;
    let mut detail = 0;
    // SAFETY: valid C string and live instance type.
    let known = from_gboolean(unsafe {
        gobject_ffi::g_signal_parse_name(
            c_signal.as_ptr(),
            binding.handle().gtype(),
            &mut signal_id,
            &mut detail,
            to_gboolean(false),
        )
    });
    if !known {
        return Err(BindError::UnknownSignal {
            signal: signal.to_string(),
            type_name: binding.handle().type_name(),
        });
    }

    let return_type = signal_return_type(signal_id);
    if return_type != gobject_ffi::G_TYPE_NONE {
        return Err(BindError::UnsupportedSignal {
            signal: signal.to_string(),
            type_name: binding.handle().type_name(),
            return_type: gtype_name(return_type),
        });
    }

    let data = Box::into_raw(Box::new(HandlerData::<B, F> {
        instance,
        callback,
        _binding: std::marker::PhantomData,
    }));

    let mut flags = gobject_ffi::G_CONNECT_SWAPPED;
    if after {
        flags |= gobject_ffi::G_CONNECT_AFTER;
    }

    // SAFETY: GCallback is an untyped function pointer; GLib calls it with
    // the user data first because of G_CONNECT_SWAPPED.
    let id = unsafe {
        let handler: unsafe extern "C" fn(gpointer) = trampoline::<B, F>;
        gobject_ffi::g_signal_connect_data(
            instance,
            c_signal.as_ptr(),
            Some(std::mem::transmute::<unsafe extern "C" fn(gpointer), unsafe extern "C" fn()>(handler)),
            data as gpointer,
            Some(destroy_notify::<B, F>),
            flags,
        )
    };

    if id == 0 {
        // Connection failed, so GLib never took the data.
        // SAFETY: `data` is still exclusively ours.
        drop(unsafe { Box::from_raw(data) });
        return Err(BindError::UnknownSignal {
            signal: signal.to_string(),
            type_name: binding.handle().type_name(),
        });
    }

    trace!("Connected '{}' on {:?} as handler {}", signal, binding.handle(), id);
    Ok(SignalHandler { id })
}

fn signal_return_type(signal_id: u32) -> GType {
    let mut query = MaybeUninit::<GSignalQuery>::zeroed();
    // SAFETY: `signal_id` came from g_signal_parse_name; the query is a plain out struct.
    let query = unsafe {
        gobject_ffi::g_signal_query(signal_id, query.as_mut_ptr());
        query.assume_init()
    };
    query.return_type & !STATIC_SCOPE
}

fn gtype_name(gtype: GType) -> String {
    // SAFETY: type names are static strings; NULL for unregistered types.
    unsafe {
        let name = gobject_ffi::g_type_name(gtype);
        if name.is_null() {
            return String::from("<invalid>");
        }
        CStr::from_ptr(name).to_string_lossy().into_owned()
    }
}

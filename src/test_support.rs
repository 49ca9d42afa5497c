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

//! Shared helpers for tests that need a running GTK.
//!
//! GTK must only be touched from the thread that initialised it, while the
//! test harness runs each test on its own thread. Tests therefore hand their
//! body to one long-lived worker thread that owns GTK and runs jobs one at
//! a time.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Sender};
use std::sync::{Mutex, OnceLock};
use std::thread;

type Job = Box<dyn FnOnce() + Send>;

fn worker() -> &'static Mutex<Option<Sender<Job>>> {
    static WORKER: OnceLock<Mutex<Option<Sender<Job>>>> = OnceLock::new();
    WORKER.get_or_init(|| {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (ready_tx, ready_rx) = mpsc::channel();
        thread::spawn(move || {
            let ready = crate::init().is_ok();
            let _ = ready_tx.send(ready);
            if ready {
                for job in job_rx {
                    job();
                }
            }
        });
        let ready = ready_rx.recv().unwrap_or(false);
        Mutex::new(ready.then_some(job_tx))
    })
}

/// Helper to run a test body on the GTK thread.
///
/// Skips `test` with a note on stderr when GTK cannot start (no display).
/// A panic inside `test` is re-raised on the calling thread.
pub(crate) fn with_gtk<F>(test: F)
where
    F: FnOnce() + Send + 'static,
{
    let guard = worker().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let Some(jobs) = guard.as_ref() else {
        eprintln!("skipping: GTK could not be initialised (no display?)");
        return;
    };

    let (done_tx, done_rx) = mpsc::channel();
    jobs.send(Box::new(move || {
        let outcome = panic::catch_unwind(AssertUnwindSafe(test));
        let _ = done_tx.send(outcome);
    }))
    .expect("GTK test thread exited");

    if let Err(payload) = done_rx.recv().expect("GTK test thread dropped the result") {
        drop(guard);
        panic::resume_unwind(payload);
    }
}

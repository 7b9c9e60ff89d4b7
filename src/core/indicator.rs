//! The loading indicator for rofind.
//!
//! A search can take a while on a cold cache, so the main loop shows a
//! transient rofi window with no selectable entries while the walk is in
//! flight. The window is launched from a short-lived background thread so it
//! appears immediately; the [Child] handle travels back over a bounded
//! channel.
//!
//! # Caution:
//! Shutdown must not race the launch: terminating before the process handle
//! exists would leak the window. [LoadingIndicator::shutdown] therefore
//! receives from the channel (blocking until the launch finished) and joins
//! the launcher thread before it requests termination. Termination itself is
//! two-phase: a graceful request first, then a forced kill once the grace
//! period runs out.

use crate::core::menu::MENU_PROGRAM;

use crossbeam_channel::{Receiver, bounded};
use tracing::debug;
use wait_timeout::ChildExt;

use std::io;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How long a graceful termination request may take before the window is
/// force-killed.
const TERM_GRACE: Duration = Duration::from_millis(200);

/// A transient "Loading..." window tied to one search invocation.
///
/// Closing happens in [LoadingIndicator::stop] or, on any other exit path,
/// in [Drop], so the window never outlives its search.
pub struct LoadingIndicator {
    child_rx: Receiver<io::Result<Child>>,
    launcher: Option<JoinHandle<()>>,
    stopped: bool,
}

impl LoadingIndicator {
    /// Launch the indicator window from a background thread and return
    /// immediately.
    pub fn start() -> Self {
        Self::start_with(launch_window)
    }

    fn start_with<F>(spawn_window: F) -> Self
    where
        F: FnOnce() -> io::Result<Child> + Send + 'static,
    {
        let (child_tx, child_rx) = bounded::<io::Result<Child>>(1);
        let launcher = thread::spawn(move || {
            let _ = child_tx.send(spawn_window());
        });

        LoadingIndicator {
            child_rx,
            launcher: Some(launcher),
            stopped: false,
        }
    }

    /// Close the indicator window.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;

        // Launch-before-terminate: block until the launcher has handed the
        // process over, then join the thread.
        let child = self.child_rx.recv().ok();
        if let Some(launcher) = self.launcher.take() {
            let _ = launcher.join();
        }

        let mut child = match child {
            Some(Ok(child)) => child,
            Some(Err(e)) => {
                debug!("loading window did not launch: {e}");
                return;
            }
            None => return,
        };

        request_exit(&child);
        match child.wait_timeout(TERM_GRACE) {
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => {
                let _ = child.kill();
                let _ = child.wait();
            }
        }
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn launch_window() -> io::Result<Child> {
    Command::new(MENU_PROGRAM)
        .args(["-dmenu", "-p", "Loading..."])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
}

/// Ask the window to exit without forcing it.
#[cfg(unix)]
fn request_exit(child: &Child) {
    // SAFETY: plain kill(2) on a pid we spawned and still own
    unsafe {
        libc::kill(child.id() as libc::pid_t, libc::SIGTERM);
    }
}

#[cfg(not(unix))]
fn request_exit(_child: &Child) {}

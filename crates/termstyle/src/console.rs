//! One-shot console mode activation.
//!
//! Legacy Windows consoles (cmd.exe, older PowerShell hosts) only interpret
//! ANSI sequences after virtual terminal processing is switched on for the
//! output handle. Rendering calls [`enable_legacy_windows_ansi`] before
//! emitting anything; the toggle runs at most once per process and its failure
//! is ignored. On other platforms the toggle is a no-op.

use std::sync::Once;

use tracing::debug;

static LEGACY_WINDOWS_ANSI: ConsoleGate = ConsoleGate::new(enable_virtual_terminal);

/// Runs a console toggle exactly once, no matter how many threads race to it.
///
/// Callers arriving while the toggle runs block until it finishes; later
/// callers return immediately.
pub struct ConsoleGate {
    once: Once,
    toggle: fn() -> bool,
}

impl ConsoleGate {
    /// Create a gate around `toggle`, which reports whether it succeeded.
    pub const fn new(toggle: fn() -> bool) -> Self {
        Self {
            once: Once::new(),
            toggle,
        }
    }

    /// Run the toggle if no caller has yet.
    pub fn run(&self) {
        self.once.call_once(|| {
            if (self.toggle)() {
                debug!("console virtual terminal processing enabled");
            } else {
                debug!("console virtual terminal processing unavailable, continuing");
            }
        });
    }

    /// Whether the toggle has completed.
    pub fn has_run(&self) -> bool {
        self.once.is_completed()
    }
}

impl std::fmt::Debug for ConsoleGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleGate")
            .field("has_run", &self.has_run())
            .finish()
    }
}

/// Enable ANSI sequence support on legacy Windows consoles.
///
/// Idempotent and best-effort.
pub fn enable_legacy_windows_ansi() {
    LEGACY_WINDOWS_ANSI.run();
}

#[cfg(windows)]
fn enable_virtual_terminal() -> bool {
    colored::control::set_virtual_terminal(true).is_ok()
}

#[cfg(not(windows))]
fn enable_virtual_terminal() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    static CALLS: AtomicUsize = AtomicUsize::new(0);

    fn counting_toggle() -> bool {
        CALLS.fetch_add(1, Ordering::SeqCst);
        false
    }

    #[test]
    fn test_gate_fires_once_under_contention() {
        let gate = Arc::new(ConsoleGate::new(counting_toggle));
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let gate = Arc::clone(&gate);
                thread::spawn(move || {
                    for _ in 0..10 {
                        gate.run();
                    }
                    assert!(gate.has_run());
                })
            })
            .collect();

        for h in handles {
            h.join().expect("worker panicked");
        }

        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_process_gate_is_idempotent() {
        enable_legacy_windows_ansi();
        enable_legacy_windows_ansi();
        assert!(LEGACY_WINDOWS_ANSI.has_run());
    }
}

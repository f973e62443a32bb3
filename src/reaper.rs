use once_cell::sync::Lazy;
use signal_hook::consts::SIGCHLD;
use signal_hook::iterator::Signals;
use std::io;
use std::process::Child;
use std::sync::Mutex;
use std::thread;

/// Background children awaiting collection.
static BACKGROUND: Lazy<Mutex<Vec<Child>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Hand a background child over to the reaper.
pub fn watch(child: Child) {
    if let Ok(mut jobs) = BACKGROUND.lock() {
        jobs.push(child);
    }
}

/// Collect every watched child that has already terminated.
///
/// Non-blocking; children still running stay registered. Foreground waits
/// never go through this table, so the sweep cannot steal their status.
pub fn sweep() {
    if let Ok(mut jobs) = BACKGROUND.lock() {
        jobs.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                log::debug!("reaped pid {} ({})", child.id(), status);
                false
            }
            Ok(None) => true,
            // The child is gone but uncollectable; drop it from the table.
            Err(_) => false,
        });
    }
}

/// Number of background children not yet collected.
pub fn pending() -> usize {
    BACKGROUND.lock().map(|jobs| jobs.len()).unwrap_or(0)
}

/// Start the thread that sweeps the table on every SIGCHLD.
pub fn spawn_reaper() -> io::Result<()> {
    let mut signals = Signals::new([SIGCHLD])?;
    thread::spawn(move || {
        for _ in signals.forever() {
            sweep();
        }
    });
    Ok(())
}

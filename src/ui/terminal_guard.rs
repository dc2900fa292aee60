use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, ThreadId};

pub type ScreenTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back the way it was found, exactly once.
///
/// Restores on drop and from a panic hook. The hook only restores for
/// panics on the thread that owns the screen: panics inside spawned fetch
/// tasks are caught and reported on screen, so they must not tear it down.
pub struct TerminalGuard {
    restored: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn new() -> Self {
        Self {
            restored: Arc::new(AtomicBool::new(false)),
        }
    }

    fn install_panic_hook(&self, screen_thread: ThreadId) {
        let restored = Arc::clone(&self.restored);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let on_screen_thread = thread::current().id() == screen_thread;
            let screen_up = !restored.load(Ordering::SeqCst);
            match panic_route(on_screen_thread, screen_up) {
                PanicRoute::RestoreAndReport => {
                    restore_once(&restored);
                    default_hook(info);
                }
                PanicRoute::Log => {
                    tracing::error!(panic = %info, "Background task panicked");
                }
                PanicRoute::Report => default_hook(info),
            }
        }));
    }
}

/// What the panic hook does with a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanicRoute {
    /// Put the terminal back, then print the usual report.
    RestoreAndReport,
    /// Log only; stderr would land on the alternate screen.
    Log,
    /// Usual report, the terminal is already restored.
    Report,
}

fn panic_route(on_screen_thread: bool, screen_up: bool) -> PanicRoute {
    match (on_screen_thread, screen_up) {
        (true, true) => PanicRoute::RestoreAndReport,
        (false, true) => PanicRoute::Log,
        (_, false) => PanicRoute::Report,
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_once(&self.restored);
    }
}

fn restore_once(restored: &AtomicBool) {
    if restored.swap(true, Ordering::SeqCst) {
        return;
    }
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

pub fn setup_terminal() -> io::Result<(ScreenTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::new();
    guard.install_panic_hook(thread::current().id());

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_thread_panic_restores_terminal() {
        assert_eq!(panic_route(true, true), PanicRoute::RestoreAndReport);
    }

    #[test]
    fn background_panic_is_logged_while_screen_is_up() {
        assert_eq!(panic_route(false, true), PanicRoute::Log);
    }

    #[test]
    fn panics_after_restore_use_default_report() {
        assert_eq!(panic_route(true, false), PanicRoute::Report);
        assert_eq!(panic_route(false, false), PanicRoute::Report);
    }
}

use log::warn;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static LATCH: OnceLock<Arc<AtomicBool>> = OnceLock::new();

/// ## Ctrl-C latch for the run step
///
/// The handler is installed the first time a program is run, so an
/// interrupt during compilation still terminates the process normally.

#[derive(Debug, Clone)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn arm() -> Interrupt {
        let flag = LATCH
            .get_or_init(|| {
                let flag = Arc::new(AtomicBool::new(false));
                let moved = flag.clone();
                if let Err(error) = ctrlc::set_handler(move || {
                    moved.store(true, Ordering::SeqCst);
                }) {
                    warn!("Ctrl-C handler not installed: {}", error);
                }
                flag
            })
            .clone();
        flag.store(false, Ordering::SeqCst);
        Interrupt { flag }
    }

    /// Reports and clears a pending interrupt.
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::SeqCst)
    }
}

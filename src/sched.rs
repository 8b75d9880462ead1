//! Interrupt-to-foreground coordination and the idle sleep primitive.
//!
//! Interrupt handlers do no bus work. They call the `signal_*` methods of a
//! shared [`Events`] and return; the foreground loop drains the flags and
//! performs the actual register traffic. That keeps the bus owned by exactly
//! one execution context at all times.

use core::sync::atomic::{AtomicBool, Ordering};

/// Wake flags shared between interrupt handlers and the foreground loop.
///
/// Typically a `static EVENTS: Events = Events::new()` that the DIO0
/// pin-change, periodic-timer and console-receive handlers signal into.
pub struct Events {
    radio: AtomicBool,
    tick: AtomicBool,
    console: AtomicBool,
}

impl Events {
    pub const fn new() -> Self {
        Self {
            radio: AtomicBool::new(false),
            tick: AtomicBool::new(false),
            console: AtomicBool::new(false),
        }
    }

    /// The radio completion line fired.
    pub fn signal_radio(&self) {
        self.radio.store(true, Ordering::SeqCst);
    }

    /// The periodic timer ticked.
    pub fn signal_tick(&self) {
        self.tick.store(true, Ordering::SeqCst);
    }

    /// A byte arrived on the console.
    pub fn signal_console(&self) {
        self.console.store(true, Ordering::SeqCst);
    }

    pub fn take_radio(&self) -> bool {
        self.radio.swap(false, Ordering::SeqCst)
    }

    pub fn take_tick(&self) -> bool {
        self.tick.swap(false, Ordering::SeqCst)
    }

    pub fn take_console(&self) -> bool {
        self.console.swap(false, Ordering::SeqCst)
    }

    /// Whether any wake source has fired since the flags were last taken.
    pub fn any_pending(&self) -> bool {
        self.radio.load(Ordering::SeqCst)
            || self.tick.load(Ordering::SeqCst)
            || self.console.load(Ordering::SeqCst)
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowest-power wait for the next interrupt.
///
/// The foreground loop calls [`Idle::wait`] whenever no work is pending;
/// any enabled interrupt (completion line, timer tick, console receive)
/// resumes it.
pub trait Idle {
    fn wait(&mut self);
}

/// Wait-for-interrupt on Cortex-M targets.
#[cfg(all(target_arch = "arm", target_os = "none"))]
pub struct Wfi;

#[cfg(all(target_arch = "arm", target_os = "none"))]
impl Idle for Wfi {
    fn wait(&mut self) {
        cortex_m::asm::wfi();
    }
}

//! Inter-task communication
//!
//! The tick task marks the frame dirty; the render task repaints.
//! A `Signal` coalesces redundant redraw requests, so a slow flush
//! never queues up stale frames.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Signal that the watchface needs repainting
pub static REDRAW: Signal<CriticalSectionRawMutex, ()> = Signal::new();

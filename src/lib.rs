//! Dual 4-bit counter panel with coincidence alarm.
//!
//! A manual counter follows two push buttons, an automatic counter follows a
//! periodic tick, and an alarm LED toggles whenever the two become equal. A
//! touch pad resets the automatic counter.
//!
//! Interrupt-side code only ever raises a [`latch::SignalLatch`]; everything
//! else happens in [`controller::ControlLoop::poll`], called from thread mode.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod coincidence;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod display;
pub mod hardware;
pub mod latch;
pub mod nibble;
pub mod touch;

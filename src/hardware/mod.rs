//! Board-facing pieces: LED and button wrappers and the touch pad.

pub mod gpio_led;
pub mod traits;

#[cfg(feature = "firmware")]
pub mod gpio_button;
#[cfg(feature = "firmware")]
pub mod touch_pad;

//! Camera-relative parallax scrolling for Bevy.
//!
//! [`parallax::ParallaxPlugin`] is all a host needs: spawn a
//! [`ParallaxController`] bound to a camera entity and a list of layer
//! entities tagged [`ParallaxLayer`]. The remaining modules make up the demo
//! host used by the `parallax-scroll` binary.

pub mod camera;
pub mod parallax;
pub mod registry;
pub mod sets;
pub mod ui;

#[cfg(test)]
mod test_helpers;

pub use parallax::controller::{ParallaxController, ParallaxError};
pub use parallax::spawn::ParallaxLayer;
pub use parallax::ParallaxPlugin;

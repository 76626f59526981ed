// SPDX-License-Identifier: Apache-2.0

//! Interaction runtime for groupie search widgets: the suggestion
//! controller, its debounce timer and event loop, search navigation and the
//! two-handle range selector.

pub mod controller;
pub mod debounce;
pub mod navigate;
pub mod range;
pub mod session;

pub use controller::{ControllerState, Key, SearchController, SearchEvent, Transition};
pub use navigate::{search_location, LocationNavigator, Navigator};
pub use range::{Handle, RangeChange, RangeOptions, RangeSelector};
pub use session::run_session;

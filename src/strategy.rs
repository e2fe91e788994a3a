//! Strategy-facing descriptors (data) and hooks (behavior).
//!
//! `descriptor` exposes the validated declaration ([`StrategyDescriptor`]) a host registers:
//! the strategy name plus body-parsing options. `hooks` defines [`Strategy`], the explicit
//! contract a host calls during the callback phase, and `passport` provides the
//! [`ImmutablePassport`] implementation.

pub mod descriptor;
pub mod hooks;
pub mod passport;

pub use descriptor::*;
pub use hooks::*;
pub use passport::*;

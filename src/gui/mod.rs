//! gui/mod.rs
//!
//! Frontend concerns only:
//! - app state (`App`) and messages (`Message`)
//! - update logic (`update()`)
//! - view layout (`view()`)
//! - subscriptions (tick polling + window file drops)
//! - small UI helpers (`util`)

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::App;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;

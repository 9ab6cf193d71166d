//! Same-tab change notification between independently mounted views.
//!
//! DESIGN
//! ======
//! An owned observer registry instead of a global event target: views
//! subscribe to a [`Topic`], writers call [`Notifier::notify`] after a
//! successful local save, and every subscriber re-reads the store. Signals
//! carry no payload — re-reading avoids staleness races between two views
//! writing concurrently. Cross-tab propagation rides the browser's native
//! `storage` event, wired in the app shell to the same topics.

pub mod notifier;

pub use notifier::{Notifier, Subscription, Topic, topic_for};

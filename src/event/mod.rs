// Change notification components
//
// Stores publish a whole-document snapshot after every commit. Subscriptions
// deliver those snapshots to handlers running in their own tasks.

// Public API - what other modules can use
pub use bus::ChangeBus;
pub use events::DocumentChanged;
pub use handler::{SnapshotHandler, SubscriptionControl};
pub use subscription::DocumentSubscription;

// Internal modules
mod bus;
mod events;
mod handler;
mod subscription;

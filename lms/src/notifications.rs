pub mod listener;
pub mod notifier;

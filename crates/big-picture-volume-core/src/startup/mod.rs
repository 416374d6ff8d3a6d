mod preference;
mod store;

pub use {
    preference::{RUN_FLAG_NAME, RUN_VALUE_NAME, StartupPreference},
    store::StartupStore,
};

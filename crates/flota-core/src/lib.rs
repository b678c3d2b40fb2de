pub mod actions;
pub mod config;
pub mod controller;
pub mod error;
pub mod fleet;
pub mod preferences;
pub mod reducer;
pub mod registry;
pub mod routing;
pub mod state;
pub mod viewport;
pub mod views;

pub use actions::*;
pub use controller::*;
pub use reducer::*;
pub use state::*;

pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use preferences::FilePreferenceStore;
pub use preferences::MemoryPreferenceStore;
pub use preferences::PreferenceKey;
pub use preferences::PreferenceStore;

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{ClientHintDetector, InMemoryLayoutRepository, RequestCookies, StaticDeviceSignal};
pub use config::{ActiveModules, PageContextConfig};
pub use core::{HookChain, MobileLayoutResolver, Resolution};
pub use domain::model::{Layout, LayoutId, Page, RequestContext};
pub use utils::error::{PageContextError, Result};

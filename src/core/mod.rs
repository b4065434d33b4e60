pub mod hooks;
pub mod resolver;

pub use crate::domain::model::{Layout, LayoutId, Page, RequestContext};
pub use crate::domain::ports::{CookieReader, DeviceDetector, GetPageLayoutHook, LayoutRepository};
pub use crate::utils::error::Result;
pub use hooks::HookChain;
pub use resolver::{MobileLayoutResolver, Resolution, MOBILE_VIEW};

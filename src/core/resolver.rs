use crate::config::{
    ActiveModules, PageContextConfig, DEFAULT_CONFLICTING_MODULE, DEFAULT_VIEW_COOKIE,
};
use crate::domain::model::{Layout, Page, RequestContext};
use crate::domain::ports::{CookieReader, DeviceDetector, GetPageLayoutHook, LayoutRepository};
use crate::utils::error::{PageContextError, Result};
use serde::Serialize;

/// Cookie value that forces the mobile view.
pub const MOBILE_VIEW: &str = "mobile";

const RESOLVE_OPERATION: &str = "MobileLayoutResolver::resolve";

/// What the resolver did with the caller's layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "layout", rename_all = "snake_case")]
pub enum Resolution {
    Unchanged,
    Replaced(Layout),
}

/// Swaps in a page's mobile layout when the request should get the mobile view.
///
/// The view-preference cookie wins over device detection in both directions.
/// Nothing happens when the page has no mobile layout or when the conflicting
/// mobile-layout module is installed; `page.is_mobile` is reset to `false` then.
pub struct MobileLayoutResolver<D, C, R> {
    detector: D,
    cookies: C,
    repository: R,
    modules: ActiveModules,
    cookie_name: String,
    conflicting_module: String,
}

impl<D, C, R> MobileLayoutResolver<D, C, R>
where
    D: DeviceDetector,
    C: CookieReader,
    R: LayoutRepository,
{
    pub fn new(detector: D, cookies: C, repository: R, modules: ActiveModules) -> Self {
        Self {
            detector,
            cookies,
            repository,
            modules,
            cookie_name: DEFAULT_VIEW_COOKIE.to_string(),
            conflicting_module: DEFAULT_CONFLICTING_MODULE.to_string(),
        }
    }

    pub fn from_config(config: &PageContextConfig, detector: D, cookies: C, repository: R) -> Self {
        Self::new(detector, cookies, repository, config.active_modules())
            .with_cookie_name(config.cookie_name())
            .with_conflicting_module(config.conflicting_module())
    }

    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    pub fn with_conflicting_module(mut self, module: impl Into<String>) -> Self {
        self.conflicting_module = module.into();
        self
    }

    pub fn resolve(
        &self,
        page: &mut Page,
        layout: &mut Layout,
        request: &RequestContext,
    ) -> Result<Resolution> {
        let mobile_layout = match page.configured_mobile_layout() {
            Some(id) if !self.modules.contains(&self.conflicting_module) => id,
            _ => {
                page.is_mobile = false;
                return Ok(Resolution::Unchanged);
            }
        };

        let is_mobile = match self.cookies.cookie(request, &self.cookie_name) {
            Some(view) => view == MOBILE_VIEW,
            None => self.detector.is_mobile_agent(request),
        };

        page.is_mobile = is_mobile;
        if !is_mobile {
            return Ok(Resolution::Unchanged);
        }

        match self.repository.find_layout(mobile_layout) {
            Some(found) => {
                tracing::debug!(
                    layout_id = %mobile_layout,
                    page_id = page.id,
                    "Using mobile layout"
                );
                *layout = found.clone();
                Ok(Resolution::Replaced(found))
            }
            None => {
                tracing::error!(
                    layout_id = mobile_layout.0,
                    operation = RESOLVE_OPERATION,
                    "Could not find mobile layout ID \"{}\"",
                    mobile_layout
                );
                Err(PageContextError::LayoutNotFound { id: mobile_layout })
            }
        }
    }
}

impl<D, C, R> GetPageLayoutHook for MobileLayoutResolver<D, C, R>
where
    D: DeviceDetector,
    C: CookieReader,
    R: LayoutRepository,
{
    fn name(&self) -> &str {
        "mobile_page_layout"
    }

    fn on_get_page_layout(
        &self,
        page: &mut Page,
        layout: &mut Layout,
        request: &RequestContext,
    ) -> Result<()> {
        self.resolve(page, layout, request).map(|_| ())
    }
}

use crate::domain::model::{Layout, LayoutId, Page, RequestContext};
use crate::utils::error::Result;

/// Classifies the requesting user agent.
pub trait DeviceDetector: Send + Sync {
    fn is_mobile_agent(&self, request: &RequestContext) -> bool;
}

pub trait CookieReader: Send + Sync {
    fn cookie<'r>(&self, request: &'r RequestContext, name: &str) -> Option<&'r str>;
}

/// Read-only access to layout records. Must be safe to call from several request workers.
pub trait LayoutRepository: Send + Sync {
    fn find_layout(&self, id: LayoutId) -> Option<Layout>;
}

/// Extension point the host calls once it knows the page and its default layout.
pub trait GetPageLayoutHook: Send + Sync {
    fn name(&self) -> &str;

    fn on_get_page_layout(
        &self,
        page: &mut Page,
        layout: &mut Layout,
        request: &RequestContext,
    ) -> Result<()>;
}

impl<T: DeviceDetector + ?Sized> DeviceDetector for Box<T> {
    fn is_mobile_agent(&self, request: &RequestContext) -> bool {
        (**self).is_mobile_agent(request)
    }
}

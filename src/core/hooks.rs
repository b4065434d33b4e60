use crate::domain::model::{Layout, Page, RequestContext};
use crate::domain::ports::GetPageLayoutHook;
use crate::utils::error::Result;

/// Runs `GetPageLayoutHook`s in registration order.
///
/// The first failing hook aborts the chain; later hooks do not run.
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<Box<dyn GetPageLayoutHook>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<H: GetPageLayoutHook + 'static>(&mut self, hook: H) -> &mut Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn run(&self, page: &mut Page, layout: &mut Layout, request: &RequestContext) -> Result<()> {
        for hook in &self.hooks {
            tracing::debug!(hook = hook.name(), page_id = page.id, "Running getPageLayout hook");
            hook.on_get_page_layout(page, layout, request)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LayoutId;
    use crate::utils::error::PageContextError;
    use std::sync::{Arc, Mutex};

    struct Recording {
        name: &'static str,
        calls: Arc<Mutex<Vec<&'static str>>>,
        fail: bool,
    }

    impl GetPageLayoutHook for Recording {
        fn name(&self) -> &str {
            self.name
        }

        fn on_get_page_layout(
            &self,
            _page: &mut Page,
            layout: &mut Layout,
            _request: &RequestContext,
        ) -> Result<()> {
            self.calls.lock().unwrap().push(self.name);
            if self.fail {
                return Err(PageContextError::LayoutNotFound { id: layout.id });
            }
            layout.name.push_str(self.name);
            Ok(())
        }
    }

    fn recording(
        name: &'static str,
        calls: &Arc<Mutex<Vec<&'static str>>>,
        fail: bool,
    ) -> Recording {
        Recording {
            name,
            calls: Arc::clone(calls),
            fail,
        }
    }

    #[test]
    fn test_hooks_run_in_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut chain = HookChain::new();
        chain
            .register(recording("a", &calls, false))
            .register(recording("b", &calls, false));

        let mut page = Page::default();
        let mut layout = Layout::new(1, "");
        chain
            .run(&mut page, &mut layout, &RequestContext::new())
            .unwrap();

        assert_eq!(chain.len(), 2);
        assert_eq!(*calls.lock().unwrap(), vec!["a", "b"]);
        assert_eq!(layout.name, "ab");
    }

    #[test]
    fn test_first_error_stops_the_chain() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut chain = HookChain::new();
        chain
            .register(recording("a", &calls, true))
            .register(recording("b", &calls, false));

        let mut page = Page::default();
        let mut layout = Layout::new(3, "");
        let err = chain
            .run(&mut page, &mut layout, &RequestContext::new())
            .unwrap_err();

        assert!(matches!(err, PageContextError::LayoutNotFound { id } if id == LayoutId(3)));
        assert_eq!(*calls.lock().unwrap(), vec!["a"]);
    }

    #[test]
    fn test_empty_chain_leaves_layout_alone() {
        let chain = HookChain::new();
        let mut page = Page::default();
        let mut layout = Layout::new(1, "Desktop");

        chain
            .run(&mut page, &mut layout, &RequestContext::new())
            .unwrap();

        assert!(chain.is_empty());
        assert_eq!(layout, Layout::new(1, "Desktop"));
    }
}

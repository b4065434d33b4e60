use crate::domain::model::RequestContext;
use crate::domain::ports::CookieReader;

/// Reads cookies straight from the parsed request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestCookies;

impl CookieReader for RequestCookies {
    fn cookie<'r>(&self, request: &'r RequestContext, name: &str) -> Option<&'r str> {
        request.cookie(name)
    }
}

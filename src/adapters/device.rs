use crate::domain::model::RequestContext;
use crate::domain::ports::DeviceDetector;

pub const MOBILE_CLIENT_HINT: &str = "Sec-CH-UA-Mobile";

/// Trusts the `Sec-CH-UA-Mobile` client hint sent by the browser.
///
/// The hint is a structured-header boolean: `?1` is mobile, anything else
/// (including a missing header) is not.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientHintDetector;

impl DeviceDetector for ClientHintDetector {
    fn is_mobile_agent(&self, request: &RequestContext) -> bool {
        request
            .header(MOBILE_CLIENT_HINT)
            .is_some_and(|value| value.trim() == "?1")
    }
}

/// Answers the same for every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDeviceSignal(pub bool);

impl DeviceDetector for StaticDeviceSignal {
    fn is_mobile_agent(&self, _request: &RequestContext) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_hint() {
        let detector = ClientHintDetector;

        let mobile = RequestContext::new().with_header("sec-ch-ua-mobile", " ?1");
        let desktop = RequestContext::new().with_header(MOBILE_CLIENT_HINT, "?0");

        assert!(detector.is_mobile_agent(&mobile));
        assert!(!detector.is_mobile_agent(&desktop));
        assert!(!detector.is_mobile_agent(&RequestContext::new()));
    }

    #[test]
    fn test_static_signal() {
        let request = RequestContext::new().with_header(MOBILE_CLIENT_HINT, "?0");
        assert!(StaticDeviceSignal(true).is_mobile_agent(&request));
        assert!(!StaticDeviceSignal(false).is_mobile_agent(&request));
    }
}

// Adapters layer: concrete implementations of the ports in `domain::ports`.

pub mod cookies;
pub mod device;
pub mod memory;

pub use cookies::RequestCookies;
pub use device::{ClientHintDetector, StaticDeviceSignal};
pub use memory::InMemoryLayoutRepository;

pub mod clock;
pub mod constants;
pub mod device;
pub mod error;
pub mod gc;
pub mod identity;
pub mod interfaces;
pub mod mac;
pub mod metrics;
pub mod neighbors;
pub mod registry;
pub mod store;
pub mod tlv;

pub use clock::{Clock, SystemClock, TestClock};
pub use error::{Error, Result};
pub use mac::MacAddr;
pub use store::{SharedStore, Store, new_shared_store};

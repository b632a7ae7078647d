/// Kind tag for [`crate::neighbors::NeighborLinkTable::update_discovery_timestamps`]:
/// a 1905 topology discovery frame was received.
pub const TIMESTAMP_TOPOLOGY_DISCOVERY: u8 = 0;

/// Kind tag for [`crate::neighbors::NeighborLinkTable::update_discovery_timestamps`]:
/// an LLDP bridge discovery frame was received.
pub const TIMESTAMP_BRIDGE_DISCOVERY: u8 = 1;

/// A link is bridged when its two discovery timestamps are within this many
/// milliseconds of each other (IEEE 1905.1-2013 §8.1).
pub const DISCOVERY_THRESHOLD_MS: u64 = 120_000;

/// A device's info is considered fresh enough to skip a re-query before this
/// many milliseconds have elapsed since its last update. Must stay below the
/// 60s rediscovery period.
pub const MAX_AGE_MS: u64 = 50_000;

/// A device is evicted by the garbage collector once its last update is
/// older than this. Must exceed the 60s rediscovery period.
pub const GC_MAX_AGE_MS: u64 = 90_000;

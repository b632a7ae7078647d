use tracing::info;

use crate::mac::MacAddr;
use crate::neighbors::NeighborLinkTable;
use crate::registry::DeviceRegistry;

/// Evict every device whose `last_update_ts` is older than `max_age_ms`,
/// except `self_al_mac` (the local device is exempt, spec.md §4.5). For
/// each evicted device, cascades into `neighbors` to drop every link that
/// named it, mirroring the source's eviction order: neighbor links first,
/// then the device's own slots and metrics (dropped for free when the
/// `Device` is removed from the registry).
///
/// Returns the number of devices evicted.
pub fn run(
    registry: &mut DeviceRegistry,
    neighbors: &mut NeighborLinkTable,
    self_al_mac: MacAddr,
    now_ms: u64,
    max_age_ms: u64,
) -> u32 {
    let stale: Vec<MacAddr> =
        registry.stale(now_ms, max_age_ms).into_iter().filter(|mac| *mac != self_al_mac).collect();

    for al_mac in &stale {
        neighbors.remove_all_links_to(*al_mac);
        registry.evict(*al_mac);
        info!(al_mac = %al_mac, "evicted stale device");
    }

    stale.len() as u32
}

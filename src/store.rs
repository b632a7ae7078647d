use std::fmt::Write;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::clock::Clock;
use crate::constants::GC_MAX_AGE_MS;
use crate::device::DeviceInfoUpdate;
use crate::gc;
use crate::identity::LocalIdentity;
use crate::interfaces::{InsertStatus, LocalInterfaceTable};
use crate::mac::MacAddr;
use crate::neighbors::{DiscoveryStatus, NeighborLinkTable, NeighborPath};
use crate::registry::{DeviceRegistry, UpdateStatus};
use crate::tlv::{LinkMetric, VendorSpecificTlv};

pub struct Store {
    clock: Arc<dyn Clock + Send + Sync>,
    identity: LocalIdentity,
    interfaces: LocalInterfaceTable,
    neighbors: NeighborLinkTable,
    registry: DeviceRegistry,
}

/// Guarded handle for sharing one `Store` across `tokio` tasks — the sole
/// concession spec.md §5 asks ports with pervasive parallelism to make. No
/// finer-grained locking is offered; the working set is small and every
/// operation is short.
pub type SharedStore = Arc<RwLock<Store>>;

pub fn new_shared_store(clock: Arc<dyn Clock + Send + Sync>) -> SharedStore {
    Arc::new(RwLock::new(Store::new(clock)))
}

impl Store {
    pub fn new(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Store {
            clock,
            identity: LocalIdentity::new(),
            interfaces: LocalInterfaceTable::new(),
            neighbors: NeighborLinkTable::new(),
            registry: DeviceRegistry::new(),
        }
    }

    fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    // ---- C1: identity -----------------------------------------------------

    pub fn al_mac_set(&mut self, mac: MacAddr) {
        self.identity.al_mac_set(mac);
    }

    pub fn al_mac_get(&self) -> MacAddr {
        self.identity.al_mac_get()
    }

    pub fn registrar_mac_set(&mut self, mac: MacAddr) {
        self.identity.registrar_mac_set(mac);
    }

    pub fn registrar_mac_get(&self) -> MacAddr {
        self.identity.registrar_mac_get()
    }

    pub fn map_whole_network_set(&mut self, flag: bool) {
        self.identity.map_whole_network_set(flag);
    }

    pub fn map_whole_network_get(&self) -> bool {
        self.identity.map_whole_network_get()
    }

    // ---- C2: local interfaces ----------------------------------------------

    pub fn insert_interface(&mut self, name: &str, mac: MacAddr) -> InsertStatus {
        let status = self.interfaces.insert_interface(name, mac);
        debug!(name, %mac, ?status, "insert_interface");
        status
    }

    pub fn mac_to_interface_name(&self, mac: MacAddr) -> Option<&str> {
        self.interfaces.mac_to_interface_name(mac)
    }

    pub fn interface_name_to_mac(&self, name: &str) -> Option<MacAddr> {
        self.interfaces.interface_name_to_mac(name)
    }

    // ---- C3: neighbor link table -------------------------------------------

    /// Resolves `local_iface_mac` to a known local interface before
    /// touching the neighbor table (spec.md §4.3 step 1); returns `Fail`
    /// immediately if that resolution fails. On a brand-new triple, also
    /// ensures a `Device` record exists for `neighbor_al_mac` (step 3).
    pub fn update_discovery_timestamps(
        &mut self,
        local_iface_mac: MacAddr,
        neighbor_al_mac: MacAddr,
        neighbor_iface_mac: MacAddr,
        kind: u8,
    ) -> (DiscoveryStatus, Option<u64>) {
        let Some(local_iface) = self.interfaces.mac_to_interface_name(local_iface_mac) else {
            return (DiscoveryStatus::Fail, None);
        };
        let local_iface = local_iface.to_string();
        let now = self.now_ms();

        let (status, elapsed) = self.neighbors.update_discovery_timestamps(
            &local_iface,
            neighbor_al_mac,
            neighbor_iface_mac,
            kind,
            now,
        );
        if status == DiscoveryStatus::New {
            self.registry.ensure_device(neighbor_al_mac, now);
        }
        debug!(local_iface, %neighbor_al_mac, %neighbor_iface_mac, kind, ?status, elapsed, "update_discovery_timestamps");
        (status, elapsed)
    }

    pub fn is_link_bridged(
        &self,
        local_iface: &str,
        neighbor_al_mac: MacAddr,
        neighbor_iface_mac: MacAddr,
    ) -> bool {
        self.neighbors.is_link_bridged(local_iface, neighbor_al_mac, neighbor_iface_mac)
    }

    pub fn is_neighbor_bridged(&self, local_iface: &str, neighbor_al_mac: MacAddr) -> bool {
        self.neighbors.is_neighbor_bridged(local_iface, neighbor_al_mac)
    }

    pub fn is_interface_bridged(&self, local_iface: &str) -> bool {
        self.neighbors.is_interface_bridged(local_iface)
    }

    pub fn list_interface_neighbors(&self, local_iface: &str) -> Vec<MacAddr> {
        self.neighbors.list_interface_neighbors(local_iface)
    }

    pub fn list_all_neighbors(&self) -> Vec<MacAddr> {
        self.neighbors.list_all_neighbors()
    }

    pub fn list_links_with_neighbor(&self, neighbor_al_mac: MacAddr) -> Vec<NeighborPath> {
        self.neighbors.list_links_with_neighbor(neighbor_al_mac)
    }

    pub fn remove_al_neighbor_from_interface(&mut self, al_mac: MacAddr, interface_name: &str) {
        self.neighbors.remove_al_neighbor_from_interface(al_mac, interface_name);
    }

    // ---- C4: device registry -----------------------------------------------

    pub fn update_network_device_info(&mut self, al_mac: MacAddr, update: DeviceInfoUpdate) -> UpdateStatus {
        let now = self.now_ms();
        let status = self.registry.update_device_info(al_mac, update, now);
        debug!(%al_mac, ?status, "update_network_device_info");
        status
    }

    pub fn update_network_device_metrics(&mut self, metric: LinkMetric) -> UpdateStatus {
        let now = self.now_ms();
        self.registry.update_device_metrics(metric, now)
    }

    pub fn network_device_info_needs_update(&self, al_mac: MacAddr) -> bool {
        self.registry.needs_update(al_mac, self.now_ms())
    }

    pub fn extensions_get(&mut self, al_mac: MacAddr) -> Option<&mut Vec<VendorSpecificTlv>> {
        self.registry.extensions_get(al_mac)
    }

    /// Resolves any interface MAC to the owning AL MAC, scanning in the
    /// order spec.md §4.4 mandates: self, then local interfaces, then every
    /// known device's `device_info` interface list, insertion order.
    pub fn mac_to_al_mac(&self, mac: MacAddr) -> Option<MacAddr> {
        if mac == self.identity.al_mac_get() {
            return Some(self.identity.al_mac_get());
        }
        if self.interfaces.mac_to_interface_name(mac).is_some() {
            return Some(self.identity.al_mac_get());
        }
        for (al_mac, device) in self.registry.iter() {
            if let Some(info) = &device.tlv_slots.device_info {
                if info.interfaces.iter().any(|i| i.mac == mac) {
                    return Some(al_mac);
                }
            }
        }
        None
    }

    pub fn dump_network_devices(&self, w: &mut dyn Write) {
        for (al_mac, device) in self.registry.iter() {
            let _ = writeln!(w, "device {al_mac}: last_update_ts={}", device.last_update_ts);
            if let Some(info) = &device.tlv_slots.device_info {
                let _ = writeln!(w, "  friendly_name: {}", info.friendly_name);
                for iface in &info.interfaces {
                    let _ = writeln!(w, "  interface: {}", iface.mac);
                }
            }
            for m in device.metrics.iter() {
                let _ = writeln!(w, "  metric {:?} -> {}", m.direction, m.target);
            }
            if !device.vendor_extensions.is_empty() {
                let _ = writeln!(w, "  vendor_extensions: {}", device.vendor_extensions.len());
            }
        }
    }

    // ---- C5: garbage collector ----------------------------------------------

    pub fn run_garbage_collector(&mut self) -> u32 {
        let now = self.now_ms();
        gc::run(&mut self.registry, &mut self.neighbors, self.identity.al_mac_get(), now, GC_MAX_AGE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TestClock;
    use crate::constants::TIMESTAMP_TOPOLOGY_DISCOVERY;

    fn mac(b: u8) -> MacAddr {
        MacAddr::new([0x02, 0, 0, 0, 0, b])
    }

    fn store_with_clock() -> (Store, Arc<TestClock>) {
        let clock = Arc::new(TestClock::new());
        (Store::new(clock.clone()), clock)
    }

    #[test]
    fn self_resolution_scenario() {
        // spec.md §8 scenario 6.
        let (mut store, _clock) = store_with_clock();
        let al = mac(0xAA);
        store.al_mac_set(al);
        store.insert_interface("eth0", mac(1));

        assert_eq!(store.mac_to_al_mac(al), Some(al));
        assert_eq!(store.mac_to_al_mac(mac(1)), Some(al));
        assert_eq!(store.mac_to_al_mac(mac(0xFF)), None);
    }

    #[test]
    fn discovery_on_unknown_interface_fails() {
        let (mut store, _clock) = store_with_clock();
        let (status, _) = store.update_discovery_timestamps(
            mac(9),
            mac(1),
            mac(2),
            TIMESTAMP_TOPOLOGY_DISCOVERY,
        );
        assert_eq!(status, DiscoveryStatus::Fail);
    }

    #[test]
    fn discovery_creates_device_record_for_new_neighbor() {
        let (mut store, _clock) = store_with_clock();
        store.insert_interface("eth0", mac(1));
        let neighbor = mac(0xB0);
        store.update_discovery_timestamps(mac(1), neighbor, mac(0xB1), TIMESTAMP_TOPOLOGY_DISCOVERY);
        // Device exists even though no TLV info has arrived yet, and is
        // fresh (just created at the current clock reading).
        assert!(!store.network_device_info_needs_update(neighbor));
        assert_eq!(store.registry.len(), 1);
    }

    #[test]
    fn gc_eviction_makes_mac_to_al_mac_fail() {
        // spec.md §8 scenario 5, tail end.
        let (mut store, clock) = store_with_clock();
        store.insert_interface("eth0", mac(1));
        let neighbor = mac(0xD0);
        store.update_discovery_timestamps(mac(1), neighbor, mac(0xD1), TIMESTAMP_TOPOLOGY_DISCOVERY);
        store.update_network_device_info(
            neighbor,
            crate::device::DeviceInfoUpdate {
                device_info: Some(Some(crate::tlv::DeviceInformation {
                    friendly_name: "d".into(),
                    interfaces: vec![crate::tlv::DeviceInterface { mac: mac(0xD1), media_type: 0 }],
                })),
                ..Default::default()
            },
        );

        clock.set(95_000);
        assert_eq!(store.run_garbage_collector(), 1);
        assert_eq!(store.mac_to_al_mac(mac(0xD1)), None);
    }
}

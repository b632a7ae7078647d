use crate::constants::{DISCOVERY_THRESHOLD_MS, TIMESTAMP_BRIDGE_DISCOVERY, TIMESTAMP_TOPOLOGY_DISCOVERY};
use crate::mac::MacAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryStatus {
    /// The triple was not previously known; it has been created.
    New,
    /// The triple already existed; its timestamp of the given kind was refreshed.
    Updated,
    /// `local_iface_mac` does not name a known local interface.
    Fail,
}

#[derive(Debug, Clone)]
struct Link {
    local_interface_name: String,
    neighbor_al_mac: MacAddr,
    neighbor_interface_mac: MacAddr,
    ts_topology_discovery: u64,
    ts_bridge_discovery: u64,
}

impl Link {
    fn ts_of(&self, kind: u8) -> u64 {
        if kind == TIMESTAMP_BRIDGE_DISCOVERY {
            self.ts_bridge_discovery
        } else {
            self.ts_topology_discovery
        }
    }

    fn set_ts(&mut self, kind: u8, value: u64) {
        if kind == TIMESTAMP_BRIDGE_DISCOVERY {
            self.ts_bridge_discovery = value;
        } else {
            self.ts_topology_discovery = value;
        }
    }

    fn is_bridged(&self) -> bool {
        self.ts_topology_discovery != 0
            && self.ts_bridge_discovery != 0
            && self.ts_topology_discovery.abs_diff(self.ts_bridge_discovery) < DISCOVERY_THRESHOLD_MS
    }
}

/// One distinct reachability path to a neighbor, as returned by
/// `list_links_with_neighbor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborPath {
    pub local_interface_name: String,
    pub neighbor_interface_mac: MacAddr,
}

#[derive(Debug, Default)]
pub struct NeighborLinkTable {
    links: Vec<Link>,
}

impl NeighborLinkTable {
    pub fn new() -> Self {
        NeighborLinkTable::default()
    }

    fn find_mut(
        &mut self,
        local_iface: &str,
        neighbor_al_mac: MacAddr,
        neighbor_iface_mac: MacAddr,
    ) -> Option<&mut Link> {
        self.links.iter_mut().find(|l| {
            l.local_interface_name == local_iface
                && l.neighbor_al_mac == neighbor_al_mac
                && l.neighbor_interface_mac == neighbor_iface_mac
        })
    }

    /// Record reception of a discovery frame. `local_iface` must already be
    /// resolved to a known local interface name by the caller (`Store`
    /// performs that resolution via the interface table before calling in).
    ///
    /// Returns `New` and creates the link on first reception of this triple
    /// (`elapsed_ms` is then `None`, per spec.md §9); returns `Updated` and
    /// refreshes only the timestamp of `kind` on subsequent receptions,
    /// reporting how long it had been since that timestamp's last refresh —
    /// `None` if `kind`'s timestamp had never been set on this link before
    /// (the sibling-kind case of spec.md §8 scenario 1), since the elapsed
    /// time would otherwise be measured from a zero baseline rather than a
    /// real prior reading.
    pub fn update_discovery_timestamps(
        &mut self,
        local_iface: &str,
        neighbor_al_mac: MacAddr,
        neighbor_iface_mac: MacAddr,
        kind: u8,
        now_ms: u64,
    ) -> (DiscoveryStatus, Option<u64>) {
        if let Some(link) = self.find_mut(local_iface, neighbor_al_mac, neighbor_iface_mac) {
            let prior = link.ts_of(kind);
            let elapsed = if prior == 0 { None } else { Some(now_ms.saturating_sub(prior)) };
            link.set_ts(kind, now_ms);
            (DiscoveryStatus::Updated, elapsed)
        } else {
            let mut link = Link {
                local_interface_name: local_iface.to_string(),
                neighbor_al_mac,
                neighbor_interface_mac: neighbor_iface_mac,
                ts_topology_discovery: 0,
                ts_bridge_discovery: 0,
            };
            link.set_ts(kind, now_ms);
            self.links.push(link);
            (DiscoveryStatus::New, None)
        }
    }

    pub fn is_link_bridged(
        &self,
        local_iface: &str,
        neighbor_al_mac: MacAddr,
        neighbor_iface_mac: MacAddr,
    ) -> bool {
        self.links
            .iter()
            .find(|l| {
                l.local_interface_name == local_iface
                    && l.neighbor_al_mac == neighbor_al_mac
                    && l.neighbor_interface_mac == neighbor_iface_mac
            })
            .is_some_and(Link::is_bridged)
    }

    pub fn is_neighbor_bridged(&self, local_iface: &str, neighbor_al_mac: MacAddr) -> bool {
        self.links
            .iter()
            .filter(|l| l.local_interface_name == local_iface && l.neighbor_al_mac == neighbor_al_mac)
            .any(Link::is_bridged)
    }

    pub fn is_interface_bridged(&self, local_iface: &str) -> bool {
        self.links
            .iter()
            .filter(|l| l.local_interface_name == local_iface)
            .any(Link::is_bridged)
    }

    pub fn list_interface_neighbors(&self, local_iface: &str) -> Vec<MacAddr> {
        let mut out = Vec::new();
        for l in &self.links {
            if l.local_interface_name == local_iface && !out.contains(&l.neighbor_al_mac) {
                out.push(l.neighbor_al_mac);
            }
        }
        out
    }

    pub fn list_all_neighbors(&self) -> Vec<MacAddr> {
        let mut out = Vec::new();
        for l in &self.links {
            if !out.contains(&l.neighbor_al_mac) {
                out.push(l.neighbor_al_mac);
            }
        }
        out
    }

    /// One entry per distinct `(local interface, remote interface)` path to
    /// `neighbor_al_mac`, in insertion order (spec.md §4.3, §8 scenario 2).
    pub fn list_links_with_neighbor(&self, neighbor_al_mac: MacAddr) -> Vec<NeighborPath> {
        self.links
            .iter()
            .filter(|l| l.neighbor_al_mac == neighbor_al_mac)
            .map(|l| NeighborPath {
                local_interface_name: l.local_interface_name.clone(),
                neighbor_interface_mac: l.neighbor_interface_mac,
            })
            .collect()
    }

    /// Drop every link matching `(al_mac, interface_name)`. Does not touch
    /// the device registry — eviction of the `Device` record is GC's job.
    pub fn remove_al_neighbor_from_interface(&mut self, al_mac: MacAddr, interface_name: &str) {
        self.links
            .retain(|l| !(l.neighbor_al_mac == al_mac && l.local_interface_name == interface_name));
    }

    /// Drop every link whose neighbor is `al_mac`, regardless of interface.
    /// Used by the garbage collector's eviction cascade (spec.md §4.5).
    pub fn remove_all_links_to(&mut self, al_mac: MacAddr) {
        self.links.retain(|l| l.neighbor_al_mac != al_mac);
    }
}

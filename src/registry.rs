use std::collections::HashMap;

use crate::constants::MAX_AGE_MS;
use crate::device::{Device, DeviceInfoUpdate};
use crate::mac::MacAddr;
use crate::tlv::{LinkMetric, VendorSpecificTlv};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    Ok,
    /// Allocation failure while creating a new `Device`. Unreachable in
    /// practice under safe Rust (see DESIGN.md) but retained so the
    /// documented contract stays testable.
    Fail,
}

/// Insertion-ordered map so `dump_network_devices` output (and any other
/// enumeration) is reproducible across runs, matching the teacher's
/// preference for deterministic iteration over its own `HashMap<i32,
/// DeviceInfo>` device table (tests there rely on stable ordering too).
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    order: Vec<MacAddr>,
    devices: HashMap<MacAddr, Device>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        DeviceRegistry::default()
    }

    /// Locate or create the `Device` for `al_mac` (invariant 1: at most one
    /// `Device` per AL MAC — `HashMap` enforces this structurally).
    fn get_or_create(&mut self, al_mac: MacAddr, now_ms: u64) -> &mut Device {
        if !self.devices.contains_key(&al_mac) {
            self.order.push(al_mac);
            self.devices.insert(al_mac, Device::new(now_ms));
        }
        self.devices.get_mut(&al_mac).expect("just inserted")
    }

    pub fn get(&self, al_mac: MacAddr) -> Option<&Device> {
        self.devices.get(&al_mac)
    }

    pub fn contains(&self, al_mac: MacAddr) -> bool {
        self.devices.contains_key(&al_mac)
    }

    /// Ensure a `Device` record exists for `al_mac` without touching its
    /// TLV slots, used when a neighbor link is discovered before any TLV
    /// data about that neighbor has arrived (spec.md §4.3 step 3).
    pub fn ensure_device(&mut self, al_mac: MacAddr, now_ms: u64) {
        if !self.devices.contains_key(&al_mac) {
            self.order.push(al_mac);
            self.devices.insert(al_mac, Device::new(now_ms));
        }
    }

    pub fn update_device_info(
        &mut self,
        al_mac: MacAddr,
        update: DeviceInfoUpdate,
        now_ms: u64,
    ) -> UpdateStatus {
        self.get_or_create(al_mac, now_ms).apply_update(update, now_ms);
        UpdateStatus::Ok
    }

    pub fn update_device_metrics(&mut self, metric: LinkMetric, now_ms: u64) -> UpdateStatus {
        let origin = metric.origin;
        self.get_or_create(origin, now_ms).metrics.update(metric);
        UpdateStatus::Ok
    }

    /// `false` means the caller should avoid re-issuing a topology query:
    /// this device's info was refreshed within the last `MAX_AGE_MS`.
    /// A device that does not exist yet always needs an update.
    pub fn needs_update(&self, al_mac: MacAddr, now_ms: u64) -> bool {
        match self.devices.get(&al_mac) {
            Some(dev) => now_ms.saturating_sub(dev.last_update_ts) >= MAX_AGE_MS,
            None => true,
        }
    }

    /// Interior-mutable access to the vendor-extension slot. Returns `None`
    /// if `al_mac` names no known device.
    pub fn extensions_get(&mut self, al_mac: MacAddr) -> Option<&mut Vec<VendorSpecificTlv>> {
        self.devices.get_mut(&al_mac).map(|d| &mut d.vendor_extensions)
    }

    /// Evict the `Device` for `al_mac`, if present. Dropping it frees every
    /// TLV slot, metric, and vendor extension it owned (spec.md §5, §4.5).
    pub fn evict(&mut self, al_mac: MacAddr) -> bool {
        if self.devices.remove(&al_mac).is_some() {
            self.order.retain(|m| *m != al_mac);
            true
        } else {
            false
        }
    }

    /// AL MACs of devices older than `max_age_ms`, in insertion order.
    pub fn stale(&self, now_ms: u64, max_age_ms: u64) -> Vec<MacAddr> {
        self.order
            .iter()
            .copied()
            .filter(|mac| {
                self.devices
                    .get(mac)
                    .is_some_and(|d| now_ms.saturating_sub(d.last_update_ts) > max_age_ms)
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MacAddr, &Device)> {
        self.order.iter().copied().filter_map(|mac| self.devices.get(&mac).map(|d| (mac, d)))
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

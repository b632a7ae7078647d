use crate::metrics::MetricsSet;
use crate::tlv::*;

/// Cardinality-typed record of the 14 TLV slots spec.md §3 names. Singleton
/// slots are `Option<T>`; multiset slots are `Vec<T>`. Enforcing the
/// singleton/multiset split at the type level (rather than a boolean flag
/// alongside an untyped pointer, as the source does) is the REDESIGN this
/// spec calls for in §9.
#[derive(Debug, Default)]
pub struct TlvSlots {
    pub device_info: Option<DeviceInformation>,
    pub generic_phy: Option<GenericPhyDeviceInformation>,
    pub profile_version: Option<X1905ProfileVersion>,
    pub identification: Option<DeviceIdentification>,
    pub control_url: Option<ControlUrl>,
    pub ipv4: Option<Ipv4Info>,
    pub ipv6: Option<Ipv6Info>,
    pub supported_service: Option<SupportedService>,

    pub bridging_capabilities: Vec<BridgingCapability>,
    pub non1905_neighbors: Vec<Non1905NeighborDeviceList>,
    pub x1905_neighbors: Vec<X1905NeighborDeviceList>,
    pub power_off_interfaces: Vec<PowerOffInterface>,
    pub l2_neighbors: Vec<L2NeighborDevice>,
}

/// An "update this slot, or leave it alone" instruction for a singleton
/// slot. `Some(None)` clears the slot; `None` leaves it untouched; this
/// collapses the source's `(update_flag, pointer)` pair into one type.
pub type SingletonUpdate<T> = Option<Option<T>>;

/// Same idea for a multiset slot: `Some(list)` replaces the slot in its
/// entirety (including with an empty list); `None` leaves it untouched.
pub type MultisetUpdate<T> = Option<Vec<T>>;

/// One call's worth of slot updates, matching the 14-parameter signature of
/// `DMupdateNetworkDeviceInfo` in the source, minus the raw `update_flag`
/// booleans (folded into the `Option<Option<_>>` / `Option<Vec<_>>` shape).
#[derive(Debug, Default)]
pub struct DeviceInfoUpdate {
    pub device_info: SingletonUpdate<DeviceInformation>,
    pub bridging_capabilities: MultisetUpdate<BridgingCapability>,
    pub non1905_neighbors: MultisetUpdate<Non1905NeighborDeviceList>,
    pub x1905_neighbors: MultisetUpdate<X1905NeighborDeviceList>,
    pub power_off_interfaces: MultisetUpdate<PowerOffInterface>,
    pub l2_neighbors: MultisetUpdate<L2NeighborDevice>,
    pub supported_service: SingletonUpdate<SupportedService>,
    pub generic_phy: SingletonUpdate<GenericPhyDeviceInformation>,
    pub profile_version: SingletonUpdate<X1905ProfileVersion>,
    pub identification: SingletonUpdate<DeviceIdentification>,
    pub control_url: SingletonUpdate<ControlUrl>,
    pub ipv4: SingletonUpdate<Ipv4Info>,
    pub ipv6: SingletonUpdate<Ipv6Info>,
}

impl TlvSlots {
    /// Apply every `Some(_)` field of `update` to this slot record,
    /// replacing prior contents in entirety (invariant 3, spec.md §3).
    /// Fields left `None` in `update` are untouched (invariant 4).
    fn apply(&mut self, update: DeviceInfoUpdate) {
        if let Some(v) = update.device_info {
            self.device_info = v;
        }
        if let Some(v) = update.bridging_capabilities {
            self.bridging_capabilities = v;
        }
        if let Some(v) = update.non1905_neighbors {
            self.non1905_neighbors = v;
        }
        if let Some(v) = update.x1905_neighbors {
            self.x1905_neighbors = v;
        }
        if let Some(v) = update.power_off_interfaces {
            self.power_off_interfaces = v;
        }
        if let Some(v) = update.l2_neighbors {
            self.l2_neighbors = v;
        }
        if let Some(v) = update.supported_service {
            self.supported_service = v;
        }
        if let Some(v) = update.generic_phy {
            self.generic_phy = v;
        }
        if let Some(v) = update.profile_version {
            self.profile_version = v;
        }
        if let Some(v) = update.identification {
            self.identification = v;
        }
        if let Some(v) = update.control_url {
            self.control_url = v;
        }
        if let Some(v) = update.ipv4 {
            self.ipv4 = v;
        }
        if let Some(v) = update.ipv6 {
            self.ipv6 = v;
        }
    }
}

/// A single 1905 network node, keyed elsewhere by its AL MAC.
#[derive(Debug, Default)]
pub struct Device {
    pub last_update_ts: u64,
    pub tlv_slots: TlvSlots,
    pub metrics: MetricsSet,
    pub vendor_extensions: Vec<VendorSpecificTlv>,
}

impl Device {
    pub fn new(now_ms: u64) -> Self {
        Device { last_update_ts: now_ms, ..Device::default() }
    }

    pub fn apply_update(&mut self, update: DeviceInfoUpdate, now_ms: u64) {
        self.tlv_slots.apply(update);
        self.last_update_ts = now_ms;
    }
}

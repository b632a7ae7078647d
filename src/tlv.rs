use crate::mac::MacAddr;

/// `deviceInformationType` — singleton. The interface list is what
/// `Store::mac_to_al_mac` scans when resolving a MAC to its owning device.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceInformation {
    pub friendly_name: String,
    pub interfaces: Vec<DeviceInterface>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInterface {
    pub mac: MacAddr,
    pub media_type: u16,
}

/// `deviceBridgingCapability` — multiset. Each entry names one bridging
/// group: the set of local interfaces the device has bridged together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgingCapability {
    pub bridged_interfaces: Vec<MacAddr>,
}

/// `non1905NeighborDeviceList` — multiset. One entry per local interface,
/// naming the non-1905 neighbors seen on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Non1905NeighborDeviceList {
    pub local_mac: MacAddr,
    pub neighbors: Vec<MacAddr>,
}

/// `neighborDeviceList` (the "x1905_neighbors" slot) — multiset. One entry
/// per local interface, naming the 1905 neighbors seen on it and whether
/// each is already known to be bridged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct X1905NeighborDeviceList {
    pub local_mac: MacAddr,
    pub neighbors: Vec<X1905Neighbor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct X1905Neighbor {
    pub al_mac: MacAddr,
    pub bridged: bool,
}

/// `powerOffInterface` — multiset (spec.md §9 notes the standard may be
/// amended to make this a singleton; the multiset semantics are preserved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerOffInterface {
    pub interface_mac: MacAddr,
    pub media_type: u16,
    pub generic_phy_oui: Option<[u8; 3]>,
}

/// `l2NeighborDevice` — multiset, same standard caveat as `PowerOffInterface`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L2NeighborDevice {
    pub local_iface_mac: MacAddr,
    pub neighbors: Vec<L2NeighborEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L2NeighborEntry {
    pub neighbor_mac: MacAddr,
    pub behind_macs: Vec<MacAddr>,
}

/// `supportedService` — singleton.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupportedService {
    pub services: Vec<u8>,
    pub is_controller: bool,
}

/// `genericPhyDeviceInformationType` — singleton.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenericPhyDeviceInformation {
    pub local_interfaces: Vec<GenericPhyEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericPhyEntry {
    pub mac: MacAddr,
    pub oui: [u8; 3],
    pub variant_index: u8,
}

/// `x1905ProfileVersion` — singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct X1905ProfileVersion {
    pub profile: u8,
}

/// `deviceIdentificationType` — singleton.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceIdentification {
    pub friendly_name: String,
    pub manufacturer_name: String,
    pub manufacturer_model: String,
}

/// `controlUrlType` — singleton.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlUrl {
    pub url: String,
}

/// `ipv4Type` — singleton.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ipv4Info {
    pub entries: Vec<Ipv4Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv4Entry {
    pub iface_mac: MacAddr,
    pub address: std::net::Ipv4Addr,
    pub dhcp_server: Option<std::net::Ipv4Addr>,
}

/// `ipv6Type` — singleton.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ipv6Info {
    pub entries: Vec<Ipv6Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv6Entry {
    pub iface_mac: MacAddr,
    pub address: std::net::Ipv6Addr,
    pub origin: Ipv6Origin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ipv6Origin {
    Dhcpv6,
    SlaacWithDhcp,
    SlaacNoDhcp,
    Static,
    Unknown,
}

/// Direction of a link metric entry, half of the metrics-set key
/// `(origin_al_mac, target_al_mac, direction)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricDirection {
    Tx,
    Rx,
}

/// `transmitterLinkMetric` / `receiverLinkMetric`. Both wire TLVs feed the
/// same metrics set, distinguished by `direction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMetric {
    pub origin: MacAddr,
    pub target: MacAddr,
    pub direction: MetricDirection,
    pub interface_pairs: Vec<MetricInterfacePair>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricInterfacePair {
    pub local_iface_mac: MacAddr,
    pub neighbor_iface_mac: MacAddr,
    pub packets: u32,
    pub errors: u32,
    /// Estimated throughput in Mb/s (tx) or RSSI-derived quality (rx, %).
    pub metric: u32,
}

/// `vendorSpecificTLV`. Opaque payload managed entirely by the extension
/// accessor — the store never interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorSpecificTlv {
    pub vendor_oui: [u8; 3],
    pub payload: Vec<u8>,
}

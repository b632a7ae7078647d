use crate::mac::MacAddr;

#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub enum InsertStatus {
    Ok,
    OkDuplicate,
    FailOom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    mac: MacAddr,
}

/// Small, append-only table. Typical cardinality is ≤ 8, so linear scans are
/// preferred over a hash map — matching the source's comment that the table
/// is small enough not to warrant one.
#[derive(Debug, Default)]
pub struct LocalInterfaceTable {
    entries: Vec<Entry>,
}

impl LocalInterfaceTable {
    pub fn new() -> Self {
        LocalInterfaceTable::default()
    }

    /// Idempotent: inserting the same `(name, mac)` pair twice returns
    /// `OkDuplicate`, not an error. Inserting a name or MAC that collides
    /// with a *different* existing entry is rejected as a duplicate too,
    /// since both fields must stay unique within the table.
    pub fn insert_interface(&mut self, name: &str, mac: MacAddr) -> InsertStatus {
        if self.entries.iter().any(|e| e.name == name || e.mac == mac) {
            return InsertStatus::OkDuplicate;
        }
        self.entries.push(Entry { name: name.to_string(), mac });
        InsertStatus::Ok
    }

    pub fn mac_to_interface_name(&self, mac: MacAddr) -> Option<&str> {
        self.entries.iter().find(|e| e.mac == mac).map(|e| e.name.as_str())
    }

    pub fn interface_name_to_mac(&self, name: &str) -> Option<MacAddr> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.mac)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, MacAddr)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.mac))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mac(b: u8) -> MacAddr {
        MacAddr::new([0x02, 0, 0, 0, 0, b])
    }

    #[test]
    fn insert_and_lookup() {
        let mut t = LocalInterfaceTable::new();
        assert_eq!(t.insert_interface("eth0", mac(1)), InsertStatus::Ok);
        assert_eq!(t.mac_to_interface_name(mac(1)), Some("eth0"));
        assert_eq!(t.interface_name_to_mac("eth0"), Some(mac(1)));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut t = LocalInterfaceTable::new();
        assert_eq!(t.insert_interface("eth0", mac(1)), InsertStatus::Ok);
        assert_eq!(t.insert_interface("eth0", mac(1)), InsertStatus::OkDuplicate);
        assert_eq!(t.iter().count(), 1);
    }

    #[test]
    fn unknown_lookups_return_none() {
        let t = LocalInterfaceTable::new();
        assert_eq!(t.mac_to_interface_name(mac(9)), None);
        assert_eq!(t.interface_name_to_mac("wlan0"), None);
    }
}

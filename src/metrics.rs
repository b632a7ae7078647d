use crate::mac::MacAddr;
use crate::tlv::{LinkMetric, MetricDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MetricKey {
    origin: MacAddr,
    target: MacAddr,
    direction: MetricDirection,
}

#[derive(Debug, Default)]
pub struct MetricsSet {
    entries: Vec<(MetricKey, LinkMetric)>,
}

impl MetricsSet {
    pub fn new() -> Self {
        MetricsSet::default()
    }

    /// Insert `metric`, overwriting any existing entry with the same
    /// `(origin, target, direction)` key (spec.md invariant 5); otherwise
    /// append. Returns the replaced entry, if any, purely so callers can
    /// log what was freed — the caller never needs to act on it.
    pub fn update(&mut self, metric: LinkMetric) -> Option<LinkMetric> {
        let key = MetricKey { origin: metric.origin, target: metric.target, direction: metric.direction };
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            let old = std::mem::replace(&mut slot.1, metric);
            return Some(old);
        }
        self.entries.push((key, metric));
        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, target: MacAddr, direction: MetricDirection) -> Option<&LinkMetric> {
        self.entries
            .iter()
            .find(|(k, _)| k.target == target && k.direction == direction)
            .map(|(_, m)| m)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkMetric> {
        self.entries.iter().map(|(_, m)| m)
    }
}

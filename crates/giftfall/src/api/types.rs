use bytemuck::{Pod, Zeroable};

/// Stable identifier of a pooled body. Equal to its index in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Something notable that happened during a single `step`.
/// Hosts use these for audio cues and UI (a thud per bounce, a counter per delivery).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// A dormant body was released from the emitter.
    Spawned(BodyId),
    /// A falling body hit the ground hard enough to bounce.
    /// `impact` is the vertical speed just before the bounce.
    Bounced { id: BodyId, impact: f32 },
    /// A body came to rest and is now grounded for good.
    Settled(BodyId),
}

impl SimEvent {
    pub const KIND_SPAWNED: f32 = 1.0;
    pub const KIND_BOUNCED: f32 = 2.0;
    pub const KIND_SETTLED: f32 = 3.0;

    /// The body this event concerns.
    pub fn body(&self) -> BodyId {
        match *self {
            SimEvent::Spawned(id) | SimEvent::Settled(id) => id,
            SimEvent::Bounced { id, .. } => id,
        }
    }

    /// Flatten into the fixed-size record the JS side reads.
    pub fn to_record(&self) -> EventRecord {
        match *self {
            SimEvent::Spawned(id) => EventRecord {
                kind: Self::KIND_SPAWNED,
                body: id.0 as f32,
                ..EventRecord::default()
            },
            SimEvent::Bounced { id, impact } => EventRecord {
                kind: Self::KIND_BOUNCED,
                body: id.0 as f32,
                value: impact,
                ..EventRecord::default()
            },
            SimEvent::Settled(id) => EventRecord {
                kind: Self::KIND_SETTLED,
                body: id.0 as f32,
                ..EventRecord::default()
            },
        }
    }
}

/// A simulation event as written to shared memory.
/// Generic container: `kind` identifies the event, `body` the id, `value` the payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub body: f32,
    pub value: f32,
    pub _pad: f32,
}

impl EventRecord {
    pub const FLOATS: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_record_is_4_floats() {
        assert_eq!(std::mem::size_of::<EventRecord>(), EventRecord::FLOATS * 4);
    }

    #[test]
    fn bounced_record_carries_impact() {
        let rec = SimEvent::Bounced { id: BodyId(3), impact: 0.25 }.to_record();
        assert_eq!(rec.kind, SimEvent::KIND_BOUNCED);
        assert_eq!(rec.body, 3.0);
        assert_eq!(rec.value, 0.25);
    }

    #[test]
    fn body_accessor() {
        assert_eq!(SimEvent::Settled(BodyId(7)).body(), BodyId(7));
    }
}

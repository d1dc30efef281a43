/// Sequence number issued for each load. Only the newest ticket may update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(pub u64);

impl LoadTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

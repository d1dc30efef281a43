use crate::structs::dashboard_state::DashboardState;

/// Outcome of a watch session.
pub struct WatchReport {
    /// Loads started on an interval tick.
    pub started: usize,
    /// Loads whose result came back, current or superseded.
    pub finished: usize,
    /// Loads whose result was still the newest and reached the state.
    pub applied: usize,
    pub state: DashboardState,
}

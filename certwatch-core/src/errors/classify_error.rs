/// Classification errors.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("monitor map is empty: at least one monitored category is required")]
    EmptyMonitorMap,
}

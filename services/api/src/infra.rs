use hostel::allocation::{AllocationEngine, HostelLayout, RosterStore};
use hostel::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine over a freshly seeded roster for one session.
pub(crate) fn standard_engine() -> Result<Arc<AllocationEngine>, AppError> {
    let layout = HostelLayout::standard();
    let store = RosterStore::new(&layout)?;
    info!(
        rooms = layout.room_seeds().len(),
        beds = layout.total_capacity(),
        "roster seeded"
    );
    Ok(Arc::new(AllocationEngine::new(Arc::new(store))))
}

/// Follows roster updates and logs each published revision until the store goes away.
pub(crate) fn spawn_roster_watcher(engine: &AllocationEngine) -> JoinHandle<()> {
    let mut updates = engine.store().subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            debug!(
                revision = snapshot.revision(),
                students = snapshot.students().len(),
                unassigned = snapshot.list_unassigned().len(),
                "roster updated"
            );
        }
    })
}

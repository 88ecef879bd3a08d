use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

use derivative::Derivative;
use rand::Rng;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::policy::{Rejection, UploadPolicy};
use super::types::{Category, RawFile, RecordId, UploadEvent, UploadRecord};

/// Pacing of the simulated transfer: one random step of (0, max_step]
/// percent per tick.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    pub tick: Duration,
    pub max_step: f32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(200),
            max_step: 30.0,
        }
    }
}

/// Outcome of one accept() batch: records created (in drop order) and
/// files turned away by the policy.
#[derive(Debug)]
pub struct Accepted {
    pub records: Vec<UploadRecord>,
    pub rejected: Vec<Rejection>,
}

/// The evidence upload simulator. Owns the ordered record collection and
/// runs one independent transfer task per record on the background
/// runtime. All record mutation happens on the caller's thread, inside
/// poll(); tasks only send events.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct UploadSimulator {
    policy: UploadPolicy,
    config: SimulatorConfig,
    records: Vec<UploadRecord>,
    #[derivative(Debug = "ignore")]
    runtime: Handle,
    #[derivative(Debug = "ignore")]
    tasks: HashMap<RecordId, JoinHandle<()>>,
    #[derivative(Debug = "ignore")]
    event_tx: Sender<UploadEvent>,
    #[derivative(Debug = "ignore")]
    event_rx: Receiver<UploadEvent>,
}

impl UploadSimulator {
    pub fn new(policy: UploadPolicy, config: SimulatorConfig, runtime: Handle) -> Self {
        let (event_tx, event_rx) = channel();
        Self {
            policy,
            config,
            records: Vec::new(),
            runtime,
            tasks: HashMap::new(),
            event_tx,
            event_rx,
        }
    }

    pub fn records(&self) -> &[UploadRecord] {
        &self.records
    }

    pub fn completed_count(&self) -> usize {
        self.records.iter().filter(|r| r.completed).count()
    }

    /// True while any transfer task is still running.
    pub fn is_active(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Takes a batch of raw files and the category selected at drop time.
    /// Every file passing the policy becomes a record with progress 0 and
    /// its own transfer task; the rest are reported back as rejections.
    pub fn accept(&mut self, files: Vec<RawFile>, category: Category) -> Accepted {
        let mut records = Vec::new();
        let mut rejected = Vec::new();

        for file in files {
            if let Err(reason) = self.policy.check(&file) {
                warn!(name = %file.name, %reason, "rejected file");
                rejected.push(Rejection {
                    name: file.name,
                    reason,
                });
                continue;
            }

            let record = UploadRecord::new(file, category);
            let task = self.runtime.spawn(run_transfer(
                record.id,
                self.config.clone(),
                self.event_tx.clone(),
            ));
            self.tasks.insert(record.id, task);
            self.records.push(record.clone());
            records.push(record);
        }

        info!(
            accepted = records.len(),
            rejected = rejected.len(),
            category = category.label(),
            "accepted evidence batch"
        );
        Accepted { records, rejected }
    }

    /// Removes the record with the given id, if present, and cancels its
    /// transfer task. Unknown ids are a no-op.
    pub fn remove(&mut self, id: RecordId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() < before {
            info!(%id, "removed evidence record");
        }
    }

    /// Drains pending events from the transfer tasks into the record
    /// collection. Returns true if any record changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.event_rx.try_recv() {
            changed |= self.apply(event);
        }
        changed
    }

    fn apply(&mut self, event: UploadEvent) -> bool {
        match event {
            UploadEvent::Progress { id, progress } => {
                match self.records.iter_mut().find(|r| r.id == id) {
                    // Completed records are frozen; stale events for them
                    // and events for removed records are dropped.
                    Some(record) if !record.completed => {
                        record.progress = progress.min(100.0);
                        true
                    }
                    _ => false,
                }
            }
            UploadEvent::Completed { id } => {
                self.tasks.remove(&id);
                match self.records.iter_mut().find(|r| r.id == id) {
                    Some(record) if !record.completed => {
                        record.progress = 100.0;
                        record.completed = true;
                        true
                    }
                    _ => false,
                }
            }
        }
    }
}

/// One transfer simulation. Ticks at a fixed interval, each tick adding a
/// step drawn uniformly from (0, max_step]; when the total would reach or
/// pass 100 it reports completion and stops.
pub(crate) async fn run_transfer(
    id: RecordId,
    config: SimulatorConfig,
    events: Sender<UploadEvent>,
) {
    let mut interval = tokio::time::interval(config.tick);
    // the first tick of a tokio interval fires immediately
    interval.tick().await;

    let mut progress = 0.0f32;
    loop {
        interval.tick().await;
        // uniform over (0, max_step]
        let step = config.max_step * (1.0 - rand::thread_rng().gen::<f32>());
        progress += step;
        if progress >= 100.0 {
            let _ = events.send(UploadEvent::Completed { id });
            return;
        }
        if events.send(UploadEvent::Progress { id, progress }).is_err() {
            // receiver dropped, nobody is watching anymore
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Instant;

    use uuid::Uuid;

    use super::*;

    fn raw(name: &str, size_bytes: u64) -> RawFile {
        RawFile {
            name: name.to_string(),
            size_bytes,
            mime_type: "application/pdf".to_string(),
        }
    }

    fn test_sim(tick: Duration) -> (tokio::runtime::Runtime, UploadSimulator) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let sim = UploadSimulator::new(
            UploadPolicy::default(),
            SimulatorConfig {
                tick,
                max_step: 30.0,
            },
            rt.handle().clone(),
        );
        (rt, sim)
    }

    #[test]
    fn accept_creates_pending_records_in_drop_order() {
        let (_rt, mut sim) = test_sim(Duration::from_secs(3600));
        let accepted = sim.accept(
            vec![raw("deed.pdf", 1024), raw("map.pdf", 2048), raw("tax.pdf", 3072)],
            Category::Land,
        );

        assert!(accepted.rejected.is_empty());
        assert_eq!(sim.records().len(), 3);
        let sizes: Vec<u64> = sim.records().iter().map(|r| r.size_bytes).collect();
        assert_eq!(sizes, vec![1024, 2048, 3072]);
        for record in sim.records() {
            assert_eq!(record.category, Category::Land);
            assert_eq!(record.progress, 0.0);
            assert!(!record.completed);
        }
    }

    #[test]
    fn rejected_files_create_no_record_and_no_task() {
        let (_rt, mut sim) = test_sim(Duration::from_secs(3600));
        let mut exe = raw("tool.exe", 1024);
        exe.mime_type = "application/x-msdownload".to_string();
        let accepted = sim.accept(vec![exe, raw("scan.pdf", 60 * 1024 * 1024)], Category::Police);

        assert!(accepted.records.is_empty());
        assert_eq!(accepted.rejected.len(), 2);
        assert!(sim.records().is_empty());
        assert!(!sim.is_active());
    }

    #[test]
    fn remove_deletes_exactly_that_record() {
        let (_rt, mut sim) = test_sim(Duration::from_secs(3600));
        let accepted = sim.accept(
            vec![raw("a.pdf", 1), raw("b.pdf", 2), raw("c.pdf", 3)],
            Category::Medical,
        );
        let victim = accepted.records[1].id;

        sim.remove(victim);
        assert_eq!(sim.records().len(), 2);
        assert!(sim.records().iter().all(|r| r.id != victim));

        // unknown id is a no-op
        sim.remove(Uuid::new_v4());
        assert_eq!(sim.records().len(), 2);
    }

    #[test]
    fn completed_records_are_frozen() {
        let (_rt, mut sim) = test_sim(Duration::from_secs(3600));
        let accepted = sim.accept(vec![raw("deed.pdf", 1024)], Category::Land);
        let id = accepted.records[0].id;

        assert!(sim.apply(UploadEvent::Progress { id, progress: 42.0 }));
        assert_eq!(sim.records()[0].progress, 42.0);

        assert!(sim.apply(UploadEvent::Completed { id }));
        assert_eq!(sim.records()[0].progress, 100.0);
        assert!(sim.records()[0].completed);

        // late events no longer move the record
        assert!(!sim.apply(UploadEvent::Progress { id, progress: 55.0 }));
        assert!(!sim.apply(UploadEvent::Completed { id }));
        assert_eq!(sim.records()[0].progress, 100.0);
        assert!(sim.records()[0].completed);
    }

    #[test]
    fn events_for_unknown_records_are_ignored() {
        let (_rt, mut sim) = test_sim(Duration::from_secs(3600));
        assert!(!sim.apply(UploadEvent::Progress {
            id: Uuid::new_v4(),
            progress: 10.0,
        }));
        assert!(!sim.apply(UploadEvent::Completed { id: Uuid::new_v4() }));
    }

    #[test]
    fn batch_progresses_monotonically_to_completion() {
        let (_rt, mut sim) = test_sim(Duration::from_millis(1));
        sim.accept(
            vec![raw("deed.pdf", 1024), raw("map.pdf", 2048), raw("tax.pdf", 3072)],
            Category::Land,
        );

        let deadline = Instant::now() + Duration::from_secs(10);
        let mut seen: HashMap<RecordId, f32> = HashMap::new();
        while sim.records().iter().any(|r| !r.completed) {
            assert!(Instant::now() < deadline, "records did not complete in time");
            sim.poll();
            for record in sim.records() {
                let last = seen.entry(record.id).or_insert(0.0);
                assert!(record.progress >= *last, "progress went backwards");
                assert!(record.progress <= 100.0);
                *last = record.progress;
            }
            std::thread::sleep(Duration::from_millis(1));
        }

        assert_eq!(sim.completed_count(), 3);
        for record in sim.records() {
            assert_eq!(record.progress, 100.0);
            assert!(record.completed);
        }
        assert!(!sim.is_active());
    }

    #[test]
    fn remove_mid_progress_cancels_task() {
        let (_rt, mut sim) = test_sim(Duration::from_millis(1));
        let accepted = sim.accept(vec![raw("a.pdf", 1), raw("b.pdf", 2)], Category::Photos);
        let victim = accepted.records[0].id;

        std::thread::sleep(Duration::from_millis(5));
        sim.poll();
        sim.remove(victim);
        assert_eq!(sim.records().len(), 1);

        // late events from the aborted task must not resurrect the record
        for _ in 0..20 {
            sim.poll();
            std::thread::sleep(Duration::from_millis(1));
        }
        assert_eq!(sim.records().len(), 1);
        assert!(sim.records().iter().all(|r| r.id != victim));
    }

    #[tokio::test(start_paused = true)]
    async fn transfer_is_monotonic_and_clamped() {
        let (tx, rx) = channel();
        let id = Uuid::new_v4();
        run_transfer(id, SimulatorConfig::default(), tx).await;

        let events: Vec<UploadEvent> = rx.try_iter().collect();
        assert!(!events.is_empty());

        let mut last = 0.0f32;
        for event in &events[..events.len() - 1] {
            match event {
                UploadEvent::Progress { id: got, progress } => {
                    assert_eq!(*got, id);
                    assert!(*progress > last);
                    assert!(*progress < 100.0);
                    last = *progress;
                }
                UploadEvent::Completed { .. } => panic!("completion before the final event"),
            }
        }
        assert!(matches!(events.last(), Some(UploadEvent::Completed { id: got }) if *got == id));
    }

    #[tokio::test(start_paused = true)]
    async fn batch_records_complete_independently() {
        let (tx, rx) = channel();
        let ids = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let config = SimulatorConfig::default();

        tokio::join!(
            run_transfer(ids[0], config.clone(), tx.clone()),
            run_transfer(ids[1], config.clone(), tx.clone()),
            run_transfer(ids[2], config.clone(), tx.clone()),
        );
        drop(tx);

        let mut completions: HashMap<RecordId, usize> = HashMap::new();
        for event in rx.try_iter() {
            if let UploadEvent::Completed { id } = event {
                *completions.entry(id).or_insert(0) += 1;
            }
        }
        for id in ids {
            assert_eq!(completions.get(&id), Some(&1));
        }
    }
}

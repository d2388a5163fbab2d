//! In-memory asset store fixture and event-collecting handler.

#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use relink_core::events::{
    LogEvent, LogSeverity, PhaseChangedEvent, ProgressEvent, RelinkEventHandler,
    RepairCompleteEvent, ScanCompleteEvent, ScanStartedEvent,
};
use relink_core::traits::{
    AssetStore, CompositeAsset, EditableComposite, FieldRef, ReferenceFields, SubPartSlot,
};
use relink_core::types::collections::FxHashSet;
use relink_core::types::{AssetKind, AssetPath, ObjectId, ScanPhase};

/// Route engine tracing output through the test harness. Idempotent.
pub fn init_test_logging() {
    relink_core::logging::init_tracing("relink_engine=warn");
}

/// A serialized reference field of a fake object.
#[derive(Debug, Clone)]
pub struct FakeField {
    pub name: String,
    pub backing_id: ObjectId,
    pub resolved: bool,
}

/// A fake data object / sub-part with reference fields and nested children.
#[derive(Debug, Clone, Default)]
pub struct FakeObject {
    pub type_name: String,
    pub fields: Vec<FakeField>,
    pub children: Vec<FakeObject>,
}

impl FakeObject {
    pub fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            ..Default::default()
        }
    }

    /// A field that resolves to a live object.
    pub fn with_live_field(mut self, name: &str, id: u64) -> Self {
        self.fields.push(FakeField {
            name: name.to_string(),
            backing_id: ObjectId(id),
            resolved: true,
        });
        self
    }

    /// A field deliberately left empty (zero backing identifier).
    pub fn with_empty_field(mut self, name: &str) -> Self {
        self.fields.push(FakeField {
            name: name.to_string(),
            backing_id: ObjectId::EMPTY,
            resolved: false,
        });
        self
    }

    /// A dangling field: non-zero backing identifier, unresolvable.
    pub fn with_dangling_field(mut self, name: &str, id: u64) -> Self {
        self.fields.push(FakeField {
            name: name.to_string(),
            backing_id: ObjectId(id),
            resolved: false,
        });
        self
    }

    pub fn with_child(mut self, child: FakeObject) -> Self {
        self.children.push(child);
        self
    }
}

impl ReferenceFields for FakeObject {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn for_each_reference_field(&self, visit: &mut dyn FnMut(FieldRef<'_>)) {
        for field in &self.fields {
            visit(FieldRef {
                name: &field.name,
                backing_id: field.backing_id,
                resolved: field.resolved,
            });
        }
        // Descend into nested structures.
        for child in &self.children {
            child.for_each_reference_field(visit);
        }
    }
}

/// A sub-part slot of a fake composite.
#[derive(Debug, Clone)]
pub enum FakeSlot {
    /// Present but typeless (deleted script class).
    Missing,
    Part { object: FakeObject, active: bool },
}

/// A fake composite object.
#[derive(Debug, Clone, Default)]
pub struct FakeComposite {
    pub slots: Vec<FakeSlot>,
}

impl FakeComposite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_slot(mut self) -> Self {
        self.slots.push(FakeSlot::Missing);
        self
    }

    pub fn with_part(mut self, object: FakeObject) -> Self {
        self.slots.push(FakeSlot::Part {
            object,
            active: true,
        });
        self
    }

    pub fn with_inactive_part(mut self, object: FakeObject) -> Self {
        self.slots.push(FakeSlot::Part {
            object,
            active: false,
        });
        self
    }

    pub fn missing_slot_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, FakeSlot::Missing))
            .count()
    }
}

impl CompositeAsset for FakeComposite {
    fn sub_parts(&self, include_inactive: bool) -> Vec<SubPartSlot<'_>> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                FakeSlot::Missing => Some(SubPartSlot::MissingType),
                FakeSlot::Part { object, active } => {
                    (*active || include_inactive).then_some(SubPartSlot::Resolved(object))
                }
            })
            .collect()
    }
}

/// Detached editable instantiation handed out by [`MemoryStore`].
pub struct FakeEditable {
    pub composite: FakeComposite,
}

impl EditableComposite for FakeEditable {
    fn strip_missing_sub_parts(&mut self) -> usize {
        let before = self.composite.slots.len();
        self.composite
            .slots
            .retain(|slot| !matches!(slot, FakeSlot::Missing));
        before - self.composite.slots.len()
    }
}

/// In-memory [`AssetStore`]: insertion-ordered enumeration, unloadable
/// entries, and injectable save failures.
#[derive(Default)]
pub struct MemoryStore {
    composites: RefCell<Vec<(AssetPath, Option<FakeComposite>)>>,
    data_objects: RefCell<Vec<(AssetPath, Option<FakeObject>)>>,
    fail_saves: RefCell<FxHashSet<AssetPath>>,
    /// Paths saved by repair, in save order.
    pub saved: RefCell<Vec<AssetPath>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_composite(&self, path: &str, composite: FakeComposite) {
        self.composites
            .borrow_mut()
            .push((path.into(), Some(composite)));
    }

    /// A composite path whose load always fails.
    pub fn add_unloadable_composite(&self, path: &str) {
        self.composites.borrow_mut().push((path.into(), None));
    }

    pub fn add_data_object(&self, path: &str, object: FakeObject) {
        self.data_objects
            .borrow_mut()
            .push((path.into(), Some(object)));
    }

    /// A data-object path whose load always fails.
    pub fn add_unloadable_data_object(&self, path: &str) {
        self.data_objects.borrow_mut().push((path.into(), None));
    }

    /// Make saves to `path` fail.
    pub fn fail_save_for(&self, path: &str) {
        self.fail_saves.borrow_mut().insert(path.into());
    }

    pub fn composite(&self, path: &str) -> Option<FakeComposite> {
        let path: AssetPath = path.into();
        self.composites
            .borrow()
            .iter()
            .find(|(p, _)| *p == path)
            .and_then(|(_, c)| c.clone())
    }
}

impl AssetStore for MemoryStore {
    type Editable = FakeEditable;

    fn enumerate(&self, kind: AssetKind) -> Vec<AssetPath> {
        match kind {
            AssetKind::Composite => self
                .composites
                .borrow()
                .iter()
                .map(|(p, _)| p.clone())
                .collect(),
            AssetKind::DataObject => self
                .data_objects
                .borrow()
                .iter()
                .map(|(p, _)| p.clone())
                .collect(),
        }
    }

    fn load_data_object(&self, path: &AssetPath) -> Option<Box<dyn ReferenceFields>> {
        self.data_objects
            .borrow()
            .iter()
            .find(|(p, _)| p == path)
            .and_then(|(_, o)| o.clone())
            .map(|o| Box::new(o) as Box<dyn ReferenceFields>)
    }

    fn load_composite(&self, path: &AssetPath) -> Option<Box<dyn CompositeAsset>> {
        self.composites
            .borrow()
            .iter()
            .find(|(p, _)| p == path)
            .and_then(|(_, c)| c.clone())
            .map(|c| Box::new(c) as Box<dyn CompositeAsset>)
    }

    fn open_composite(&self, path: &AssetPath) -> Option<FakeEditable> {
        self.composites
            .borrow()
            .iter()
            .find(|(p, _)| p == path)
            .and_then(|(_, c)| c.clone())
            .map(|composite| FakeEditable { composite })
    }

    fn save_composite(&self, path: &AssetPath, edited: &FakeEditable) -> bool {
        if self.fail_saves.borrow().contains(path) {
            return false;
        }
        let mut composites = self.composites.borrow_mut();
        if let Some(entry) = composites.iter_mut().find(|(p, _)| p == path) {
            entry.1 = Some(edited.composite.clone());
        }
        self.saved.borrow_mut().push(path.clone());
        true
    }
}

/// Event handler that records everything it sees.
#[derive(Default)]
pub struct CollectingHandler {
    pub started: Mutex<Vec<ScanStartedEvent>>,
    pub progress: Mutex<Vec<ProgressEvent>>,
    pub progress_cleared: AtomicUsize,
    pub phases: Mutex<Vec<ScanPhase>>,
    pub completes: Mutex<Vec<ScanCompleteEvent>>,
    pub repairs: Mutex<Vec<RepairCompleteEvent>>,
    pub logs: Mutex<Vec<(LogSeverity, String)>>,
}

impl CollectingHandler {
    pub fn fractions(&self) -> Vec<f64> {
        self.progress
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.fraction)
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.logs
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == LogSeverity::Warning)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl RelinkEventHandler for CollectingHandler {
    fn on_scan_started(&self, event: &ScanStartedEvent) {
        self.started.lock().unwrap().push(event.clone());
    }

    fn on_progress(&self, event: &ProgressEvent) {
        self.progress.lock().unwrap().push(event.clone());
    }

    fn on_progress_cleared(&self) {
        self.progress_cleared.fetch_add(1, Ordering::Relaxed);
    }

    fn on_phase_changed(&self, event: &PhaseChangedEvent) {
        self.phases.lock().unwrap().push(event.phase);
    }

    fn on_scan_complete(&self, event: &ScanCompleteEvent) {
        self.completes.lock().unwrap().push(event.clone());
    }

    fn on_repair_complete(&self, event: &RepairCompleteEvent) {
        self.repairs.lock().unwrap().push(event.clone());
    }

    fn on_log(&self, event: &LogEvent) {
        self.logs
            .lock()
            .unwrap()
            .push((event.severity, event.message.clone()));
    }
}

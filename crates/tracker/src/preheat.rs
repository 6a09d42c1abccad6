use crate::persisted::{PersistedEvent, ProgramInstance, TrackedEntityInstance};
use serde::Deserialize;
use std::collections::HashMap;

/// Stored counterparts of the bundle's entities, keyed by uid.
#[derive(Debug, Clone, Default)]
pub struct TrackerPreheat {
    tracked_entities: HashMap<String, TrackedEntityInstance>,
    enrollments: HashMap<String, ProgramInstance>,
    events: HashMap<String, PersistedEvent>,
}

impl TrackerPreheat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_tracked_entity(&mut self, entity: TrackedEntityInstance) {
        self.tracked_entities.insert(entity.uid.clone(), entity);
    }

    pub fn put_enrollment(&mut self, enrollment: ProgramInstance) {
        self.enrollments.insert(enrollment.uid.clone(), enrollment);
    }

    pub fn put_event(&mut self, event: PersistedEvent) {
        self.events.insert(event.uid.clone(), event);
    }

    pub fn tracked_entity(&self, uid: &str) -> Option<&TrackedEntityInstance> {
        self.tracked_entities.get(uid)
    }

    pub fn enrollment(&self, uid: &str) -> Option<&ProgramInstance> {
        self.enrollments.get(uid)
    }

    pub fn event(&self, uid: &str) -> Option<&PersistedEvent> {
        self.events.get(uid)
    }

    pub fn len(&self) -> usize {
        self.tracked_entities.len() + self.enrollments.len() + self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct PreheatDocument {
    tracked_entities: Vec<TrackedEntityInstance>,
    enrollments: Vec<ProgramInstance>,
    events: Vec<PersistedEvent>,
}

impl From<PreheatDocument> for TrackerPreheat {
    fn from(doc: PreheatDocument) -> Self {
        let mut preheat = TrackerPreheat::new();
        doc.tracked_entities
            .into_iter()
            .for_each(|e| preheat.put_tracked_entity(e));
        doc.enrollments
            .into_iter()
            .for_each(|e| preheat.put_enrollment(e));
        doc.events.into_iter().for_each(|e| preheat.put_event(e));
        preheat
    }
}

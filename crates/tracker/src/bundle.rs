//! Import bundle: the incoming entities, how to import them, and their stored counterparts.

use crate::{
    domain::{Enrollment, Event, MetadataIdentifier, TrackedEntity, TrackerDto, TrackerType},
    error::TrackerError,
    preheat::{PreheatDocument, TrackerPreheat},
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportStrategy {
    Create,
    Update,
    #[default]
    CreateAndUpdate,
    Delete,
}

impl ImportStrategy {
    pub fn is_update(&self) -> bool {
        matches!(self, ImportStrategy::Update)
    }
}

/// How metadata references in the bundle are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdScheme {
    #[default]
    Uid,
    Code,
    Name,
    /// Attribute values of the attribute with the given uid.
    Attribute(String),
}

impl IdScheme {
    pub fn identifier(&self, raw: &str) -> MetadataIdentifier {
        match self {
            IdScheme::Uid => MetadataIdentifier::of_uid(raw),
            IdScheme::Code => MetadataIdentifier::of_code(raw),
            IdScheme::Name => MetadataIdentifier::of_name(raw),
            IdScheme::Attribute(attribute) => MetadataIdentifier::of_attribute(attribute, raw),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerIdSchemeParams {
    pub program: IdScheme,
    pub program_stage: IdScheme,
    pub tracked_entity_type: IdScheme,
}

#[derive(Debug, Clone, Default)]
pub struct TrackerBundle {
    pub import_strategy: ImportStrategy,
    pub id_schemes: TrackerIdSchemeParams,
    pub tracked_entities: Vec<TrackedEntity>,
    pub enrollments: Vec<Enrollment>,
    pub events: Vec<Event>,
    preheat: TrackerPreheat,
    strategies: HashMap<(TrackerType, String), ImportStrategy>,
}

impl TrackerBundle {
    pub fn new(import_strategy: ImportStrategy, preheat: TrackerPreheat) -> Self {
        TrackerBundle {
            import_strategy,
            preheat,
            ..Default::default()
        }
    }

    pub fn preheat(&self) -> &TrackerPreheat {
        &self.preheat
    }

    /// Pins the strategy of one entity, overriding the resolved one.
    pub fn set_strategy<T: TrackerDto>(&mut self, dto: &T, strategy: ImportStrategy) {
        self.strategies
            .insert((dto.tracker_type(), dto.uid().to_string()), strategy);
    }

    /// Strategy applied to `dto`. Under `CreateAndUpdate` an entity already in the
    /// preheat is an update, anything else a create.
    pub fn strategy<T: TrackerDto>(&self, dto: &T) -> ImportStrategy {
        if let Some(strategy) = self
            .strategies
            .get(&(dto.tracker_type(), dto.uid().to_string()))
        {
            return *strategy;
        }

        match self.import_strategy {
            ImportStrategy::CreateAndUpdate if self.is_persisted(dto) => ImportStrategy::Update,
            ImportStrategy::CreateAndUpdate => ImportStrategy::Create,
            other => other,
        }
    }

    fn is_persisted<T: TrackerDto>(&self, dto: &T) -> bool {
        let uid = dto.uid();
        match dto.tracker_type() {
            TrackerType::TrackedEntity => self.preheat.tracked_entity(uid).is_some(),
            TrackerType::Enrollment => self.preheat.enrollment(uid).is_some(),
            TrackerType::Event => self.preheat.event(uid).is_some(),
        }
    }

    /// Loads a bundle whose metadata references are plain strings written in the
    /// bundle's id schemes.
    pub fn from_json(json: &str) -> Result<Self, TrackerError> {
        let doc: BundleDocument = serde_json::from_str(json)?;
        let id_schemes = doc.id_schemes;

        let tracked_entities = doc
            .tracked_entities
            .into_iter()
            .map(|te| {
                Ok(TrackedEntity {
                    tracked_entity_type: reference(
                        &id_schemes.tracked_entity_type,
                        "trackedEntityType",
                        &te.tracked_entity_type,
                    )?,
                    tracked_entity: te.tracked_entity,
                })
            })
            .collect::<Result<Vec<_>, TrackerError>>()?;

        let enrollments = doc
            .enrollments
            .into_iter()
            .map(|en| {
                Ok(Enrollment {
                    program: reference(&id_schemes.program, "program", &en.program)?,
                    enrollment: en.enrollment,
                    tracked_entity: en.tracked_entity,
                })
            })
            .collect::<Result<Vec<_>, TrackerError>>()?;

        let events = doc
            .events
            .into_iter()
            .map(|ev| {
                Ok(Event {
                    program_stage: reference(
                        &id_schemes.program_stage,
                        "programStage",
                        &ev.program_stage,
                    )?,
                    event: ev.event,
                    enrollment: ev.enrollment,
                })
            })
            .collect::<Result<Vec<_>, TrackerError>>()?;

        check_unique(&tracked_entities)?;
        check_unique(&enrollments)?;
        check_unique(&events)?;

        let mut bundle = TrackerBundle::new(doc.import_strategy, doc.preheat.into());
        bundle.id_schemes = id_schemes;
        bundle.tracked_entities = tracked_entities;
        bundle.enrollments = enrollments;
        bundle.events = events;

        debug!(
            strategy = ?bundle.import_strategy,
            tracked_entities = bundle.tracked_entities.len(),
            enrollments = bundle.enrollments.len(),
            events = bundle.events.len(),
            preheated = bundle.preheat.len(),
            "Loaded tracker bundle"
        );

        Ok(bundle)
    }
}

fn reference(scheme: &IdScheme, field: &str, raw: &str) -> Result<MetadataIdentifier, TrackerError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TrackerError::EmptyIdentifier(field.to_string()));
    }
    Ok(scheme.identifier(raw))
}

fn check_unique<T: TrackerDto>(dtos: &[T]) -> Result<(), TrackerError> {
    let mut seen = HashSet::new();
    for dto in dtos {
        if !seen.insert(dto.uid()) {
            return Err(TrackerError::DuplicateUid {
                tracker_type: dto.tracker_type(),
                uid: dto.uid().to_string(),
            });
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleDocument {
    #[serde(default)]
    import_strategy: ImportStrategy,
    #[serde(default)]
    id_schemes: TrackerIdSchemeParams,
    #[serde(default)]
    tracked_entities: Vec<TrackedEntityDocument>,
    #[serde(default)]
    enrollments: Vec<EnrollmentDocument>,
    #[serde(default)]
    events: Vec<EventDocument>,
    #[serde(default)]
    preheat: PreheatDocument,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackedEntityDocument {
    tracked_entity: String,
    tracked_entity_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnrollmentDocument {
    enrollment: String,
    tracked_entity: String,
    program: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventDocument {
    event: String,
    enrollment: String,
    program_stage: String,
}

//! Rejects updates that would move an entity to another owner or metadata object.

use crate::{
    bundle::{ImportStrategy, TrackerBundle},
    domain::{Enrollment, Event, TrackedEntity},
    validation::{Validator, code::ValidationCode, reporter::Reporter},
};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct UpdatableFieldsValidator;

impl Validator<TrackedEntity> for UpdatableFieldsValidator {
    fn validate(&self, reporter: &mut Reporter, bundle: &TrackerBundle, te: &TrackedEntity) {
        let Some(stored) = bundle.preheat().tracked_entity(&te.tracked_entity) else {
            return;
        };

        if !te.tracked_entity_type.is_equal_to(&stored.tracked_entity_type) {
            debug!(uid = %te.tracked_entity, "Tracked entity type changed");
            reporter.add_error(te, ValidationCode::E1126, &["trackedEntityType"]);
        }
    }

    fn needs_to_run(&self, strategy: ImportStrategy) -> bool {
        strategy.is_update()
    }
}

impl Validator<Enrollment> for UpdatableFieldsValidator {
    fn validate(&self, reporter: &mut Reporter, bundle: &TrackerBundle, enrollment: &Enrollment) {
        let Some(stored) = bundle.preheat().enrollment(&enrollment.enrollment) else {
            return;
        };

        if !enrollment.program.is_equal_to(&stored.program) {
            debug!(uid = %enrollment.enrollment, program = %enrollment.program, "Enrollment program changed");
            reporter.add_error(enrollment, ValidationCode::E1127, &["program"]);
        }

        if enrollment.tracked_entity != stored.entity_instance.uid {
            debug!(uid = %enrollment.enrollment, "Enrollment tracked entity changed");
            reporter.add_error(enrollment, ValidationCode::E1127, &["trackedEntity"]);
        }
    }

    fn needs_to_run(&self, strategy: ImportStrategy) -> bool {
        strategy.is_update()
    }
}

impl Validator<Event> for UpdatableFieldsValidator {
    fn validate(&self, reporter: &mut Reporter, bundle: &TrackerBundle, event: &Event) {
        let Some(stored) = bundle.preheat().event(&event.event) else {
            return;
        };

        if !event.program_stage.is_equal_to(&stored.program_stage) {
            debug!(uid = %event.event, "Event program stage changed");
            reporter.add_error(event, ValidationCode::E1128, &["programStage"]);
        }

        if event.enrollment != stored.program_instance.uid {
            debug!(uid = %event.event, "Event enrollment changed");
            reporter.add_error(event, ValidationCode::E1128, &["enrollment"]);
        }
    }

    fn needs_to_run(&self, strategy: ImportStrategy) -> bool {
        strategy.is_update()
    }
}

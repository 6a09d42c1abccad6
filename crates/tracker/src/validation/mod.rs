//! Import-time validation of tracker bundles.

use crate::{
    bundle::{ImportStrategy, TrackerBundle},
    domain::TrackerDto,
};
use reporter::Reporter;
use tracing::info;
use updatable_fields::UpdatableFieldsValidator;

pub mod code;
pub mod reporter;
pub mod updatable_fields;

/// A validation rule for one kind of incoming tracker object.
pub trait Validator<T: TrackerDto> {
    fn validate(&self, reporter: &mut Reporter, bundle: &TrackerBundle, dto: &T);

    /// Whether the rule applies to an object imported with `strategy`.
    fn needs_to_run(&self, strategy: ImportStrategy) -> bool {
        !matches!(strategy, ImportStrategy::Delete)
    }
}

fn run<T, V>(validator: &V, reporter: &mut Reporter, bundle: &TrackerBundle, dtos: &[T])
where
    T: TrackerDto,
    V: Validator<T>,
{
    for dto in dtos {
        if validator.needs_to_run(bundle.strategy(dto)) {
            validator.validate(reporter, bundle, dto);
        }
    }
}

/// Runs every rule over every object of the bundle.
pub fn validate_bundle(bundle: &TrackerBundle) -> Reporter {
    let mut reporter = Reporter::new();
    let validator = UpdatableFieldsValidator;

    run(&validator, &mut reporter, bundle, &bundle.tracked_entities);
    run(&validator, &mut reporter, bundle, &bundle.enrollments);
    run(&validator, &mut reporter, bundle, &bundle.events);

    info!(
        tracked_entities = bundle.tracked_entities.len(),
        enrollments = bundle.enrollments.len(),
        events = bundle.events.len(),
        errors = reporter.errors().len(),
        "Tracker bundle validation completed"
    );

    reporter
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Enrollment, MetadataIdentifier},
        persisted::{MetadataObject, ProgramInstance, TrackedEntityInstance},
        preheat::TrackerPreheat,
    };
    use tracing_test::traced_test;

    fn stored_enrollment() -> ProgramInstance {
        ProgramInstance {
            uid: "en1".to_string(),
            program: MetadataObject::with_uid("child"),
            entity_instance: TrackedEntityInstance {
                uid: "te1".to_string(),
                tracked_entity_type: MetadataObject::with_uid("person"),
            },
        }
    }

    #[traced_test]
    #[test]
    fn test_validate_bundle_logs_summary() {
        let mut preheat = TrackerPreheat::new();
        preheat.put_enrollment(stored_enrollment());

        let mut bundle = TrackerBundle::new(ImportStrategy::Update, preheat);
        bundle.enrollments.push(Enrollment {
            enrollment: "en1".to_string(),
            tracked_entity: "te1".to_string(),
            program: MetadataIdentifier::of_uid("adult"),
        });

        let reporter = validate_bundle(&bundle);

        assert_eq!(reporter.errors().len(), 1);
        assert!(logs_contain("Tracker bundle validation completed"));
        assert!(logs_contain("errors=1"));
    }

    #[test]
    fn test_delete_is_never_validated_by_default() {
        struct AlwaysFails;

        impl Validator<Enrollment> for AlwaysFails {
            fn validate(&self, reporter: &mut Reporter, _: &TrackerBundle, dto: &Enrollment) {
                reporter.add_error(dto, code::ValidationCode::E1127, &["program"]);
            }
        }

        let mut bundle = TrackerBundle::new(ImportStrategy::Delete, TrackerPreheat::new());
        bundle.enrollments.push(Enrollment {
            enrollment: "en1".to_string(),
            tracked_entity: "te1".to_string(),
            program: MetadataIdentifier::of_uid("child"),
        });

        let mut reporter = Reporter::new();
        run(&AlwaysFails, &mut reporter, &bundle, &bundle.enrollments);
        assert!(!reporter.has_errors());

        bundle.import_strategy = ImportStrategy::Create;
        run(&AlwaysFails, &mut reporter, &bundle, &bundle.enrollments);
        assert!(reporter.has_errors());
    }
}

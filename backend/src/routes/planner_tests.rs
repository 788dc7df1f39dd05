//! Property-based tests for weekly plan generation

#[cfg(test)]
mod tests {
    use crate::services::planner::{
        generate_entries, upsert_entry, DAY_PREFERENCE_ORDER,
    };
    use optitrain_shared::models::{ExerciseSpec, WorkoutTemplate, WorkoutType};
    use proptest::prelude::*;

    fn templates_strategy() -> impl Strategy<Value = Vec<WorkoutTemplate>> {
        prop::collection::vec("[a-z]{1,8}", 1..10).prop_map(|ids| {
            ids.into_iter()
                .enumerate()
                .map(|(i, id)| WorkoutTemplate {
                    id: format!("{}-{}", id, i),
                    name: format!("Workout {}", i),
                    workout_type: WorkoutType::Strength,
                    duration_minutes: 30,
                    exercises: vec![ExerciseSpec::named("Squat")],
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Entry count always equals the target clamped into 1..=7
        #[test]
        fn prop_entry_count_is_clamped_target(
            templates in templates_strategy(),
            target in 0u32..20
        ) {
            let entries = generate_entries(&templates, target, "2026-08-23").unwrap();
            let expected = target.clamp(1, 7) as usize;
            prop_assert_eq!(entries.len(), expected);
        }

        /// Assigned days are unique and drawn from the preference order prefix
        #[test]
        fn prop_days_unique_and_follow_preference_order(
            templates in templates_strategy(),
            target in 1u32..=7
        ) {
            let entries = generate_entries(&templates, target, "2026-08-23").unwrap();

            let days: Vec<u8> = entries.iter().map(|e| e.day).collect();
            let expected: Vec<u8> = DAY_PREFERENCE_ORDER[..entries.len()].to_vec();
            prop_assert_eq!(days, expected);
        }

        /// Regeneration with unchanged inputs is idempotent, ids included
        #[test]
        fn prop_generation_is_deterministic(
            templates in templates_strategy(),
            target in 1u32..=7
        ) {
            let first = generate_entries(&templates, target, "2026-08-23").unwrap();
            let second = generate_entries(&templates, target, "2026-08-23").unwrap();
            prop_assert_eq!(first, second);
        }

        /// Round-robin assignment: template i serves positions i, i+len, ...
        #[test]
        fn prop_round_robin_source_assignment(
            templates in templates_strategy(),
            target in 1u32..=7
        ) {
            let entries = generate_entries(&templates, target, "2026-08-23").unwrap();

            for (position, entry) in entries.iter().enumerate() {
                let expected = &templates[position % templates.len()];
                prop_assert_eq!(
                    entry.source_workout_id.as_deref(),
                    Some(expected.id.as_str())
                );
                prop_assert_eq!(&entry.name, &expected.name);
            }
        }

        /// Adding to an already-generated plan never yields two entries on
        /// one day
        #[test]
        fn prop_upsert_keeps_days_unique(
            templates in templates_strategy(),
            target in 1u32..=7,
            day in 0u8..=6
        ) {
            let entries = generate_entries(&templates, target, "2026-08-23").unwrap();
            let before = entries.len();
            let had_day = entries.iter().any(|e| e.day == day);

            let entries = upsert_entry(entries, day, &templates[0], "2026-08-23").unwrap();

            let on_day = entries.iter().filter(|e| e.day == day).count();
            prop_assert_eq!(on_day, 1);
            prop_assert_eq!(entries.len(), if had_day { before } else { before + 1 });
        }
    }
}

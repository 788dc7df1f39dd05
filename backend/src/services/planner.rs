//! Weekly plan generation and editing
//!
//! The planner assigns saved workout templates to days of a 7-day week.
//! The scheduling core is a set of pure functions over immutable inputs;
//! `PlannerService` wraps them with profile/template loading and the
//! document-style persistence of one plan row per week.

use crate::error::ApiError;
use crate::repositories::{PlannerRepository, UserRepository, WorkoutRepository};
use crate::services::profile::ProfileService;
use crate::services::workout::WorkoutService;
use chrono::{Datelike, Duration, NaiveDate};
use optitrain_shared::errors::PlannerError;
use optitrain_shared::models::{PlanEntry, WorkoutTemplate};
use optitrain_shared::types::{AddPlanEntryRequest, PlanResponse};
use optitrain_shared::validation::resolve_workouts_per_week;
use sqlx::PgPool;
use uuid::Uuid;

/// Day-of-week assignment order (0 = Sunday).
///
/// Front-loads a Monday/Wednesday/Friday spacing pattern before filling the
/// remaining days; the first N days are used for a target of N workouts.
pub const DAY_PREFERENCE_ORDER: [u8; 7] = [1, 3, 5, 2, 4, 6, 0];

/// Deterministic plan entry id.
///
/// Regenerating with unchanged inputs reproduces the same ids, and the
/// position suffix keeps ids unique when one template lands on several days.
pub fn entry_id(week_id: &str, template_id: &str, position: usize) -> String {
    format!("{}-{}-{}", week_id, template_id, position)
}

/// Normalize a date to its week's Sunday
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Week identifier: ISO date of the week's Sunday
pub fn week_id(start: NaiveDate) -> String {
    start.format("%Y-%m-%d").to_string()
}

/// Parse a week identifier and normalize it to the enclosing week's Sunday
pub fn parse_week_id(raw: &str) -> Result<NaiveDate, PlannerError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(week_start)
        .map_err(|_| PlannerError::InvalidWeekId(raw.to_string()))
}

/// Generate a full week of plan entries from saved templates.
///
/// Assigns `clamp(workouts_per_week, 1, 7)` days from the preference order
/// and fills them round-robin over the template list, so a single template
/// repeats when there are fewer templates than workout days. Fails without
/// producing anything when no templates exist.
pub fn generate_entries(
    templates: &[WorkoutTemplate],
    workouts_per_week: u32,
    week_id: &str,
) -> Result<Vec<PlanEntry>, PlannerError> {
    if templates.is_empty() {
        return Err(PlannerError::NoTemplatesAvailable);
    }

    let count = workouts_per_week.clamp(1, DAY_PREFERENCE_ORDER.len() as u32) as usize;

    let entries = (0..count)
        .map(|position| {
            let template = &templates[position % templates.len()];
            PlanEntry {
                id: entry_id(week_id, &template.id, position),
                day: DAY_PREFERENCE_ORDER[position],
                name: template.name.clone(),
                workout_type: template.workout_type,
                duration_minutes: template.duration_minutes,
                exercises: template.exercise_names(),
                completed: false,
                source_workout_id: Some(template.id.clone()),
            }
        })
        .collect();

    Ok(entries)
}

/// Add a template to a specific day, replacing any entry already there.
///
/// Last-write-wins per day: the plan never holds two entries with the same
/// day index.
///
/// The id suffix here is the day index, while `generate_entries` suffixes
/// by position. The two can collide for the same template (a generated
/// entry at position 3 lands on day 2, so an add of that template to day 3
/// mints the same id), and id-keyed operations such as `toggle_completion`
/// then touch both entries. Kept for id stability with existing stored
/// plans.
pub fn upsert_entry(
    mut entries: Vec<PlanEntry>,
    day: u8,
    template: &WorkoutTemplate,
    week_id: &str,
) -> Result<Vec<PlanEntry>, PlannerError> {
    if day > 6 {
        return Err(PlannerError::InvalidDay(day));
    }

    entries.retain(|e| e.day != day);
    entries.push(PlanEntry {
        id: entry_id(week_id, &template.id, day as usize),
        day,
        name: template.name.clone(),
        workout_type: template.workout_type,
        duration_minutes: template.duration_minutes,
        exercises: template.exercise_names(),
        completed: false,
        source_workout_id: Some(template.id.clone()),
    });

    Ok(entries)
}

/// Flip the completed flag on the matching entry; no-op when absent
pub fn toggle_completion(entries: Vec<PlanEntry>, entry_id: &str) -> Vec<PlanEntry> {
    entries
        .into_iter()
        .map(|mut e| {
            if e.id == entry_id {
                e.completed = !e.completed;
            }
            e
        })
        .collect()
}

/// Drop the matching entry; no-op when absent
pub fn remove_entry(entries: Vec<PlanEntry>, entry_id: &str) -> Vec<PlanEntry> {
    entries.into_iter().filter(|e| e.id != entry_id).collect()
}

/// Planner service: persistence orchestration around the pure core
pub struct PlannerService;

impl PlannerService {
    /// Load the plan for one week; an unwritten week is an empty plan
    pub async fn get_plan(pool: &PgPool, user_id: Uuid, week: &str) -> Result<PlanResponse, ApiError> {
        let start = parse_week_id(week)?;

        let entries = PlannerRepository::get(pool, user_id, start)
            .await?
            .unwrap_or_default();

        Ok(PlanResponse {
            week_id: week_id(start),
            entries,
        })
    }

    /// Generate and persist a full plan for one week.
    ///
    /// Reads the profile's workouts-per-week setting and the saved template
    /// list (newest first), then replaces the week's stored plan outright.
    /// The precondition check runs before any write, so a failed generation
    /// leaves a previously stored plan untouched.
    pub async fn generate(pool: &PgPool, user_id: Uuid, week: &str) -> Result<PlanResponse, ApiError> {
        let start = parse_week_id(week)?;
        let id = week_id(start);

        let profile = UserRepository::get_profile(pool, user_id)
            .await?
            .map(ProfileService::snapshot)
            .unwrap_or_default();

        let templates: Vec<WorkoutTemplate> = WorkoutRepository::list_by_user(pool, user_id)
            .await?
            .into_iter()
            .map(WorkoutService::record_to_template)
            .collect();

        let target = resolve_workouts_per_week(profile.workouts_per_week.as_deref());
        let entries = generate_entries(&templates, target, &id)?;

        PlannerRepository::put(pool, user_id, start, &entries)
            .await?;

        Ok(PlanResponse { week_id: id, entries })
    }

    /// Add one saved workout to one day of the week
    pub async fn add_entry(
        pool: &PgPool,
        user_id: Uuid,
        week: &str,
        req: AddPlanEntryRequest,
    ) -> Result<PlanResponse, ApiError> {
        let (day, workout_id) = match (req.day, req.workout_id) {
            (Some(day), Some(workout_id)) => (day, workout_id),
            _ => {
                return Err(PlannerError::MissingSelection("day and workout".to_string()).into());
            }
        };

        let start = parse_week_id(week)?;
        let id = week_id(start);

        let template_uuid = Uuid::parse_str(&workout_id)
            .map_err(|_| ApiError::Validation("Invalid workout ID".to_string()))?;
        let template = WorkoutRepository::get_by_id(pool, template_uuid, user_id)
            .await?
            .map(WorkoutService::record_to_template)
            .ok_or_else(|| ApiError::NotFound("Selected workout not found".to_string()))?;

        let entries = PlannerRepository::get(pool, user_id, start)
            .await?
            .unwrap_or_default();

        let entries = upsert_entry(entries, day, &template, &id)?;

        PlannerRepository::put(pool, user_id, start, &entries)
            .await?;

        Ok(PlanResponse { week_id: id, entries })
    }

    /// Toggle an entry's completed flag
    pub async fn toggle_completion(
        pool: &PgPool,
        user_id: Uuid,
        week: &str,
        entry_id: &str,
    ) -> Result<PlanResponse, ApiError> {
        let start = parse_week_id(week)?;

        let entries = PlannerRepository::get(pool, user_id, start)
            .await?
            .unwrap_or_default();

        let entries = toggle_completion(entries, entry_id);

        PlannerRepository::put(pool, user_id, start, &entries)
            .await?;

        Ok(PlanResponse {
            week_id: week_id(start),
            entries,
        })
    }

    /// Remove an entry from the week
    pub async fn remove_entry(
        pool: &PgPool,
        user_id: Uuid,
        week: &str,
        entry_id: &str,
    ) -> Result<PlanResponse, ApiError> {
        let start = parse_week_id(week)?;

        let entries = PlannerRepository::get(pool, user_id, start)
            .await?
            .unwrap_or_default();

        let entries = remove_entry(entries, entry_id);

        PlannerRepository::put(pool, user_id, start, &entries)
            .await?;

        Ok(PlanResponse {
            week_id: week_id(start),
            entries,
        })
    }
}

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;

use super::{
    error::PlanError,
    policy::{Feasibility, GradeScale, NOT_POSSIBLE, parse_number, present},
};
use crate::gpa::{GpaSnapshot, project_future_gpa};

/// Outcome of a "what do I need to average" request.
#[derive(Debug, Clone, Serialize)]
pub struct FuturePlan {
    /// Standing the projection started from.
    snapshot:           GpaSnapshot,
    /// Credits the student plans to take.
    additional_credits: f64,
    /// Cumulative GPA the student is aiming for.
    desired_gpa:        f64,
    /// Average grade point needed, as computed.
    feasibility:        Feasibility,
    /// Scale used to judge and format the result.
    #[serde(skip)]
    scale:              GradeScale,
}

impl FuturePlan {
    /// Returns the snapshot the projection started from.
    pub fn snapshot(&self) -> &GpaSnapshot {
        &self.snapshot
    }

    /// Returns the credits the student plans to take.
    pub fn additional_credits(&self) -> f64 {
        self.additional_credits
    }

    /// Returns the targeted cumulative GPA.
    pub fn desired_gpa(&self) -> f64 {
        self.desired_gpa
    }

    /// Returns the raw required average, even when it is off the scale.
    pub fn required_average(&self) -> f64 {
        self.feasibility.value()
    }

    /// Returns whether the target can be reached.
    pub fn feasibility(&self) -> Feasibility {
        self.feasibility
    }

    /// Returns true when the required average is on the grade scale.
    pub fn is_achievable(&self) -> bool {
        self.feasibility.is_achievable()
    }
}

impl Display for FuturePlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.feasibility {
            Feasibility::Achievable(v) => write!(f, "{}", self.scale.format(v)),
            Feasibility::NotPossible(_) => write!(f, "{NOT_POSSIBLE}"),
        }
    }
}

/// Validates the future-GPA form and, if it passes, runs the projection.
///
/// * `snapshot`: the student's current standing
/// * `credits_wanted`: entered number of additional credits
/// * `desired_gpa`: entered target cumulative GPA
/// * `scale`: grade scale used to judge the result
pub fn plan_future_gpa(
    snapshot: &GpaSnapshot,
    credits_wanted: Option<&str>,
    desired_gpa: Option<&str>,
    scale: &GradeScale,
) -> Result<FuturePlan, PlanError> {
    build(snapshot, credits_wanted, desired_gpa, scale)
        .inspect_err(|e| tracing::warn!(reason = %e, "Rejected future GPA request"))
}

/// Does the work for [`plan_future_gpa`] without logging rejections.
fn build(
    snapshot: &GpaSnapshot,
    credits_wanted: Option<&str>,
    desired_gpa: Option<&str>,
    scale: &GradeScale,
) -> Result<FuturePlan, PlanError> {
    let (credits_raw, desired_raw) = match (present(credits_wanted), present(desired_gpa)) {
        (None, None) => return Err(PlanError::MissingCreditsAndGpa),
        (None, Some(_)) => return Err(PlanError::MissingCredits),
        (Some(_), None) => return Err(PlanError::MissingDesiredGpa),
        (Some(c), Some(d)) => (c, d),
    };

    let additional_credits = parse_number("Credits", credits_raw)?;
    let desired_gpa = parse_number("Desired GPA", desired_raw)?;

    if additional_credits <= 0.0 {
        return Err(PlanError::NonPositiveCredits(additional_credits));
    }

    let required = project_future_gpa(
        snapshot.cumulative_gpa,
        snapshot.credits_earned,
        additional_credits,
        desired_gpa,
    );
    tracing::debug!(
        current_gpa = snapshot.cumulative_gpa,
        current_credits = snapshot.credits_earned,
        additional_credits,
        desired_gpa,
        required,
        "Projected future GPA"
    );

    Ok(FuturePlan {
        snapshot: *snapshot,
        additional_credits,
        desired_gpa,
        feasibility: scale.classify(required),
        scale: *scale,
    })
}

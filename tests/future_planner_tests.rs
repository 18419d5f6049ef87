use coursecraft::{
    gpa::GpaSnapshot,
    planner::{
        Feasibility, GradeScale, NOT_POSSIBLE, PlanError, plan_future_gpa, policy::MAX_PRECISION,
    },
};

fn straight_a() -> GpaSnapshot {
    GpaSnapshot::new(4.0, 15.0)
}

fn plan(credits: Option<&str>, desired: Option<&str>) -> Result<coursecraft::FuturePlan, PlanError> {
    plan_future_gpa(&straight_a(), credits, desired, &GradeScale::default())
}

#[test]
fn reachable_target_shows_required_average() {
    let plan = plan(Some("15"), Some("3.5")).expect("valid request");
    assert!(plan.is_achievable());
    assert_eq!(plan.required_average(), 3.0);
    assert_eq!(plan.additional_credits(), 15.0);
    assert_eq!(plan.desired_gpa(), 3.5);
    insta::assert_snapshot!(plan.to_string(), @"3.00");
}

#[test]
fn target_below_zero_is_not_possible() {
    let plan = plan(Some("15"), Some("0")).expect("valid request");
    assert_eq!(plan.feasibility(), Feasibility::NotPossible(-4.0));
    assert_eq!(plan.to_string(), NOT_POSSIBLE);
}

#[test]
fn target_above_scale_is_not_possible() {
    let plan = plan(Some("15"), Some("4.5")).expect("valid request");
    assert_eq!(plan.required_average(), 5.0);
    insta::assert_snapshot!(plan.to_string(), @"not possible with that amount of credits");
}

#[test]
fn top_of_scale_is_still_achievable() {
    let freshman = GpaSnapshot::new(0.0, 0.0);
    let plan = plan_future_gpa(&freshman, Some("15"), Some("4"), &GradeScale::default())
        .expect("valid request");
    assert!(plan.is_achievable());
    assert_eq!(plan.to_string(), "4.00");
}

#[test]
fn missing_fields_are_reported_before_parsing() {
    insta::assert_snapshot!(
        plan(None, None).unwrap_err().to_string(),
        @"Please enter credits and desired gpa"
    );
    insta::assert_snapshot!(
        plan(Some("   "), Some("3")).unwrap_err().to_string(),
        @"Please enter credits"
    );
    insta::assert_snapshot!(
        plan(Some("12"), Some("")).unwrap_err().to_string(),
        @"Please enter desired gpa"
    );
}

#[test]
fn non_numeric_fields_are_rejected() {
    assert_eq!(
        plan(Some("twelve"), Some("3")).unwrap_err(),
        PlanError::NotNumeric {
            field: "Credits",
            value: "twelve".to_string(),
        }
    );
    insta::assert_snapshot!(
        plan(Some("12"), Some("inf")).unwrap_err().to_string(),
        @"Desired GPA must be numeric"
    );
}

#[test]
fn zero_or_negative_credits_never_reach_the_engine() {
    assert_eq!(
        plan(Some("0"), Some("3")).unwrap_err(),
        PlanError::NonPositiveCredits(0.0)
    );
    assert_eq!(
        plan(Some("-3"), Some("3")).unwrap_err(),
        PlanError::NonPositiveCredits(-3.0)
    );
}

#[test]
fn precision_follows_the_scale() {
    let scale = GradeScale::new(4.0, 0.5, 1);
    let plan = plan_future_gpa(&straight_a(), Some(" 15 "), Some("3.5"), &scale)
        .expect("valid request");
    assert_eq!(plan.to_string(), "3.0");
}

#[test]
fn oversized_precision_is_capped() {
    let scale = GradeScale::new(4.0, 0.5, 70_000);
    assert_eq!(scale.precision(), MAX_PRECISION);

    let plan = plan_future_gpa(&straight_a(), Some("15"), Some("3.5"), &scale)
        .expect("valid request");
    let shown = plan.to_string();
    assert!(shown.starts_with("3.0"), "{shown}");
    assert_eq!(shown.len(), 2 + MAX_PRECISION);
}

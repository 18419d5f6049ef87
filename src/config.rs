#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    path::PathBuf,
    str::FromStr,
    sync::{Arc, Mutex, OnceLock},
};

use tracing::Level;

use crate::planner::{GradeScale, policy::MAX_PRECISION};

/// Default top of the grade scale.
pub const DEFAULT_MAX_GRADE_POINT: f64 = 4.0;

/// Default grade point increment.
pub const DEFAULT_GRADE_STEP: f64 = 0.5;

/// Default number of decimals shown for results.
pub const DEFAULT_PRECISION: usize = 2;

/// Runtime configuration shared across the crate.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Grade scale used by the planners.
    grade_scale: GradeScale,
    /// Roster used when no path is given explicitly.
    roster_path: Option<PathBuf>,
    /// Level the binary logs at.
    log_level:   Level,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            grade_scale: GradeScale::new(
                DEFAULT_MAX_GRADE_POINT,
                DEFAULT_GRADE_STEP,
                DEFAULT_PRECISION,
            ),
            roster_path: None,
            log_level:   Level::INFO,
        }
    }
}

impl ConfigState {
    /// Construct a new configuration instance from the environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Construct a configuration from any variable lookup. Values that are
    /// missing, unparseable, or out of range fall back to the defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_grade_point = read_var(
            &lookup,
            "COURSECRAFT_MAX_GRADE_POINT",
            DEFAULT_MAX_GRADE_POINT,
        );
        let step = read_var(&lookup, "COURSECRAFT_GRADE_STEP", DEFAULT_GRADE_STEP);
        let mut precision = read_var(&lookup, "COURSECRAFT_PRECISION", DEFAULT_PRECISION);

        if precision > MAX_PRECISION {
            tracing::warn!(precision, "Ignoring precision above {MAX_PRECISION} decimals");
            precision = DEFAULT_PRECISION;
        }

        let grade_scale = if max_grade_point > 0.0 && step > 0.0 {
            GradeScale::new(max_grade_point, step, precision)
        } else {
            tracing::warn!(
                max_grade_point,
                step,
                "Ignoring non-positive grade scale settings"
            );
            GradeScale::new(DEFAULT_MAX_GRADE_POINT, DEFAULT_GRADE_STEP, precision)
        };

        let roster_path = lookup("COURSECRAFT_ROSTER")
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            grade_scale,
            roster_path,
            log_level: read_var(&lookup, "COURSECRAFT_LOG", Level::INFO),
        }
    }

    /// Returns the grade scale.
    pub fn grade_scale(&self) -> GradeScale {
        self.grade_scale
    }

    /// Returns the default roster path, if one is configured.
    pub fn roster_path(&self) -> Option<&PathBuf> {
        self.roster_path.as_ref()
    }

    /// Returns the configured log level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<ConfigState>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<ConfigState>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Returns the active configuration, reading the environment on first use.
pub fn get() -> Arc<ConfigState> {
    let mut guard = slot().lock().expect("config slot poisoned");
    Arc::clone(guard.get_or_insert_with(|| Arc::new(ConfigState::from_env())))
}

/// Replaces the active configuration.
pub fn set(cfg: ConfigState) {
    *slot().lock().expect("config slot poisoned") = Some(Arc::new(cfg));
}

/// Returns the configured grade scale.
pub fn grade_scale() -> GradeScale {
    get().grade_scale()
}

/// Returns the configured default roster path.
pub fn roster_path() -> Option<PathBuf> {
    get().roster_path().cloned()
}

/// Returns the configured log level.
pub fn log_level() -> Level {
    get().log_level()
}

/// Parses a configuration variable, falling back to `default` when parsing
/// fails or the variable is missing.
fn read_var<T: FromStr>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|value| value.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # coursecraft
//!
//! Command line front end for the CourseCraft GPA projections.
//!
//! `coursecraft future` answers "what do I need to average over the next N
//! credits to end at this GPA", and `coursecraft semester` answers "what will
//! my GPA be if this semester goes the way I expect".

use std::{collections::HashMap, path::PathBuf};

use anyhow::{Context, Result, bail};
use bpaf::*;
use coursecraft::{
    config,
    gpa::GpaSnapshot,
    planner::{self, CourseLoadRow, GradeScale, PlanError},
    student::{Roster, StudentStore, semester_rows},
};
use dotenvy::dotenv;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Where the student's current standing comes from.
#[derive(Debug, Clone)]
struct AccountArgs {
    /// Look the student up on a roster.
    student: Option<u64>,
    /// Roster file overriding `COURSECRAFT_ROSTER`.
    roster:  Option<PathBuf>,
    /// Current GPA, when no roster is used.
    gpa:     Option<f64>,
    /// Current credits, when no roster is used.
    credits: Option<f64>,
}

/// A `NAME=CREDITS:GRADE` course cell set from the command line.
#[derive(Debug, Clone)]
struct CourseArg {
    /// Class name.
    name:    String,
    /// Raw credits cell.
    credits: String,
    /// Raw grade cell.
    grade:   String,
}

impl std::str::FromStr for CourseArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, cells) = s
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=CREDITS:GRADE, got `{s}`"))?;
        let (credits, grade) = cells
            .split_once(':')
            .ok_or_else(|| format!("expected NAME=CREDITS:GRADE, got `{s}`"))?;
        Ok(Self {
            name:    name.trim().to_string(),
            credits: credits.trim().to_string(),
            grade:   grade.trim().to_string(),
        })
    }
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Average needed over additional credits to reach a target GPA
    Future {
        /// Account source
        account:    AccountArgs,
        /// Additional credits, as entered
        additional: Option<String>,
        /// Desired GPA, as entered
        desired:    Option<String>,
    },
    /// GPA after the current semester
    Semester {
        /// Account source
        account: AccountArgs,
        /// Course cells
        courses: Vec<CourseArg>,
    },
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the account source flags
    fn account_args() -> impl Parser<AccountArgs> {
        let student = long("student")
            .help("Id of the student on the roster")
            .argument::<u64>("ID")
            .optional();
        let roster = long("roster")
            .help("Roster JSON file (defaults to $COURSECRAFT_ROSTER)")
            .argument::<PathBuf>("PATH")
            .optional();
        let gpa = long("gpa")
            .help("Current cumulative GPA")
            .argument::<f64>("GPA")
            .optional();
        let credits = long("credits")
            .help("Credits earned so far")
            .argument::<f64>("CREDITS")
            .optional();
        construct!(AccountArgs {
            student,
            roster,
            gpa,
            credits
        })
    }

    let additional = long("additional")
        .help("How many more credits you plan to take")
        .argument::<String>("CREDITS")
        .optional();
    let desired = long("desired")
        .help("GPA you would like to reach with those credits")
        .argument::<String>("GPA")
        .optional();
    let account = account_args();
    let future = construct!(Cmd::Future {
        account,
        additional,
        desired
    })
    .to_options()
    .command("future")
    .help("Calculate the average GPA needed to reach a target");

    let courses = long("course")
        .help("A course as NAME=CREDITS:GRADE, repeatable")
        .argument::<CourseArg>("COURSE")
        .many();
    let account = account_args();
    let semester = construct!(Cmd::Semester { account, courses })
        .to_options()
        .command("semester")
        .help("Calculate GPA after this semester");

    let cmd = construct!([future, semester]);

    cmd.to_options()
        .descr("GPA projections for CourseCraft students")
        .run()
}

/// Loads the roster named on the command line or in the configuration.
fn load_roster(path: Option<&PathBuf>) -> Result<Roster> {
    let path = path
        .cloned()
        .or_else(config::roster_path)
        .context("A roster is required with --student; pass --roster or set COURSECRAFT_ROSTER")?;
    Roster::load(&path)
}

/// Resolves the student's standing, from the roster or from flags, and
/// rejects standings that are off the grade scale.
fn resolve_snapshot(
    account: &AccountArgs,
    roster: Option<&Roster>,
    scale: &GradeScale,
) -> Result<GpaSnapshot> {
    let snapshot = match (account.student, roster) {
        (Some(id), Some(roster)) => roster.account(id)?.snapshot(),
        _ => match (account.gpa, account.credits) {
            (Some(gpa), Some(credits)) => GpaSnapshot::new(gpa, credits),
            _ => bail!("Either --student or both --gpa and --credits are required"),
        },
    };
    Ok(scale.check_snapshot(&snapshot)?)
}

/// Prints the outcome of a planner call the way the student screens do.
fn report<T: std::fmt::Display>(outcome: std::result::Result<T, PlanError>) {
    match outcome {
        Ok(plan) => println!("{plan}"),
        Err(e) => println!("{e}"),
    }
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(config::log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let scale = config::grade_scale();

    match options() {
        Cmd::Future {
            account,
            additional,
            desired,
        } => {
            let roster = match account.student {
                Some(_) => Some(load_roster(account.roster.as_ref())?),
                None => None,
            };
            let snapshot = resolve_snapshot(&account, roster.as_ref(), &scale)?;
            report(planner::plan_future_gpa(
                &snapshot,
                additional.as_deref(),
                desired.as_deref(),
                &scale,
            ));
        }
        Cmd::Semester { account, courses } => {
            let (snapshot, rows) = match account.student {
                Some(id) => {
                    let roster = load_roster(account.roster.as_ref())?;
                    let mut entered: HashMap<String, (String, String)> = HashMap::new();
                    for c in courses {
                        if entered
                            .insert(c.name.clone(), (c.credits, c.grade))
                            .is_some()
                        {
                            tracing::warn!(
                                course = %c.name,
                                "Course given more than once; using the last entry"
                            );
                        }
                    }
                    let rows = semester_rows(&roster, id, &entered)?;
                    (resolve_snapshot(&account, Some(&roster), &scale)?, rows)
                }
                None => {
                    let rows: Vec<CourseLoadRow> = courses
                        .into_iter()
                        .map(|c| CourseLoadRow::filled(c.name, c.credits, c.grade))
                        .collect();
                    (resolve_snapshot(&account, None, &scale)?, rows)
                }
            };

            if rows.is_empty() {
                println!("No available courses at this time");
                return Ok(());
            }

            match planner::plan_semester_gpa(&snapshot, &rows, &scale) {
                Ok(plan) => {
                    eprintln!("{}", plan.table());
                    println!("{plan}");
                }
                Err(e) => println!("{e}"),
            }
        }
    };

    Ok(())
}

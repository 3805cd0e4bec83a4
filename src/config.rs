//! Roster configuration.
//!
//! A roster is read from JSON:
//!
//! ```json
//! {
//!   "students": [{ "id": "s1" }],
//!   "mentors": [{
//!     "id": "m1",
//!     "type": "normal",
//!     "weekday_window": ["19:00", "24:00"],
//!     "sunday_windows": [["10:00", "12:00"], ["19:00", "24:00"]],
//!     "breaks": [["21:00", "22:00"]]
//!   }],
//!   "scheduler": { "exhaustion_policy": "abort", "tie_breaker": "declaration_order" }
//! }
//! ```
//!
//! A mentor may give its availability as a `schedule` record instead of
//! explicit windows (see [`MentorScheduleConfig`]).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SchedulingError};
use crate::models::{
    CallType, MentorSpec, Student, TimeOfDay, TimeWindow, WeeklySchedule, DEFAULT_CALL_DURATION,
    DEFAULT_GAP,
};
use crate::scheduler::{ExhaustionPolicy, TieBreaker, WeeklyScheduler};

/// `["HH:MM", "HH:MM"]` pair.
pub type WindowConfig = (TimeOfDay, TimeOfDay);

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RosterConfig {
    #[serde(default)]
    pub students: Vec<StudentConfig>,
    #[serde(default)]
    pub mentors: Vec<MentorConfig>,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentConfig {
    pub id: String,
    #[serde(default = "default_requirements")]
    pub requirements: Vec<CallType>,
}

fn default_requirements() -> Vec<CallType> {
    CallType::WEEKLY_QUOTA.to_vec()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorConfig {
    pub id: String,
    /// Kept as text so an unknown type is reported against the mentor.
    #[serde(rename = "type")]
    pub call_type: String,
    #[serde(default)]
    pub weekday_window: Option<WindowConfig>,
    #[serde(default)]
    pub sunday_windows: Vec<WindowConfig>,
    #[serde(default)]
    pub breaks: Vec<WindowConfig>,
    /// Availability as a per-mentor schedule record; excludes the window
    /// fields above.
    #[serde(default)]
    pub schedule: Option<MentorScheduleConfig>,
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u16,
    /// Minutes between calls; 5 when neither this nor the `schedule` record
    /// sets it.
    #[serde(default)]
    pub gap_minutes: Option<u16>,
}

fn default_duration_minutes() -> u16 {
    DEFAULT_CALL_DURATION
}

/// Per-mentor schedule record: one weekday window, up to two Sunday
/// sub-windows and one break.
///
/// A Sunday sub-window or the break only counts when both of its ends are
/// set; a half-filled pair is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorScheduleConfig {
    pub weekday_start: TimeOfDay,
    pub weekday_end: TimeOfDay,
    #[serde(default)]
    pub sunday_morning_start: Option<TimeOfDay>,
    #[serde(default)]
    pub sunday_morning_end: Option<TimeOfDay>,
    #[serde(default)]
    pub sunday_evening_start: Option<TimeOfDay>,
    #[serde(default)]
    pub sunday_evening_end: Option<TimeOfDay>,
    #[serde(default)]
    pub dinner_start: Option<TimeOfDay>,
    #[serde(default)]
    pub dinner_end: Option<TimeOfDay>,
    #[serde(default)]
    pub gap_minutes: Option<u16>,
}

impl MentorScheduleConfig {
    /// Builds a mentor spec with the default call duration.
    pub fn to_spec(&self, id: impl Into<String>, call_type: CallType) -> MentorSpec {
        let mut spec = MentorSpec::new(id, call_type)
            .with_weekday_window(TimeWindow::new(self.weekday_start, self.weekday_end))
            .with_gap(self.gap_minutes.unwrap_or(DEFAULT_GAP));

        let sunday = [
            (self.sunday_morning_start, self.sunday_morning_end),
            (self.sunday_evening_start, self.sunday_evening_end),
        ];
        for (start, end) in sunday {
            if let Some(window) = pair(start, end) {
                spec = spec.with_sunday_window(window);
            }
        }
        if let Some(dinner) = pair(self.dinner_start, self.dinner_end) {
            spec = spec.with_break(dinner);
        }

        spec
    }
}

fn pair(start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> Option<TimeWindow> {
    Some(TimeWindow::new(start?, end?))
}

impl MentorConfig {
    /// Converts into a mentor spec.
    ///
    /// # Errors
    /// [`SchedulingError::MisconfiguredMentor`] for an unknown call type, or
    /// when a `schedule` record is combined with explicit windows or both set
    /// a gap.
    pub fn to_spec(&self) -> Result<MentorSpec> {
        let call_type = self.call_type.parse::<CallType>().map_err(|e| {
            SchedulingError::MisconfiguredMentor {
                mentor_id: self.id.clone(),
                reason: e.to_string(),
            }
        })?;

        let spec = match &self.schedule {
            Some(record) => {
                if self.weekday_window.is_some()
                    || !self.sunday_windows.is_empty()
                    || !self.breaks.is_empty()
                {
                    return Err(SchedulingError::MisconfiguredMentor {
                        mentor_id: self.id.clone(),
                        reason: "schedule record cannot be combined with explicit windows".into(),
                    });
                }
                if self.gap_minutes.is_some() && record.gap_minutes.is_some() {
                    return Err(SchedulingError::MisconfiguredMentor {
                        mentor_id: self.id.clone(),
                        reason: "gap_minutes set on both the mentor and its schedule record".into(),
                    });
                }
                let spec = record.to_spec(self.id.as_str(), call_type);
                match self.gap_minutes {
                    Some(gap) => spec.with_gap(gap),
                    None => spec,
                }
            }
            None => {
                let mut spec = MentorSpec::new(self.id.as_str(), call_type)
                    .with_gap(self.gap_minutes.unwrap_or(DEFAULT_GAP));
                if let Some((start, end)) = self.weekday_window {
                    spec = spec.with_weekday_window(TimeWindow::new(start, end));
                }
                for &(start, end) in &self.sunday_windows {
                    spec = spec.with_sunday_window(TimeWindow::new(start, end));
                }
                for &(start, end) in &self.breaks {
                    spec = spec.with_break(TimeWindow::new(start, end));
                }
                spec
            }
        };

        Ok(spec.with_duration(self.duration_minutes))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct SchedulerConfig {
    #[serde(default)]
    pub exhaustion_policy: ExhaustionPolicy,
    #[serde(default)]
    pub tie_breaker: TieBreaker,
}

impl SchedulerConfig {
    pub fn build(&self) -> WeeklyScheduler {
        WeeklyScheduler::new()
            .with_exhaustion_policy(self.exhaustion_policy)
            .with_tie_breaker(self.tie_breaker)
    }
}

impl RosterConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let roster = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(
            path = %path.display(),
            students = roster.students.len(),
            mentors = roster.mentors.len(),
            "loaded roster"
        );
        Ok(roster)
    }

    pub fn students(&self) -> Vec<Student> {
        self.students
            .iter()
            .map(|s| Student::new(s.id.as_str()).with_requirements(s.requirements.clone()))
            .collect()
    }

    pub fn mentor_specs(&self) -> Result<Vec<MentorSpec>> {
        self.mentors.iter().map(MentorConfig::to_spec).collect()
    }

    /// Builds fresh mentor state and runs one week with the configured
    /// policies.
    pub fn run(&self) -> Result<WeeklySchedule> {
        let specs = self.mentor_specs()?;
        self.scheduler.build().schedule_specs(&self.students(), &specs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;
    use std::io::Write;

    const ROSTER: &str = r#"{
        "students": [
            { "id": "s1" },
            { "id": "s2", "requirements": ["academic"] }
        ],
        "mentors": [
            {
                "id": "n1",
                "type": "normal",
                "weekday_window": ["19:00", "00:00"],
                "sunday_windows": [["10:00", "12:00"], ["19:00", "24:00"]],
                "breaks": [["21:00", "22:00"]]
            },
            {
                "id": "a1",
                "type": "academic",
                "schedule": {
                    "weekday_start": "19:00",
                    "weekday_end": "24:00",
                    "sunday_morning_start": "10:00",
                    "sunday_morning_end": "12:00",
                    "dinner_start": "21:00",
                    "dinner_end": "22:00"
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_roster() {
        let roster = RosterConfig::from_json_str(ROSTER).unwrap();
        assert_eq!(roster.students.len(), 2);
        assert_eq!(roster.students[0].requirements, CallType::WEEKLY_QUOTA);
        assert_eq!(roster.students[1].requirements, [CallType::Academic]);
        assert_eq!(roster.mentors[0].duration_minutes, 20);
        assert_eq!(roster.mentors[0].gap_minutes, None);
        assert_eq!(roster.scheduler.exhaustion_policy, ExhaustionPolicy::Abort);
        assert_eq!(roster.scheduler.tie_breaker, TieBreaker::DeclarationOrder);
    }

    #[test]
    fn test_mentor_specs() {
        let specs = RosterConfig::from_json_str(ROSTER).unwrap().mentor_specs().unwrap();

        assert_eq!(specs[0].call_type, CallType::Normal);
        assert_eq!(specs[0].sunday_windows.len(), 2);
        assert_eq!(specs[0].breaks.len(), 1);

        // Record without evening fields → only the morning Sunday window
        assert_eq!(specs[1].call_type, CallType::Academic);
        assert_eq!(specs[1].sunday_windows.len(), 1);
        assert_eq!(specs[1].breaks[0].to_string(), "21:00-22:00");
    }

    #[test]
    fn test_half_set_pairs_are_ignored() {
        let record: MentorScheduleConfig = serde_json::from_str(
            r#"{ "weekday_start": "19:00", "weekday_end": "24:00",
                 "sunday_evening_start": "19:00", "dinner_end": "22:00", "gap_minutes": 10 }"#,
        )
        .unwrap();
        let spec = record.to_spec("m1", CallType::Normal);
        assert!(spec.sunday_windows.is_empty());
        assert!(spec.breaks.is_empty());
        assert_eq!(spec.gap_minutes, 10);
    }

    #[test]
    fn test_gap_defaults_on_both_paths() {
        let specs = RosterConfig::from_json_str(ROSTER).unwrap().mentor_specs().unwrap();
        assert_eq!(specs[0].gap_minutes, DEFAULT_GAP);
        assert_eq!(specs[1].gap_minutes, DEFAULT_GAP);
    }

    #[test]
    fn test_mentor_gap_applies_to_schedule_record() {
        let roster = RosterConfig::from_json_str(
            r#"{ "mentors": [{ "id": "m1", "type": "normal", "gap_minutes": 30,
                 "schedule": { "weekday_start": "19:00", "weekday_end": "21:00" } }] }"#,
        )
        .unwrap();
        let specs = roster.mentor_specs().unwrap();
        assert_eq!(specs[0].gap_minutes, 30);
    }

    #[test]
    fn test_gap_on_mentor_and_record_is_misconfigured() {
        let roster = RosterConfig::from_json_str(
            r#"{ "mentors": [{ "id": "m1", "type": "normal", "gap_minutes": 30,
                 "schedule": { "weekday_start": "19:00", "weekday_end": "21:00", "gap_minutes": 5 } }] }"#,
        )
        .unwrap();
        match roster.mentor_specs().unwrap_err() {
            SchedulingError::MisconfiguredMentor { mentor_id, reason } => {
                assert_eq!(mentor_id, "m1");
                assert!(reason.contains("gap_minutes"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_call_type_is_misconfigured() {
        let roster = RosterConfig::from_json_str(
            r#"{ "mentors": [{ "id": "m9", "type": "coaching", "weekday_window": ["19:00", "20:00"] }] }"#,
        )
        .unwrap();
        match roster.mentor_specs().unwrap_err() {
            SchedulingError::MisconfiguredMentor { mentor_id, reason } => {
                assert_eq!(mentor_id, "m9");
                assert!(reason.contains("coaching"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_record_with_windows_is_misconfigured() {
        let roster = RosterConfig::from_json_str(
            r#"{ "mentors": [{ "id": "m1", "type": "normal",
                 "weekday_window": ["19:00", "20:00"],
                 "schedule": { "weekday_start": "19:00", "weekday_end": "20:00" } }] }"#,
        )
        .unwrap();
        assert!(matches!(
            roster.mentor_specs(),
            Err(SchedulingError::MisconfiguredMentor { .. })
        ));
    }

    #[test]
    fn test_bad_time_is_config_error() {
        let err = RosterConfig::from_json_str(
            r#"{ "mentors": [{ "id": "m1", "type": "normal", "weekday_window": ["19:00", "25:00"] }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, SchedulingError::Config(_)));
        assert!(err.to_string().contains("25:00"));
    }

    #[test]
    fn test_run() {
        let schedule = RosterConfig::from_json_str(ROSTER).unwrap().run().unwrap();
        assert_eq!(schedule.assignment_count(), 4);

        let s2 = schedule.assignments_for_student("s2");
        assert_eq!(s2.len(), 1);
        assert_eq!(s2[0].mentor_id, "a1");
        // s1's academic call landed on Wednesday; a1's Monday queue is untouched
        assert_eq!(s2[0].day, Weekday::Mon);
        assert_eq!(s2[0].start.to_string(), "19:00");
    }

    #[test]
    fn test_continue_policy_from_config() {
        let roster = RosterConfig::from_json_str(
            r#"{
                "students": [{ "id": "s1" }],
                "mentors": [{ "id": "n1", "type": "normal", "weekday_window": ["19:00", "20:00"] }],
                "scheduler": { "exhaustion_policy": "continue", "tie_breaker": "by_id" }
            }"#,
        )
        .unwrap();
        let schedule = roster.run().unwrap();
        assert_eq!(schedule.assignment_count(), 2);
        assert_eq!(schedule.unfilled.len(), 1);
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!("mentor-roster-{}.json", std::process::id()));
        File::create(&path).unwrap().write_all(ROSTER.as_bytes()).unwrap();

        let roster = RosterConfig::from_path(&path).unwrap();
        assert_eq!(roster.mentors.len(), 2);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            RosterConfig::from_path(&path),
            Err(SchedulingError::Io(_))
        ));
    }
}

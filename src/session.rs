use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::auth;
use crate::calc::{self, Category};
use crate::error::{SessionError, ValidationError};
use crate::input;
use crate::roster::{FilterState, Roster, Student};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LogoutPrompt {
    Idle,
    ConfirmPending,
}

/// State that only exists while logged in. Dropping it is the logout wipe.
#[derive(Debug)]
pub struct ActiveSession {
    pub id: Uuid,
    pub logged_in_at: DateTime<Utc>,
    pub roster: Roster,
    pub filter: FilterState,
    pub logout: LogoutPrompt,
}

impl ActiveSession {
    fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            logged_in_at: Utc::now(),
            roster: Roster::new(),
            filter: FilterState::default(),
            logout: LogoutPrompt::Idle,
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    active: Option<ActiveSession>,
    last_error: Option<ValidationError>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    fn active_mut(&mut self) -> Result<&mut ActiveSession, SessionError> {
        self.active.as_mut().ok_or(SessionError::NotAuthenticated)
    }

    /// Records the rejection so the next snapshot can render it.
    fn reject(&mut self, e: ValidationError) -> SessionError {
        warn!(code = e.code(), form = e.form(), "validation rejected");
        self.last_error = Some(e);
        SessionError::Validation(e)
    }

    pub fn attempt_login(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        if self.active.is_some() {
            return Err(SessionError::AlreadyAuthenticated);
        }
        if let Err(e) = auth::validate_credentials(username, password) {
            return Err(self.reject(e));
        }
        let active = ActiveSession::start();
        info!(
            session_id = %active.id,
            username = input::trim_form(username),
            "login accepted"
        );
        self.active = Some(active);
        self.last_error = None;
        Ok(())
    }

    pub fn add_student(&mut self, name: &str, raw_score: &str) -> Result<Student, SessionError> {
        let active = self.active_mut()?;
        match active.roster.add(name, raw_score) {
            Ok(student) => {
                info!(
                    session_id = %active.id,
                    student_id = student.id,
                    score = student.score,
                    "student added"
                );
                self.last_error = None;
                Ok(student)
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Ok(false) when the id is not in the roster.
    pub fn remove_student(&mut self, id: u64) -> Result<bool, SessionError> {
        let active = self.active_mut()?;
        let removed = active.roster.remove(id);
        if removed {
            info!(session_id = %active.id, student_id = id, "student removed");
        } else {
            debug!(session_id = %active.id, student_id = id, "remove ignored, no such student");
        }
        Ok(removed)
    }

    pub fn set_search_text(&mut self, text: &str) -> Result<(), SessionError> {
        let active = self.active_mut()?;
        active.filter.search_text = text.to_string();
        debug!(search = text, "search text changed");
        Ok(())
    }

    pub fn set_passing_only(&mut self, passing_only: bool) -> Result<(), SessionError> {
        let active = self.active_mut()?;
        active.filter.passing_only = passing_only;
        debug!(passing_only, "passing filter changed");
        Ok(())
    }

    pub fn request_logout(&mut self) -> Result<(), SessionError> {
        let active = self.active_mut()?;
        active.logout = LogoutPrompt::ConfirmPending;
        debug!(session_id = %active.id, "logout requested");
        Ok(())
    }

    pub fn cancel_logout(&mut self) -> Result<(), SessionError> {
        let active = self.active_mut()?;
        active.logout = LogoutPrompt::Idle;
        debug!(session_id = %active.id, "logout cancelled");
        Ok(())
    }

    pub fn confirm_logout(&mut self) -> Result<(), SessionError> {
        let active = self.active_mut()?;
        if active.logout != LogoutPrompt::ConfirmPending {
            return Err(SessionError::LogoutNotRequested);
        }
        if let Some(ended) = self.active.take() {
            info!(
                session_id = %ended.id,
                students = ended.roster.len(),
                "logged out, session wiped"
            );
        }
        self.last_error = None;
        Ok(())
    }

    /// Diagnostic only; never touches state.
    pub fn log_name(&self, name: &str) {
        info!(target: "rosterd::students", name, "log name");
    }

    pub fn filtered_students(&self) -> Vec<&Student> {
        match &self.active {
            Some(a) => a.roster.filtered(&a.filter).collect(),
            None => Vec::new(),
        }
    }

    pub fn snapshot(&self) -> SessionView {
        let last_error = self.last_error.map(ErrorView::from);
        let Some(a) = self.active() else {
            return SessionView {
                authenticated: false,
                session_id: None,
                logged_in_at: None,
                logout: None,
                filters: None,
                students: Vec::new(),
                visible: Vec::new(),
                total_count: 0,
                visible_count: 0,
                empty_hint: None,
                last_error,
            };
        };

        let visible: Vec<StudentView> = self
            .filtered_students()
            .into_iter()
            .map(StudentView::from)
            .collect();
        let empty_hint = if a.roster.is_empty() {
            Some(EmptyHint::NoStudents)
        } else if visible.is_empty() {
            Some(EmptyHint::AdjustFilters)
        } else {
            None
        };

        SessionView {
            authenticated: true,
            session_id: Some(a.id.to_string()),
            logged_in_at: Some(a.logged_in_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            logout: Some(a.logout),
            filters: Some(a.filter.clone()),
            students: a.roster.students().to_vec(),
            total_count: a.roster.len(),
            visible_count: visible.len(),
            visible,
            empty_hint,
            last_error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyHint {
    NoStudents,
    AdjustFilters,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentView {
    pub id: u64,
    pub name: String,
    pub score: u8,
    pub category: Category,
    pub category_label: &'static str,
    pub category_slug: &'static str,
    pub excellent: bool,
}

impl From<&Student> for StudentView {
    fn from(s: &Student) -> Self {
        let score = i64::from(s.score);
        let category = calc::classify(score);
        Self {
            id: s.id,
            name: s.name.clone(),
            score: s.score,
            category,
            category_label: category.label(),
            category_slug: category.slug(),
            excellent: calc::is_excellent(score),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorView {
    pub code: &'static str,
    pub form: &'static str,
    pub message: String,
}

impl From<ValidationError> for ErrorView {
    fn from(e: ValidationError) -> Self {
        Self {
            code: e.code(),
            form: e.form(),
            message: e.to_string(),
        }
    }
}

/// Everything the UI needs to render one frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub authenticated: bool,
    pub session_id: Option<String>,
    pub logged_in_at: Option<String>,
    pub logout: Option<LogoutPrompt>,
    pub filters: Option<FilterState>,
    pub students: Vec<Student>,
    pub visible: Vec<StudentView>,
    pub total_count: usize,
    pub visible_count: usize,
    pub empty_hint: Option<EmptyHint>,
    pub last_error: Option<ErrorView>,
}

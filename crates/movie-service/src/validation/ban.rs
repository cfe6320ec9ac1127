//! Ban creation and update rules

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use movie_core::traits::UserRepository;
use movie_core::{DomainError, Field, Id, NewBan, Role, Rule, Violations};

use super::present;

/// Ban fields as submitted, before any checks
#[derive(Debug, Clone, Default)]
pub struct BanDraft {
    pub user_id: Option<Id>,
    pub admin_id: Option<Id>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub reason: Option<String>,
}

impl BanDraft {
    /// The ban to insert, `None` while a field is still missing
    pub fn complete(self) -> Option<NewBan> {
        Some(NewBan {
            user_id: self.user_id?,
            admin_id: self.admin_id?,
            start_date: self.start_date?,
            end_date: self.end_date?,
            reason: self.reason.filter(|r| !r.is_empty())?,
        })
    }
}

/// Validates bans
#[derive(Debug, Clone, Copy, Default)]
pub struct BanValidator;

impl BanValidator {
    /// Check a ban about to be created
    #[instrument(skip_all, fields(user_id = ?draft.user_id, admin_id = ?draft.admin_id))]
    pub async fn validate_create(
        &self,
        users: &dyn UserRepository,
        draft: &BanDraft,
    ) -> Result<(), DomainError> {
        let mut violations = Violations::new();

        Self::check_party(
            users,
            draft.user_id,
            Party::Banned,
            &mut violations,
        )
        .await?;
        Self::check_party(
            users,
            draft.admin_id,
            Party::Issuer,
            &mut violations,
        )
        .await?;
        Self::check_dates(draft, &mut violations);
        if present(draft.reason.as_deref()).is_none() {
            violations.add(Field::Reason, Rule::Required, "Reason field is empty");
        }

        if !violations.is_empty() {
            debug!(count = violations.len(), "Ban creation rejected");
        }
        violations.finish(DomainError::CreateValidation)
    }

    /// Check a ban about to be updated. Only the dates are re-checked.
    ///
    /// Only the end date is persisted, so it must also follow the start
    /// date already stored for the ban.
    pub fn validate_update(
        &self,
        draft: &BanDraft,
        stored_start: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let mut violations = Violations::new();
        Self::check_dates(draft, &mut violations);
        if let Some(end) = draft.end_date {
            if end <= stored_start && !violations.contains(Field::EndDate, Rule::Ordering) {
                violations.add(
                    Field::EndDate,
                    Rule::Ordering,
                    "End date should be greater than start date",
                );
            }
        }
        violations.finish(DomainError::UpdateValidation)
    }

    async fn check_party(
        users: &dyn UserRepository,
        id: Option<Id>,
        party: Party,
        violations: &mut Violations,
    ) -> Result<(), DomainError> {
        let Some(id) = id else {
            violations.add(party.field(), Rule::Required, party.missing_message());
            return Ok(());
        };

        match users.find_by_id(id).await? {
            None => {
                violations.add(party.field(), Rule::NotFound, party.unknown_message());
            }
            Some(user) if user.role != party.role() => {
                violations.add(party.field(), Rule::WrongRole, party.wrong_role_message());
            }
            Some(_) => {}
        }
        Ok(())
    }

    fn check_dates(draft: &BanDraft, violations: &mut Violations) {
        if draft.start_date.is_none() {
            violations.add(Field::StartDate, Rule::Required, "Start date field is empty");
        }
        match (draft.start_date, draft.end_date) {
            (_, None) => {
                violations.add(Field::EndDate, Rule::Required, "End date field is empty");
            }
            (Some(start), Some(end)) if end <= start => {
                violations.add(
                    Field::EndDate,
                    Rule::Ordering,
                    "End date should be greater than start date",
                );
            }
            _ => {}
        }
    }
}

/// Which side of the ban a referenced user is on
#[derive(Debug, Clone, Copy)]
enum Party {
    Banned,
    Issuer,
}

impl Party {
    fn field(self) -> Field {
        match self {
            Self::Banned => Field::UserId,
            Self::Issuer => Field::AdminId,
        }
    }

    fn role(self) -> Role {
        match self {
            Self::Banned => Role::User,
            Self::Issuer => Role::Admin,
        }
    }

    fn missing_message(self) -> &'static str {
        match self {
            Self::Banned => "User id field is empty",
            Self::Issuer => "Admin id field is empty",
        }
    }

    fn unknown_message(self) -> &'static str {
        match self {
            Self::Banned => "No user with such id",
            Self::Issuer => "No admin with such id",
        }
    }

    fn wrong_role_message(self) -> &'static str {
        match self {
            Self::Banned => "Not a user role",
            Self::Issuer => "Not an admin role",
        }
    }
}

//! Access-control gate
//!
//! Every route is bound to a [`Command`]. Public commands pass straight
//! through; every other command needs a valid, unexpired session. A rejected
//! request is sent to the sign-in form with the message `Authorization needed`
//! and goes no further. Admin checks are made by the services themselves.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use movie_common::{AppError, SessionService};
use movie_core::{Id, Role};

/// Operation a route performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    SignInForm,
    SignIn,
    SignOut,
    CreateUserForm,
    CreateUser,
    Users,
    User,
    EditUser,
    DeleteUser,
    ChangeRole,
    Films,
    Film,
    CreateFilm,
    EditFilm,
    DeleteFilm,
    FilmScores,
    RateFilm,
    UserScores,
    DeleteScore,
    Bans,
    CreateBan,
    Ban,
    EditBan,
    DeleteBan,
    UserBans,
    AdminBans,
    Error,
}

impl Command {
    pub const ALL: [Command; 27] = [
        Self::SignInForm,
        Self::SignIn,
        Self::SignOut,
        Self::CreateUserForm,
        Self::CreateUser,
        Self::Users,
        Self::User,
        Self::EditUser,
        Self::DeleteUser,
        Self::ChangeRole,
        Self::Films,
        Self::Film,
        Self::CreateFilm,
        Self::EditFilm,
        Self::DeleteFilm,
        Self::FilmScores,
        Self::RateFilm,
        Self::UserScores,
        Self::DeleteScore,
        Self::Bans,
        Self::CreateBan,
        Self::Ban,
        Self::EditBan,
        Self::DeleteBan,
        Self::UserBans,
        Self::AdminBans,
        Self::Error,
    ];

    /// Commands reachable without a session
    pub const PUBLIC: [Command; 7] = [
        Self::Users,
        Self::User,
        Self::SignInForm,
        Self::SignIn,
        Self::CreateUserForm,
        Self::CreateUser,
        Self::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignInForm => "sign_in_form",
            Self::SignIn => "sign_in",
            Self::SignOut => "sign_out",
            Self::CreateUserForm => "create_user_form",
            Self::CreateUser => "create_user",
            Self::Users => "users",
            Self::User => "user",
            Self::EditUser => "edit_user",
            Self::DeleteUser => "delete_user",
            Self::ChangeRole => "change_role",
            Self::Films => "films",
            Self::Film => "film",
            Self::CreateFilm => "create_film",
            Self::EditFilm => "edit_film",
            Self::DeleteFilm => "delete_film",
            Self::FilmScores => "film_scores",
            Self::RateFilm => "rate_film",
            Self::UserScores => "user_scores",
            Self::DeleteScore => "delete_score",
            Self::Bans => "bans",
            Self::CreateBan => "create_ban",
            Self::Ban => "ban",
            Self::EditBan => "edit_ban",
            Self::DeleteBan => "delete_ban",
            Self::UserBans => "user_bans",
            Self::AdminBans => "admin_bans",
            Self::Error => "error",
        }
    }

    #[inline]
    pub fn is_public(&self) -> bool {
        Self::PUBLIC.contains(self)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Signed-in user a request acts as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Id,
    /// Role at sign-in time
    pub role: Role,
}

impl Principal {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Outcome of a passed gate check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub command: Command,
    /// `None` for public commands reached without a session
    pub principal: Option<Principal>,
}

/// Why a session was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Missing,
    Invalid,
    Expired,
}

/// A refused request
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Authorization needed")]
pub struct GateRejection {
    pub command: Command,
    pub reason: RejectReason,
}

impl GateRejection {
    /// Message shown on the sign-in form
    pub const MESSAGE: &'static str = "Authorization needed";

    /// Where the client is sent instead
    pub fn redirect(&self) -> Command {
        Command::SignInForm
    }
}

/// Checks sessions against the public command set
#[derive(Debug, Clone, Copy)]
pub struct AccessGate<'a> {
    sessions: &'a SessionService,
}

impl<'a> AccessGate<'a> {
    pub fn new(sessions: &'a SessionService) -> Self {
        Self { sessions }
    }

    /// Admit or refuse a request for `command` carrying `token`.
    ///
    /// A public command never fails. It still resolves the principal when a
    /// valid token is present, and ignores a bad one.
    pub fn check(&self, command: Command, token: Option<&str>) -> Result<Access, GateRejection> {
        let principal = token.filter(|t| !t.is_empty()).map(|t| self.principal(t));

        if command.is_public() {
            return Ok(Access {
                command,
                principal: principal.and_then(Result::ok),
            });
        }

        match principal {
            Some(Ok(principal)) => Ok(Access {
                command,
                principal: Some(principal),
            }),
            Some(Err(reason)) => {
                debug!(%command, ?reason, "Session refused");
                Err(GateRejection { command, reason })
            }
            None => {
                debug!(%command, "No session");
                Err(GateRejection {
                    command,
                    reason: RejectReason::Missing,
                })
            }
        }
    }

    fn principal(&self, token: &str) -> Result<Principal, RejectReason> {
        let claims = self.sessions.verify(token).map_err(|e| match e {
            AppError::TokenExpired => RejectReason::Expired,
            _ => RejectReason::Invalid,
        })?;
        let user_id = claims.user_id().map_err(|_| RejectReason::Invalid)?;
        Ok(Principal {
            user_id,
            role: claims.role,
        })
    }
}

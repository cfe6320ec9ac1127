//! In-memory repository fakes for service tests

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use movie_common::{MediaConfig, PaginationConfig, SessionService};
use movie_core::traits::{BanRepository, FilmRepository, ScoreRepository, UserRepository};
use movie_core::{
    AgeRating, Ban, DomainError, Film, Id, NewBan, NewFilm, NewUser, RepoResult, Role, Score,
    User,
};

use crate::services::{ServiceContext, ServiceContextBuilder};

pub const TEST_SECRET: &str = "test-session-secret";

/// Row wrapper carrying the soft-delete flag
#[derive(Debug, Clone)]
struct Row<T> {
    value: T,
    deleted: bool,
}

/// Shared storage for one fake table
#[derive(Debug)]
struct Table<T> {
    rows: Mutex<Vec<Row<T>>>,
    next_id: AtomicI64,
    failing: AtomicBool,
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            failing: AtomicBool::new(false),
        }
    }
}

impl<T: Clone> Table<T> {
    fn next_id(&self) -> Id {
        Id::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn guard(&self) -> RepoResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(DomainError::DatabaseError("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn push(&self, value: T) {
        self.rows.lock().push(Row {
            value,
            deleted: false,
        });
    }

    fn live(&self) -> Vec<T> {
        self.rows
            .lock()
            .iter()
            .filter(|row| !row.deleted)
            .map(|row| row.value.clone())
            .collect()
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.live().into_iter().find(|v| pred(v))
    }

    fn filtered(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.live().into_iter().filter(|v| pred(v)).collect()
    }

    /// Apply `f` to the live row matching `pred`, `false` when none matched
    fn modify(&self, pred: impl Fn(&T) -> bool, f: impl FnOnce(&mut T)) -> bool {
        let mut rows = self.rows.lock();
        match rows.iter_mut().find(|row| !row.deleted && pred(&row.value)) {
            Some(row) => {
                f(&mut row.value);
                true
            }
            None => false,
        }
    }

    fn mark_deleted(&self, pred: impl Fn(&T) -> bool) -> bool {
        let mut rows = self.rows.lock();
        match rows.iter_mut().find(|row| !row.deleted && pred(&row.value)) {
            Some(row) => {
                row.deleted = true;
                true
            }
            None => false,
        }
    }
}

fn page<T>(items: Vec<T>, limit: i64, offset: i64) -> Vec<T> {
    let offset = usize::try_from(offset).unwrap_or(0);
    let limit = usize::try_from(limit).unwrap_or(0);
    items.into_iter().skip(offset).take(limit).collect()
}

fn count<T>(items: &[T]) -> i64 {
    i64::try_from(items.len()).unwrap_or(i64::MAX)
}

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct InMemoryUsers {
    table: Arc<Table<User>>,
}

impl InMemoryUsers {
    /// Store a user with a throwaway password hash
    pub fn insert(&self, email: &str, login: &str, role: Role) -> Id {
        self.insert_with_hash(email, login, role, "not-a-real-hash")
    }

    pub fn insert_with_hash(&self, email: &str, login: &str, role: Role, hash: &str) -> Id {
        let id = self.table.next_id();
        let now = Utc::now();
        self.table.push(User {
            id,
            email: email.to_string(),
            login: login.to_string(),
            password_hash: hash.to_string(),
            registered_at: now,
            info: None,
            reputation: 0,
            avatar: None,
            role,
            last_update: now,
        });
        id
    }

    pub fn soft_delete(&self, id: Id) {
        self.table.mark_deleted(|u| u.id == id);
    }

    pub fn set_failing(&self, failing: bool) {
        self.table.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        self.table.guard()?;
        Ok(self.table.find(|u| u.id == id))
    }

    async fn find_by_login(&self, login: &str) -> RepoResult<Option<User>> {
        self.table.guard()?;
        Ok(self.table.find(|u| u.login == login))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.table.guard()?;
        Ok(self.table.find(|u| u.email == email))
    }

    async fn find_all(&self, limit: i64, offset: i64) -> RepoResult<Vec<User>> {
        self.table.guard()?;
        Ok(page(self.table.live(), limit, offset))
    }

    async fn count(&self) -> RepoResult<i64> {
        self.table.guard()?;
        Ok(count(&self.table.live()))
    }

    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        self.table.guard()?;
        if self.table.find(|u| u.email == user.email).is_some() {
            return Err(DomainError::EmailAlreadyExists);
        }
        if self.table.find(|u| u.login == user.login).is_some() {
            return Err(DomainError::LoginAlreadyExists);
        }
        let id = self.insert_with_hash(&user.email, &user.login, user.role, &user.password_hash);
        self.table.modify(
            |u| u.id == id,
            |u| {
                u.info.clone_from(&user.info);
                u.avatar.clone_from(&user.avatar);
            },
        );
        self.table
            .find(|u| u.id == id)
            .ok_or(DomainError::UserNotFound(id))
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        self.table.guard()?;
        let updated = self.table.modify(
            |u| u.id == user.id,
            |u| {
                *u = User {
                    last_update: Utc::now(),
                    ..user.clone()
                };
            },
        );
        if updated {
            Ok(())
        } else {
            Err(DomainError::UserNotFound(user.id))
        }
    }

    async fn update_role(&self, id: Id, role: Role) -> RepoResult<()> {
        self.table.guard()?;
        if self.table.modify(|u| u.id == id, |u| u.role = role) {
            Ok(())
        } else {
            Err(DomainError::UserNotFound(id))
        }
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        self.table.guard()?;
        if self.table.mark_deleted(|u| u.id == id) {
            Ok(())
        } else {
            Err(DomainError::UserNotFound(id))
        }
    }
}

// ============================================================================
// Bans
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct InMemoryBans {
    table: Arc<Table<Ban>>,
}

impl InMemoryBans {
    pub fn insert(
        &self,
        user_id: Id,
        admin_id: Id,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Id {
        let id = self.table.next_id();
        self.table.push(Ban {
            id,
            user_id,
            admin_id,
            start_date: start,
            end_date: end,
            reason: "test".to_string(),
            last_update: Utc::now(),
        });
        id
    }

    pub fn soft_delete(&self, id: Id) {
        self.table.mark_deleted(|b| b.id == id);
    }

    pub fn set_failing(&self, failing: bool) {
        self.table.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl BanRepository for InMemoryBans {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Ban>> {
        self.table.guard()?;
        Ok(self.table.find(|b| b.id == id))
    }

    async fn find_all(&self, limit: i64, offset: i64) -> RepoResult<Vec<Ban>> {
        self.table.guard()?;
        Ok(page(self.table.live(), limit, offset))
    }

    async fn find_by_user(&self, user_id: Id, limit: i64, offset: i64) -> RepoResult<Vec<Ban>> {
        self.table.guard()?;
        Ok(page(self.table.filtered(|b| b.user_id == user_id), limit, offset))
    }

    async fn find_by_admin(
        &self,
        admin_id: Id,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Ban>> {
        self.table.guard()?;
        Ok(page(self.table.filtered(|b| b.admin_id == admin_id), limit, offset))
    }

    async fn count(&self) -> RepoResult<i64> {
        self.table.guard()?;
        Ok(count(&self.table.live()))
    }

    async fn count_by_user(&self, user_id: Id) -> RepoResult<i64> {
        self.table.guard()?;
        Ok(count(&self.table.filtered(|b| b.user_id == user_id)))
    }

    async fn count_by_admin(&self, admin_id: Id) -> RepoResult<i64> {
        self.table.guard()?;
        Ok(count(&self.table.filtered(|b| b.admin_id == admin_id)))
    }

    async fn is_banned(&self, user_id: Id, now: DateTime<Utc>) -> RepoResult<bool> {
        self.table.guard()?;
        Ok(self
            .table
            .find(|b| b.user_id == user_id && b.is_active_at(now))
            .is_some())
    }

    async fn create(&self, ban: &NewBan) -> RepoResult<Ban> {
        self.table.guard()?;
        let id = self.insert(ban.user_id, ban.admin_id, ban.start_date, ban.end_date);
        self.table.modify(|b| b.id == id, |b| b.reason.clone_from(&ban.reason));
        self.table
            .find(|b| b.id == id)
            .ok_or(DomainError::BanNotFound(id))
    }

    async fn update_end_date(&self, id: Id, end_date: DateTime<Utc>) -> RepoResult<()> {
        self.table.guard()?;
        if self.table.modify(|b| b.id == id, |b| b.end_date = end_date) {
            Ok(())
        } else {
            Err(DomainError::BanNotFound(id))
        }
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        self.table.guard()?;
        if self.table.mark_deleted(|b| b.id == id) {
            Ok(())
        } else {
            Err(DomainError::BanNotFound(id))
        }
    }
}

// ============================================================================
// Films
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct InMemoryFilms {
    table: Arc<Table<Film>>,
}

impl InMemoryFilms {
    pub fn insert(&self, title: &str) -> Id {
        let id = self.table.next_id();
        self.table.push(Film {
            id,
            title: title.to_string(),
            description: None,
            release_year: 1999,
            length: 120,
            age_rating: AgeRating::PG13,
            poster: None,
        });
        id
    }
}

#[async_trait]
impl FilmRepository for InMemoryFilms {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Film>> {
        self.table.guard()?;
        Ok(self.table.find(|f| f.id == id))
    }

    async fn find_all(&self, limit: i64, offset: i64) -> RepoResult<Vec<Film>> {
        self.table.guard()?;
        Ok(page(self.table.live(), limit, offset))
    }

    async fn count(&self) -> RepoResult<i64> {
        self.table.guard()?;
        Ok(count(&self.table.live()))
    }

    async fn create(&self, film: &NewFilm) -> RepoResult<Film> {
        self.table.guard()?;
        let id = self.table.next_id();
        let stored = film_from(id, film);
        self.table.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: Id, film: &NewFilm) -> RepoResult<()> {
        self.table.guard()?;
        if self.table.modify(|f| f.id == id, |f| *f = film_from(id, film)) {
            Ok(())
        } else {
            Err(DomainError::FilmNotFound(id))
        }
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        self.table.guard()?;
        if self.table.mark_deleted(|f| f.id == id) {
            Ok(())
        } else {
            Err(DomainError::FilmNotFound(id))
        }
    }
}

fn film_from(id: Id, film: &NewFilm) -> Film {
    Film {
        id,
        title: film.title.clone(),
        description: film.description.clone(),
        release_year: film.release_year,
        length: film.length,
        age_rating: film.age_rating,
        poster: film.poster.clone(),
    }
}

// ============================================================================
// Scores
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct InMemoryScores {
    table: Arc<Table<Score>>,
}

impl InMemoryScores {
    pub fn insert(&self, film_id: Id, user_id: Id, value: i32) -> Id {
        let id = self.table.next_id();
        let now = Utc::now();
        self.table.push(Score {
            id,
            film_id,
            user_id,
            value,
            created_at: now,
            last_update: now,
        });
        id
    }

    pub fn soft_delete(&self, id: Id) {
        self.table.mark_deleted(|s| s.id == id);
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScores {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Score>> {
        self.table.guard()?;
        Ok(self.table.find(|s| s.id == id))
    }

    async fn find_by_film_and_user(&self, film_id: Id, user_id: Id) -> RepoResult<Option<Score>> {
        self.table.guard()?;
        Ok(self
            .table
            .find(|s| s.film_id == film_id && s.user_id == user_id))
    }

    async fn find_by_film(&self, film_id: Id, limit: i64, offset: i64) -> RepoResult<Vec<Score>> {
        self.table.guard()?;
        Ok(page(self.table.filtered(|s| s.film_id == film_id), limit, offset))
    }

    async fn find_by_user(&self, user_id: Id, limit: i64, offset: i64) -> RepoResult<Vec<Score>> {
        self.table.guard()?;
        Ok(page(self.table.filtered(|s| s.user_id == user_id), limit, offset))
    }

    async fn count_by_film(&self, film_id: Id) -> RepoResult<i64> {
        self.table.guard()?;
        Ok(count(&self.table.filtered(|s| s.film_id == film_id)))
    }

    async fn count_by_user(&self, user_id: Id) -> RepoResult<i64> {
        self.table.guard()?;
        Ok(count(&self.table.filtered(|s| s.user_id == user_id)))
    }

    async fn average_for_film(&self, film_id: Id) -> RepoResult<Option<f64>> {
        self.table.guard()?;
        let scores = self.table.filtered(|s| s.film_id == film_id);
        if scores.is_empty() {
            return Ok(None);
        }
        let sum: i32 = scores.iter().map(|s| s.value).sum();
        Ok(Some(f64::from(sum) / scores.len() as f64))
    }

    async fn create(&self, film_id: Id, user_id: Id, value: i32) -> RepoResult<Score> {
        self.table.guard()?;
        if self
            .table
            .find(|s| s.film_id == film_id && s.user_id == user_id)
            .is_some()
        {
            return Err(DomainError::AlreadyScored);
        }
        let id = self.insert(film_id, user_id, value);
        self.table
            .find(|s| s.id == id)
            .ok_or(DomainError::ScoreNotFound(id))
    }

    async fn update_value(&self, id: Id, value: i32) -> RepoResult<()> {
        self.table.guard()?;
        if self.table.modify(|s| s.id == id, |s| s.value = value) {
            Ok(())
        } else {
            Err(DomainError::ScoreNotFound(id))
        }
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        self.table.guard()?;
        if self.table.mark_deleted(|s| s.id == id) {
            Ok(())
        } else {
            Err(DomainError::ScoreNotFound(id))
        }
    }
}

// ============================================================================
// Context
// ============================================================================

/// Handles to the fakes behind a test context
#[derive(Debug, Default, Clone)]
pub struct Fakes {
    pub users: InMemoryUsers,
    pub bans: InMemoryBans,
    pub films: InMemoryFilms,
    pub scores: InMemoryScores,
}

impl Fakes {
    pub fn context(&self) -> ServiceContext {
        ServiceContextBuilder::new()
            .user_repo(Arc::new(self.users.clone()))
            .ban_repo(Arc::new(self.bans.clone()))
            .film_repo(Arc::new(self.films.clone()))
            .score_repo(Arc::new(self.scores.clone()))
            .session_service(Arc::new(SessionService::new(TEST_SECRET, 3600)))
            .media(MediaConfig::default())
            .pagination(PaginationConfig::default())
            .build()
            .expect("all dependencies provided")
    }
}

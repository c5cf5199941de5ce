//! Link lifecycle service: creation, partial updates, and expiry-aware
//! resolution backing the redirect path.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{
    Link, LinkPatch, LinkRecord, LinkUpdate, NewLink, parse_stored_timestamp,
};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeExists, MAX_TRIES, generate_unique_code};
use crate::utils::target_url::validate_target_url;

/// Service orchestrating code generation, validation, and shaping of stored
/// rows into the public [`LinkRecord`] model.
///
/// The service is stateless; the store is the only shared mutable resource
/// and every operation is one logical unit of work against it.
pub struct LinkService<R: LinkRepository + CodeExists> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: LinkRepository + CodeExists> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix short URLs are built from; a trailing
    /// slash is stripped so shaping can always join with `/`.
    pub fn new(repository: Arc<R>, base_url: String) -> Self {
        Self {
            repository,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a short link for `target_url`.
    ///
    /// Obtains a collision-checked code, then inserts a record with
    /// `click_count = 0` and `created_at = now` (UTC).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL fails the scheme check.
    /// Returns [`AppError::Conflict`] if the unlikely fallback code still
    /// collides with an existing row.
    pub async fn create(
        &self,
        target_url: String,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<LinkRecord, AppError> {
        validate_target_url(&target_url)?;

        let code = generate_unique_code(self.repository.as_ref(), MAX_TRIES).await?;

        let link = self
            .repository
            .insert(NewLink {
                short_code: code,
                target_url,
                created_at: Utc::now(),
                expires_at,
            })
            .await?;

        Ok(self.shape(&link))
    }

    /// Retrieves a link by its short code.
    ///
    /// Expired links are returned as data; detail views report on a link,
    /// they do not resolve it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get(&self, code: &str) -> Result<LinkRecord, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))?;

        Ok(self.shape(&link))
    }

    /// Lists links newest-first with limit/offset pagination.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<LinkRecord>, AppError> {
        let links = self.repository.list(limit, offset).await?;

        Ok(links.iter().map(|link| self.shape(link)).collect())
    }

    /// Applies a partial update.
    ///
    /// Fields left unspecified in [`LinkUpdate`] are untouched; `expires_at`
    /// may be explicitly cleared. When no field is marked for change the
    /// current record is returned without touching the store. On mutation
    /// the freshly reloaded row is returned, not a locally patched copy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Validation`] if a supplied `target_url` fails the
    /// scheme check, or if `target_url` is explicitly null (a link always
    /// has a destination).
    pub async fn update(&self, code: &str, update: LinkUpdate) -> Result<LinkRecord, AppError> {
        if update.is_noop() {
            return self.get(code).await;
        }

        let target_url = match update.target_url {
            None => None,
            Some(None) => {
                return Err(AppError::bad_request(
                    "target_url cannot be null",
                    json!({ "code": code }),
                ));
            }
            Some(Some(url)) => {
                validate_target_url(&url)?;
                Some(url)
            }
        };

        let patch = LinkPatch {
            target_url,
            expires_at: update.expires_at,
        };

        let link = self
            .repository
            .update_fields(code, patch)
            .await?
            .ok_or_else(|| not_found(code))?;

        Ok(self.shape(&link))
    }

    /// Removes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        if !self.repository.delete(code).await? {
            return Err(not_found(code));
        }

        Ok(())
    }

    /// Resolves a short code for a redirect.
    ///
    /// On success the click counter and `last_access_at` are advanced in one
    /// atomic store operation and the post-increment record is returned, so
    /// a redirect response and anything auditing it see consistent values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Expired`] if the link is past its expiry; the
    /// record is not mutated in that case.
    pub async fn resolve(&self, code: &str) -> Result<LinkRecord, AppError> {
        self.resolve_at(code, Utc::now()).await
    }

    /// Resolution against an explicit clock, used by [`Self::resolve`] and
    /// by tests pinning the expiry boundary.
    ///
    /// Expiry is fail-safe: a stored `expires_at` that cannot be parsed is
    /// treated as expired, and the boundary is inclusive (`expires_at == now`
    /// is expired).
    pub async fn resolve_at(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<LinkRecord, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))?;

        if let Some(raw) = &link.expires_at {
            match parse_stored_timestamp(raw) {
                Some(expires_at) if expires_at > now => {}
                _ => {
                    return Err(AppError::expired(
                        "Link has expired",
                        json!({ "code": code }),
                    ));
                }
            }
        }

        let updated = self
            .repository
            .increment_click_and_touch(code, now)
            .await?
            .ok_or_else(|| not_found(code))?;

        Ok(self.shape(&updated))
    }

    /// Shapes a stored row into the public representation.
    ///
    /// Stored ISO-8601 text is parsed into structured timestamps; optional
    /// values that are absent or unparsable become `None`.
    fn shape(&self, link: &Link) -> LinkRecord {
        LinkRecord {
            short_code: link.short_code.clone(),
            target_url: link.target_url.clone(),
            short_url: format!("{}/{}", self.base_url, link.short_code),
            created_at: parse_stored_timestamp(&link.created_at).unwrap_or_default(),
            expires_at: link
                .expires_at
                .as_deref()
                .and_then(parse_stored_timestamp),
            click_count: link.click_count,
            last_access_at: link
                .last_access_at
                .as_deref()
                .and_then(parse_stored_timestamp),
        }
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Short code not found", json!({ "code": code }))
}

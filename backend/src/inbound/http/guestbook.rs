//! Guestbook API handlers.
//!
//! ```text
//! GET /data?size=<all|N>
//! POST /data  (form fields: name, user-comment)
//! ```
//!
//! The listing response is a JSON array whose first element is always the
//! caller's identity payload; the caller-side UI depends on that position.
//! Anonymous callers receive a plain-text login URL instead of comment data.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    CallerIdentity, Comment, CommentSubmission, Error, FeedPage, ListingLimit, MAIN_PAGE_PATH,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Identity payload serialized as the first element of the listing array.
///
/// Field names are part of the caller-side contract; do not rename.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdentityEntry {
    /// Caller display name.
    pub name: String,
    /// Stable identifier from the identity provider.
    pub id: String,
    /// Logout redirect URL.
    pub logout_url: String,
}

impl From<CallerIdentity> for IdentityEntry {
    fn from(value: CallerIdentity) -> Self {
        Self {
            name: value.display_name,
            id: value.stable_id,
            logout_url: value.logout_url,
        }
    }
}

/// Comment payload serialized after the identity entry.
///
/// Field names are part of the caller-side contract; do not rename.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentEntry {
    /// Author display name.
    pub user_name: String,
    /// Comment text.
    pub user_comment: String,
    /// Submission time in milliseconds since the Unix epoch.
    pub comment_timestamp: i64,
    /// Store-assigned comment identifier.
    pub comment_id: i64,
}

impl From<Comment> for CommentEntry {
    fn from(value: Comment) -> Self {
        Self {
            user_name: value.author().to_string(),
            user_comment: value.body().to_string(),
            comment_timestamp: value.created_at(),
            comment_id: value.id().value(),
        }
    }
}

/// Element of the combined listing array: identity first, comments after.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum FeedEntry {
    /// The identity payload.
    Identity(IdentityEntry),
    /// A stored comment.
    Comment(CommentEntry),
}

/// Query parameters accepted by `GET /data`.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListingParams {
    /// `all` or the maximum number of comments to return; absent means all.
    pub size: Option<String>,
}

fn invalid_size_error(value: &str) -> Error {
    Error::invalid_request("size must be \"all\" or a non-negative integer").with_details(json!({
        "field": "size",
        "value": value,
        "code": "invalid_size",
    }))
}

fn missing_field_error(field: &'static str) -> Error {
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

fn feed_entries(caller: CallerIdentity, comments: Vec<Comment>) -> Vec<FeedEntry> {
    let mut entries = Vec::with_capacity(comments.len() + 1);
    entries.push(FeedEntry::Identity(IdentityEntry::from(caller)));
    entries.extend(comments.into_iter().map(|c| FeedEntry::Comment(CommentEntry::from(c))));
    entries
}

/// List the guestbook feed for the current caller.
///
/// Authenticated callers receive a JSON array with their identity payload
/// first and the most recent comments after it; anonymous callers receive a
/// plain-text login URL and never any comment data.
#[utoipa::path(
    get,
    path = "/data",
    params(ListingParams),
    responses(
        (status = 200, description = "Identity-prefixed comment array, or a login URL for anonymous callers"),
        (status = 400, description = "Invalid size parameter", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Comment store unavailable", body = Error)
    ),
    tags = ["guestbook"],
    operation_id = "listComments"
)]
#[get("/data")]
pub async fn list_feed(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<ListingParams>,
) -> ApiResult<HttpResponse> {
    let claims = session.claims()?;
    let limit = ListingLimit::from_query(params.size.as_deref())
        .map_err(|err| invalid_size_error(err.raw()))?;

    match state.query.list_feed(&claims, limit).await? {
        FeedPage::LoginRequired { login_url } => Ok(HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(login_url)),
        FeedPage::Entries { caller, comments } => {
            Ok(HttpResponse::Ok().json(feed_entries(caller, comments)))
        }
    }
}

/// Form body accepted by `POST /data`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentForm {
    /// Author display name.
    pub name: Option<String>,
    /// Comment text.
    #[serde(rename = "user-comment")]
    pub user_comment: Option<String>,
}

/// Accept a comment submission and redirect back to the main page.
#[utoipa::path(
    post,
    path = "/data",
    request_body(content = CommentForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Comment stored; redirect to the main page"),
        (status = 400, description = "Missing or blank form field", body = Error),
        (status = 503, description = "Comment store unavailable", body = Error)
    ),
    tags = ["guestbook"],
    operation_id = "postComment"
)]
#[post("/data")]
pub async fn post_comment(
    state: web::Data<HttpState>,
    form: web::Form<CommentForm>,
) -> ApiResult<HttpResponse> {
    let CommentForm { name, user_comment } = form.into_inner();
    let author = name.ok_or_else(|| missing_field_error("name"))?;
    let body = user_comment.ok_or_else(|| missing_field_error("user-comment"))?;

    state
        .command
        .post_comment(CommentSubmission { author, body })
        .await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, MAIN_PAGE_PATH))
        .finish())
}

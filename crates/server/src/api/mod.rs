use shared::{
    domain::{UserId, UserRecord},
    error::ApiError,
    protocol::{DeleteUserResponse, NewUser, UserUpdate},
};
use storage::Storage;
use tracing::info;

pub const INCOMPLETE_USER_MESSAGE: &str = "user's fields can't be empty";

#[derive(Clone)]
pub struct ApiContext {
    pub storage: Storage,
}

/// Resolves the `{user_id}` path segment.
///
/// Anything other than ASCII digits does not name a user route at all and is
/// reported as `NotFound`; a numeric id that is zero or overflows is a
/// validation failure.
pub fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::not_found(format!("no user route for id '{raw}'")));
    }
    let id = raw
        .parse::<i64>()
        .map_err(|e| ApiError::validation(format!("user id '{raw}' is out of range: {e}")))?;
    if id <= 0 {
        return Err(ApiError::validation(
            "user id can't be equal to or less than zero",
        ));
    }
    Ok(UserId(id))
}

/// Both names must be non-empty and the age positive before anything is stored.
fn ensure_complete(name: &str, surname: &str, age: i64) -> Result<(), ApiError> {
    if name.is_empty() || surname.is_empty() || age <= 0 {
        return Err(ApiError::validation(INCOMPLETE_USER_MESSAGE));
    }
    Ok(())
}

pub async fn list_users(ctx: &ApiContext) -> Result<Vec<UserRecord>, ApiError> {
    ctx.storage.list_users().await.map_err(internal)
}

pub async fn get_user(ctx: &ApiContext, user_id: UserId) -> Result<UserRecord, ApiError> {
    ctx.storage
        .get_user(user_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| ApiError::not_found(format!("user {user_id} not found")))
}

pub async fn create_user(ctx: &ApiContext, user: &NewUser) -> Result<UserRecord, ApiError> {
    ensure_complete(&user.name, &user.surname, user.age)?;
    let record = ctx.storage.create_user(user).await.map_err(internal)?;
    info!(user_id = record.id.0, "user created");
    Ok(record)
}

pub async fn update_user(
    ctx: &ApiContext,
    user_id: UserId,
    changes: &UserUpdate,
) -> Result<UserRecord, ApiError> {
    ensure_complete(&changes.name, &changes.surname, changes.age)?;
    if let Some(body_id) = changes.id {
        if body_id != user_id {
            tracing::debug!(
                path_id = user_id.0,
                body_id = body_id.0,
                "update body id differs from path; path wins"
            );
        }
    }
    let record = ctx
        .storage
        .update_user(user_id, changes)
        .await
        .map_err(internal)?
        .ok_or_else(|| ApiError::not_found(format!("user {user_id} not found")))?;
    info!(user_id = user_id.0, "user updated");
    Ok(record)
}

pub async fn delete_user(
    ctx: &ApiContext,
    user_id: UserId,
) -> Result<DeleteUserResponse, ApiError> {
    let removed = ctx.storage.delete_user(user_id).await.map_err(internal)?;
    info!(user_id = user_id.0, removed, "user delete handled");
    Ok(DeleteUserResponse::deleted())
}

fn internal(err: anyhow::Error) -> ApiError {
    ApiError::internal(format!("{err:#}"))
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;

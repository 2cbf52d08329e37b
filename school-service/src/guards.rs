use common_auth::Claims;
use common_http_errors::ApiError;

use crate::store::{CollectionStore, ROLE_ADMIN};

/// Allows the wrapped operation only when the verified identity maps to an
/// admin user record. Must run after token verification; the `Claims`
/// argument only exists once a credential has been verified.
pub async fn require_admin(
    store: &dyn CollectionStore,
    claims: &Claims,
) -> Result<(), ApiError> {
    let user = store
        .find_user_by_email(&claims.email)
        .await
        .map_err(ApiError::store)?;

    match user {
        Some(user) if user.role == ROLE_ADMIN => Ok(()),
        _ => Err(ApiError::forbidden()),
    }
}

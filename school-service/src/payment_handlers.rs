use axum::extract::State;
use axum::Json;
use bigdecimal::BigDecimal;
use chrono::Utc;
use common_auth::AuthContext;
use common_http_errors::{ApiError, ApiResult, JsonBody};
use common_money::{minor_units, normalize_scale};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use uuid::Uuid;

use crate::app::AppState;
use crate::responses::InsertResponse;
use crate::store::PaymentRecord;

fn default_currency() -> String {
    "usd".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateIntentRequest {
    pub price: BigDecimal,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewPayment {
    pub email: String,
    pub amount: BigDecimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub transaction_id: String,
    pub cart_item_ids: Vec<Uuid>,
}

/// Asks the provider for an intent covering `price` major units and hands the
/// client-usable secret back for out-of-band authorization.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    _auth: AuthContext,
    JsonBody(req): JsonBody<CreateIntentRequest>,
) -> ApiResult<Json<CreateIntentResponse>> {
    let amount_minor = minor_units(&req.price).ok_or_else(|| {
        ApiError::validation("price must be a non-negative amount with at most two decimals")
    })?;

    let intent = state
        .gateway
        .create_intent(amount_minor, &req.currency)
        .await
        .map_err(ApiError::payment_provider)?;

    Ok(Json(CreateIntentResponse {
        client_secret: intent.client_secret,
    }))
}

/// Records a completed payment, then sweeps the reconciled cart entries.
/// The two writes are not transactional: a failure between them leaves the
/// payment stored with stale cart entries, which is logged rather than
/// silently dropped.
pub async fn record_payment(
    State(state): State<AppState>,
    _auth: AuthContext,
    JsonBody(req): JsonBody<NewPayment>,
) -> ApiResult<Json<InsertResponse>> {
    if req.email.trim().is_empty() {
        return Err(ApiError::validation("email must not be empty"));
    }

    let payment = PaymentRecord {
        id: Uuid::new_v4(),
        email: req.email,
        amount: normalize_scale(&req.amount),
        currency: req.currency,
        transaction_id: req.transaction_id,
        cart_item_ids: req.cart_item_ids,
        created_at: Utc::now(),
    };
    let payment_id = payment.id;
    let referenced = payment.cart_item_ids.clone();

    state
        .store
        .insert_payment(payment)
        .await
        .map_err(ApiError::store)?;

    let deleted = match state.store.delete_cart_items(&referenced).await {
        Ok(deleted) => deleted,
        Err(err) => {
            error!(
                payment_id = %payment_id,
                error = %err,
                "payment recorded but cart sweep failed; reconciled cart entries remain"
            );
            return Err(ApiError::store(err));
        }
    };

    if deleted as usize != referenced.len() {
        warn!(
            payment_id = %payment_id,
            referenced = referenced.len(),
            deleted,
            "cart sweep removed fewer entries than the payment references"
        );
    }

    Ok(Json(InsertResponse {
        inserted_id: payment_id,
    }))
}

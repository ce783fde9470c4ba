//! REST API helpers for the account service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since account creation is
//! only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::form::controller::SubmitError;
use crate::net::types::NewUser;

#[cfg(any(test, feature = "hydrate"))]
fn users_endpoint() -> &'static str {
    "/users"
}

/// Create an account via `POST /users`.
///
/// # Errors
///
/// `SubmitError::Request` on transport or serialization failure,
/// `SubmitError::Status` when the service answers with a non-success status.
pub async fn create_user(user: &NewUser) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(users_endpoint())
            .json(user)
            .map_err(|e| SubmitError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(SubmitError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
        Err(SubmitError::Request("not available on server".to_owned()))
    }
}

//! Bearer-token verification. Tokens are minted by the identity service that
//! shares `JWT_SECRET`; this service only checks them.

mod claims;
mod extractors;

pub use extractors::AuthUser;

#[cfg(test)]
pub(crate) fn test_token(state: &crate::state::AppState, user_id: uuid::Uuid) -> String {
    sign_for_test(state, user_id, claims::TokenKind::Access)
}

#[cfg(test)]
fn sign_for_test(
    state: &crate::state::AppState,
    user_id: uuid::Uuid,
    kind: claims::TokenKind,
) -> String {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let cfg = &state.config.jwt;
    let now = time::OffsetDateTime::now_utc().unix_timestamp() as usize;
    let claims = claims::Claims {
        sub: user_id,
        iat: now,
        exp: now + 300,
        iss: cfg.issuer.clone(),
        aud: cfg.audience.clone(),
        kind,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.secret.as_bytes()),
    )
    .expect("sign test token")
}

//! View selection header
//!
//! `X-Public: true` asks for the public projection of user records. Any
//! other value, or no header at all, selects the private projection.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderName, HeaderValue},
};
use axum_extra::{headers, TypedHeader};

static X_PUBLIC: HeaderName = HeaderName::from_static("x-public");

/// Typed `X-Public` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XPublic(pub bool);

impl headers::Header for XPublic {
    fn name() -> &'static HeaderName {
        &X_PUBLIC
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        Ok(Self(value.as_bytes() == b"true"))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        let value = if self.0 { "true" } else { "false" };
        values.extend(std::iter::once(HeaderValue::from_static(value)));
    }
}

/// Whether the caller asked for the public view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicView(pub bool);

#[async_trait]
impl<S> FromRequestParts<S> for PublicView
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = TypedHeader::<XPublic>::from_request_parts(parts, state).await;
        Ok(Self(matches!(header, Ok(TypedHeader(XPublic(true))))))
    }
}

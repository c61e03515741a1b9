/// Build the `Authorization` header value for a bearer token.
///
/// No validation of the token contents; callers pass whatever
/// credential the client presented.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Movie ids are random (v4) UUIDs, serialized in canonical hyphenated form.
pub type MovieId = uuid::Uuid;

/// Generate a fresh id for a newly created record.
pub fn new_movie_id() -> MovieId {
    uuid::Uuid::new_v4()
}

/// Parse an id received from a client.
///
/// Only the canonical 36-character lowercase hyphenated form is accepted, so
/// lookups compare ids exactly as they were handed out.
pub fn parse_movie_id(raw: &str) -> Option<MovieId> {
    if raw.len() != 36 || raw.bytes().any(|b| b.is_ascii_uppercase()) {
        return None;
    }
    uuid::Uuid::try_parse(raw).ok()
}

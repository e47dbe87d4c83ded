/// Opaque record identifier. Unique per process lifetime, never reused.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Allocate a fresh record identifier.
///
/// UUIDv7 keeps ids roughly time-ordered, which makes log output easier to
/// follow; nothing relies on that ordering.
pub fn new_id() -> DbId {
    uuid::Uuid::now_v7()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generated_ids_are_pairwise_distinct() {
        let ids: HashSet<DbId> = (0..10_000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }
}

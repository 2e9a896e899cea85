// Identifier helpers.
//
// Document ids are UUIDv7 so that ordering by id matches insertion order,
// which is the order history is returned in. Session ids are random v4
// values handed out to clients and carry no ordering.

use uuid::Uuid;

/// Generate a new UUIDv7 (timestamp-sortable).
pub fn uuidv7() -> Uuid {
    Uuid::now_v7()
}

/// Generate a fresh session identifier.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuidv7_is_valid() {
        let id = uuidv7();
        assert_eq!(id.get_version(), Some(uuid::Version::SortRand));
    }

    #[test]
    fn uuidv7_is_monotonic() {
        let a = uuidv7();
        let b = uuidv7();
        assert!(b >= a);
    }

    #[test]
    fn session_ids_are_random_v4() {
        let a = new_session_id();
        let b = new_session_id();
        assert_ne!(a, b);

        let parsed = Uuid::parse_str(&a).expect("session id parses as uuid");
        assert_eq!(parsed.get_version(), Some(uuid::Version::Random));
    }
}

//! Record identifier generation.
//!
//! Snapshot records use the `<prefix>-<millis>-<hex4>` scheme the persisted
//! sessions were written with. Uniqueness is probabilistic (timestamp plus a
//! short random suffix), which is sufficient for single-user session data.

use rand::Rng;

/// Builds an id of the form `<prefix>-<millis>-<hex4>`.
pub fn record_id(prefix: &str) -> String {
    format!("{}-{}", prefix, session_id())
}

/// Builds an unprefixed id of the form `<millis>-<hex4>`, used for
/// session-level ids assigned on first save.
pub fn session_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix = rand::thread_rng().gen_range(0u32..=0xffff);
    format!("{}-{:04x}", millis, suffix)
}

/// Builds a connection id from its endpoints.
pub fn connection_id(from: &str, to: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    format!("{}-{}-{}", from, to, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_shape() {
        let id = record_id("action");
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "action");
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 4);
    }

    #[test]
    fn test_connection_id_carries_endpoints() {
        let id = connection_id("a", "b");
        assert!(id.starts_with("a-b-"));
    }
}

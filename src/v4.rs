//! UUIDv4-related functionality

use crate::Uuid;

/// Generates a UUIDv4 object using [`uuid::Uuid::new_v4`].
///
/// # Examples
///
/// ```rust
/// let uuid = uuid6::uuid4();
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// assert_eq!(uuid.version(), Some(4));
/// ```
pub fn uuid4() -> Uuid {
    Uuid::from(uuid::Uuid::new_v4())
}

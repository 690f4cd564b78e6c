//! JSON serialization glue shared across modules.

/// Types that can round-trip through JSON strings with a module-specific
/// error type.
///
/// The error parameter lets each boundary (persistence, interchange) map
/// `serde_json::Error` into its own taxonomy; see the blanket impl in
/// [`crate::persistence`].
pub trait JsonSerializable<E>: serde::Serialize + for<'de> serde::de::DeserializeOwned {
    /// Serialize this value to a JSON string.
    fn to_json_string(&self) -> Result<String, E>;

    /// Deserialize a value from a JSON string.
    fn from_json_str(s: &str) -> Result<Self, E>;
}

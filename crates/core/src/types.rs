/// Owner identifiers are numeric on the remote side.
pub type OwnerId = i64;

/// Card identifiers arrive as strings or integers from the remote store;
/// they are normalized to strings on decode.
pub type CardId = String;

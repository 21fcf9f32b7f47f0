use rand::Rng;

/// Mint a new entity id with a readable prefix ("session-3f2a9c1d04e6b870").
///
/// Ids only need to be unique within one device's collections; 64 random
/// bits is plenty for that without coordinating with the backend.
pub fn new_id(prefix: &str) -> String {
    let suffix: u64 = rand::thread_rng().gen();
    format!("{}-{:016x}", prefix, suffix)
}

//! JSON load/save over a [`Slot`], with the board's failure policy:
//! a load that fails for any reason hands back the caller's fallback,
//! and a save that fails is reported and swallowed. In-memory state
//! stays authoritative for the session either way.

use crate::storage::Slot;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read and deserialize the slot, or return `fallback` if the slot is
/// absent, unreadable, or holds something that is not valid for `T`.
pub fn load_or<S: Slot, T: DeserializeOwned>(slot: &S, fallback: T) -> T {
    match slot.read() {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or(fallback),
        Ok(None) => fallback,
        Err(_) => fallback,
    }
}

/// Serialize `value` and write it to the slot. Best-effort: a failure
/// goes to stderr and the call returns normally.
pub fn save<S: Slot, T: Serialize>(slot: &S, value: &T) {
    let raw = match serde_json::to_string_pretty(value) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("failed to serialize board state: {err}");
            return;
        }
    };

    if let Err(err) = slot.write(&raw) {
        eprintln!("failed to write board state: {err}");
    }
}

//! Fresh record ids.
//!
//! Ids are random (version 4) UUID strings whose bytes come from the injected
//! random source, so a seeded generator makes them reproducible in tests.
//! Every character is random, which keeps short prefixes usable as handles.

use rand::Rng;
use uuid::Builder;

pub fn fresh_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.gen();
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}

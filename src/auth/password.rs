// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Password digests in the format the contract stores.

use md5::{Digest, Md5};

/// Lowercase hex MD5 of `plain`, as written by `CreateParticipant`.
pub fn hash_password(plain: &str) -> String {
    hex::encode(Md5::digest(plain.as_bytes()))
}

/// Compare a submitted password against a stored digest, byte for byte.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    hash_password(plain) == stored_hash
}

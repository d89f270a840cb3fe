//! This module lists the domain seperators of the scheme.

// salt of HKDF-Extract during key derivation
pub const DOM_SEP_KEYGEN_SALT: &str = "BLS-SIG-KEYGEN-SALT-";

//! Container format for yjcrypt.
//!
//! A container is a single file laid out as:
//!
//! ```text
//! offset 0   signature  8 bytes, fixed ASCII constant
//! offset 8   nonce      12 bytes, random per encryption
//! offset 20  ciphertext variable, 16-byte authentication tag at the end
//! ```
//!
//! There are no length fields; every boundary is implied by the fixed
//! field widths and the cipher's fixed tag size.

pub mod codec;

pub use codec::{decode, encode, probe_is_container};
pub use codec::{FILE_EXTENSION, NONCE_LEN, SIGNATURE, SIGNATURE_LEN};

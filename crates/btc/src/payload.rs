use bitcoin::script::PushBytesBuf;
use xchain_primitives::DomainId;

use crate::errors::BuildError;

/// Largest `OP_RETURN` payload relayed by standard nodes.
pub const MAX_OP_RETURN_LEN: usize = 80;

/// Bytes carried in a deposit's `OP_RETURN` output: `<destination>_<domain id>`.
pub fn deposit_payload(destination: &str, domain: DomainId) -> Result<PushBytesBuf, BuildError> {
    let data = format!("{destination}_{domain}").into_bytes();
    let len = data.len();
    if len > MAX_OP_RETURN_LEN {
        return Err(BuildError::PayloadTooLong {
            len,
            max: MAX_OP_RETURN_LEN,
        });
    }
    PushBytesBuf::try_from(data).map_err(|_| BuildError::PayloadTooLong {
        len,
        max: MAX_OP_RETURN_LEN,
    })
}

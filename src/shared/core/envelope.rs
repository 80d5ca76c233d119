// Uniform response wrapper for every JSON-bearing endpoint.
//
// `code` is 0 on success and 1 on a domain-level failure. The payload type
// is chosen per endpoint; `()` serializes as `null`.

use serde::Serialize;

pub const CODE_SUCCESS: i32 = 0;
pub const CODE_FAILURE: i32 = 1;

const MSG_SUCCESS: &str = "success";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Envelope<T> {
    pub code: i32,
    pub msg: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: CODE_SUCCESS,
            msg: MSG_SUCCESS.to_string(),
            data,
        }
    }
}

impl Envelope<()> {
    pub fn empty() -> Self {
        Self::success(())
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            code: CODE_FAILURE,
            msg: msg.into(),
            data: (),
        }
    }
}

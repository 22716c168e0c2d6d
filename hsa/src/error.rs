//! # Hsa error
//!
//! Status checking for runtime calls. Any non-success status carries the
//! runtime's own description, fetched with `hsa_status_string`.

use hsa_sys::bindings::{hsa_status_string, hsa_status_t, hsa_status_t_HSA_STATUS_SUCCESS};
use std::ffi::CStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum HsaError {
    // hsa runtime status code plus the vendor description
    #[error("hsa status {status:#x}: {description}")]
    Status { status: u32, description: String },

    #[error("invalid utf-8 in a runtime string")]
    InvalidString(#[from] std::string::FromUtf8Error),
}

pub type HsaResult<T> = Result<T, HsaError>;

// CHECK(status)
pub fn hsa_check(status: hsa_status_t) -> HsaResult<()> {
    if hsa_status_t_HSA_STATUS_SUCCESS == status {
        Ok(())
    } else {
        Err(HsaError::Status {
            status,
            description: status_description(status),
        })
    }
}

fn status_description(status: hsa_status_t) -> String {
    let mut ptr: *const std::os::raw::c_char = std::ptr::null();

    let ret = unsafe { hsa_status_string(status, &mut ptr) };

    if ret != hsa_status_t_HSA_STATUS_SUCCESS || ptr.is_null() {
        return "unknown hsa status".to_string();
    }

    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_ok() {
        assert_eq!(hsa_check(hsa_status_t_HSA_STATUS_SUCCESS), Ok(()));
    }

    #[test]
    fn test_status_error_display() {
        let err = HsaError::Status {
            status: 0x1000,
            description: "generic error".to_string(),
        };

        assert_eq!(err.to_string(), "hsa status 0x1000: generic error");
    }
}

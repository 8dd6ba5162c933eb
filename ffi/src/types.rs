//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Answer content that the core
//! decoded into a JSON value is re-serialized to JSON text, with
//! `content_decoded` telling the caller which shape it got. Conversion
//! functions live here to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use grepper_core::{Answer, ApiError, HttpMethod, UpdateResult};

/// Opaque handle to an `AnswerApi`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiGrepperClient {
    pub(crate) inner: grepper_core::AnswerApi,
}

/// Copy `s` into a heap C string, dropping interior NULs.
pub(crate) fn to_c_string(s: &str) -> *mut c_char {
    CString::new(s.replace('\0', ""))
        .unwrap_or_default()
        .into_raw()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `grepper_build_*` functions. `url` already carries the encoded
/// query string and `body` (null for GET) the encoded form. The C caller
/// executes the request and passes the response back through
/// `grepper_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: grepper_core::HttpRequest) -> *mut Self {
        let url = to_c_string(&req.url);
        let body = match req.body {
            Some(b) => to_c_string(&b),
            None => std::ptr::null_mut(),
        };

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Box<[FfiHeader]> = req
                .headers
                .iter()
                .map(|(k, v)| FfiHeader {
                    key: to_c_string(k),
                    value: to_c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers).cast::<FfiHeader>()
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            url,
            headers,
            headers_len,
            body,
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP request,
/// then passes a pointer to a `grepper_parse_*` function. The FFI layer reads
/// but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiGrepperResult` and through `err_out`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    MissingCredential = 1,
    EmptyQuery = 2,
    InvalidSimilarity = 3,
    InvalidAnswerId = 4,
    /// Any non-200 status; the code is in `http_status`.
    Http = 5,
    Deserialization = 6,
    Transport = 7,
    Panic = 8,
    NullArg = 9,
    /// A string argument or response body was not valid UTF-8.
    InvalidUtf8 = 10,
}

impl From<&ApiError> for FfiErrorCode {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::MissingCredential => FfiErrorCode::MissingCredential,
            ApiError::EmptyQuery => FfiErrorCode::EmptyQuery,
            ApiError::InvalidSimilarity => FfiErrorCode::InvalidSimilarity,
            ApiError::InvalidAnswerId => FfiErrorCode::InvalidAnswerId,
            ApiError::Deserialization(_) => FfiErrorCode::Deserialization,
            ApiError::Transport(_) => FfiErrorCode::Transport,
            _ => FfiErrorCode::Http,
        }
    }
}

/// Tag that tells `grepper_free_result` what `FfiGrepperResult::data` points to.
#[repr(C)]
pub enum FfiDataTag {
    None = 0,
    Answer = 1,
    AnswerList = 2,
    UpdateAck = 3,
}

/// A single answer exposed to C.
///
/// `content` holds the raw text when `content_decoded` is false, otherwise
/// the decoded value serialized as JSON.
#[repr(C)]
pub struct FfiAnswer {
    pub id: u64,
    pub content: *mut c_char,
    pub content_decoded: bool,
    pub title: *mut c_char,
    pub author_name: *mut c_char,
    pub author_profile_url: *mut c_char,
    pub upvotes: i64,
    pub downvotes: i64,
    pub object: *mut c_char,
}

impl FfiAnswer {
    fn from_core(answer: Answer) -> Self {
        let (content, content_decoded) = match answer.content_text() {
            Some(text) => (to_c_string(text), false),
            None => (to_c_string(&answer.content.to_string()), true),
        };
        FfiAnswer {
            id: answer.id,
            content,
            content_decoded,
            title: to_c_string(&answer.title),
            author_name: to_c_string(&answer.author_name),
            author_profile_url: to_c_string(&answer.author_profile_url),
            upvotes: answer.upvotes,
            downvotes: answer.downvotes,
            object: to_c_string(&answer.object),
        }
    }
}

/// A list of answers exposed to C, in service order.
#[repr(C)]
pub struct FfiAnswerList {
    pub items: *mut FfiAnswer,
    pub len: u32,
}

/// Update acknowledgement exposed to C.
///
/// `success_raw` is the `success` field exactly as sent, as JSON text
/// (e.g. `"true"` including the quotes).
#[repr(C)]
pub struct FfiUpdateAck {
    pub id: u64,
    pub success: bool,
    pub success_raw: *mut c_char,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, `http_status` is set for HTTP failures, and
/// `data` is null.
#[repr(C)]
pub struct FfiGrepperResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiGrepperResult {
    fn ok(data_tag: FfiDataTag, data: *mut std::ffi::c_void) -> *mut Self {
        Box::into_raw(Box::new(FfiGrepperResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag,
            data,
        }))
    }

    fn err(error_code: FfiErrorCode, http_status: u16, msg: &str) -> *mut Self {
        Box::into_raw(Box::new(FfiGrepperResult {
            error_code,
            error_message: to_c_string(msg),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }))
    }

    /// Build a success result carrying a single `FfiAnswer`.
    pub(crate) fn ok_answer(answer: Answer) -> *mut Self {
        let ffi_answer = Box::new(FfiAnswer::from_core(answer));
        Self::ok(FfiDataTag::Answer, Box::into_raw(ffi_answer).cast())
    }

    /// Build a success result carrying a `FfiAnswerList`.
    pub(crate) fn ok_answer_list(answers: Vec<Answer>) -> *mut Self {
        let len = answers.len() as u32;
        let items = if answers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_answers: Box<[FfiAnswer]> =
                answers.into_iter().map(FfiAnswer::from_core).collect();
            Box::into_raw(ffi_answers).cast::<FfiAnswer>()
        };

        let ffi_list = Box::new(FfiAnswerList { items, len });
        Self::ok(FfiDataTag::AnswerList, Box::into_raw(ffi_list).cast())
    }

    /// Build a success result carrying an `FfiUpdateAck`.
    pub(crate) fn ok_update_ack(ack: UpdateResult) -> *mut Self {
        let ffi_ack = Box::new(FfiUpdateAck {
            id: ack.id,
            success: ack.is_success(),
            success_raw: to_c_string(&ack.success.to_string()),
        });
        Self::ok(FfiDataTag::UpdateAck, Box::into_raw(ffi_ack).cast())
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_error(err: &ApiError) -> *mut Self {
        Self::err(err.into(), err.status().unwrap_or(0), &err.to_string())
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::err(FfiErrorCode::NullArg, 0, &format!("null argument: {name}"))
    }

    /// Build an error result for a string that is not valid UTF-8.
    pub(crate) fn invalid_utf8(name: &str) -> *mut Self {
        Self::err(FfiErrorCode::InvalidUtf8, 0, &format!("invalid UTF-8: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::err(FfiErrorCode::Panic, 0, msg)
    }
}

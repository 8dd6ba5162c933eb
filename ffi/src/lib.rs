//! C-ABI wrapper around `grepper-core`.
//!
//! # Overview
//! Exposes the answers API through `extern "C"` functions so any language
//! with a C FFI can build requests and parse responses without linking to a
//! Rust HTTP stack. The host executes every request itself.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - `grepper_build_*` / `grepper_parse_*` mirror `AnswerApi` 1:1. Build
//!   functions return null on failure and report why through `err_out`.
//! - A single `FfiGrepperResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `grepper_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use grepper_core::{AnswerApi, ApiError, ClientConfig, HttpRequest, HttpResponse};

use types::*;

/// Borrow a C string as `&str`.
///
/// # Safety
/// `s` must be non-null and point to a NUL-terminated string that outlives
/// the returned reference.
unsafe fn str_arg<'a>(s: *const c_char) -> Result<&'a str, FfiErrorCode> {
    unsafe { CStr::from_ptr(s) }
        .to_str()
        .map_err(|_| FfiErrorCode::InvalidUtf8)
}

fn write_err(err_out: *mut FfiErrorCode, code: FfiErrorCode) {
    if !err_out.is_null() {
        unsafe { *err_out = code };
    }
}

/// Turn a build outcome into the C return convention.
fn finish_build(
    built: Result<HttpRequest, ApiError>,
    err_out: *mut FfiErrorCode,
) -> *mut FfiHttpRequest {
    match built {
        Ok(req) => {
            write_err(err_out, FfiErrorCode::Ok);
            FfiHttpRequest::from_core(req)
        }
        Err(e) => {
            write_err(err_out, FfiErrorCode::from(&e));
            std::ptr::null_mut()
        }
    }
}

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new client.
///
/// `base_url` may be null to use the production host. `api_key` may be null
/// (set it later with `grepper_client_set_api_key`); requests built without
/// a key fail with `MissingCredential`.
/// Returns null if either string is not valid UTF-8.
/// The caller must free the returned pointer with `grepper_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn grepper_client_new(
    base_url: *const c_char,
    api_key: *const c_char,
) -> *mut FfiGrepperClient {
    catch_unwind(|| {
        let mut config = ClientConfig::new();
        if !base_url.is_null() {
            let Ok(base_url) = (unsafe { str_arg(base_url) }) else {
                return std::ptr::null_mut();
            };
            config = config.with_base_url(base_url);
        }
        if !api_key.is_null() {
            let Ok(api_key) = (unsafe { str_arg(api_key) }) else {
                return std::ptr::null_mut();
            };
            config = config.with_api_key(api_key);
        }
        Box::into_raw(Box::new(FfiGrepperClient {
            inner: AnswerApi::new(config),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Replace the client's API key. A null or empty key clears it.
/// Must not be called while another thread uses `client`.
///
/// Returns `NullArg` for a null client and `InvalidUtf8` (key unchanged)
/// for a key that is not valid UTF-8.
#[unsafe(no_mangle)]
pub extern "C" fn grepper_client_set_api_key(
    client: *mut FfiGrepperClient,
    api_key: *const c_char,
) -> FfiErrorCode {
    if client.is_null() {
        return FfiErrorCode::NullArg;
    }
    catch_unwind(|| {
        let client = unsafe { &mut *client };
        let key = if api_key.is_null() {
            ""
        } else {
            match unsafe { str_arg(api_key) } {
                Ok(key) => key,
                Err(code) => return code,
            }
        };
        client.inner.set_api_key(key);
        FfiErrorCode::Ok
    })
    .unwrap_or(FfiErrorCode::Panic)
}

/// Free a client created by `grepper_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn grepper_client_free(client: *mut FfiGrepperClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build a search request. Pass 60 as `similarity` for the service default.
///
/// Returns null if `client` or `query` is null (`NullArg`), `query` is not
/// valid UTF-8 (`InvalidUtf8`), or the inputs are rejected. The caller must
/// free the returned pointer with `grepper_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn grepper_build_search(
    client: *const FfiGrepperClient,
    query: *const c_char,
    similarity: i32,
    err_out: *mut FfiErrorCode,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || query.is_null() {
            write_err(err_out, FfiErrorCode::NullArg);
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let query = match unsafe { str_arg(query) } {
            Ok(query) => query,
            Err(code) => {
                write_err(err_out, code);
                return std::ptr::null_mut();
            }
        };
        finish_build(client.inner.build_search(query, similarity), err_out)
    })
    .unwrap_or_else(|_| {
        write_err(err_out, FfiErrorCode::Panic);
        std::ptr::null_mut()
    })
}

/// Build a request fetching one answer.
///
/// Returns null if `client` is null or `id` is not positive.
#[unsafe(no_mangle)]
pub extern "C" fn grepper_build_retrieve(
    client: *const FfiGrepperClient,
    id: i64,
    err_out: *mut FfiErrorCode,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            write_err(err_out, FfiErrorCode::NullArg);
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        finish_build(client.inner.build_retrieve(id), err_out)
    })
    .unwrap_or_else(|_| {
        write_err(err_out, FfiErrorCode::Panic);
        std::ptr::null_mut()
    })
}

/// Build a request replacing an answer's content.
///
/// Returns null if `client` or `content` is null, `content` is not valid
/// UTF-8, or `id` is not positive.
#[unsafe(no_mangle)]
pub extern "C" fn grepper_build_update(
    client: *const FfiGrepperClient,
    id: i64,
    content: *const c_char,
    err_out: *mut FfiErrorCode,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || content.is_null() {
            write_err(err_out, FfiErrorCode::NullArg);
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let content = match unsafe { str_arg(content) } {
            Ok(content) => content,
            Err(code) => {
                write_err(err_out, code);
                return std::ptr::null_mut();
            }
        };
        finish_build(client.inner.build_update(id, content), err_out)
    })
    .unwrap_or_else(|_| {
        write_err(err_out, FfiErrorCode::Panic);
        std::ptr::null_mut()
    })
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body reads
/// as empty.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> Result<HttpResponse, FfiErrorCode> {
    let body = if resp.body.is_null() {
        ""
    } else {
        unsafe { str_arg(resp.body) }?
    };
    Ok(HttpResponse::new(resp.status, body))
}

/// Shared null checks and conversion for the parse entry points.
fn parse_with(
    client: *const FfiGrepperClient,
    response: *const FfiHttpResponse,
    parse: impl FnOnce(&AnswerApi, HttpResponse) -> *mut FfiGrepperResult,
) -> *mut FfiGrepperResult {
    if client.is_null() {
        return FfiGrepperResult::null_arg("client");
    }
    if response.is_null() {
        return FfiGrepperResult::null_arg("response");
    }
    let client = unsafe { &*client };
    let resp = unsafe { &*response };
    match ffi_response_to_core(resp) {
        Ok(resp) => parse(&client.inner, resp),
        Err(_) => FfiGrepperResult::invalid_utf8("response body"),
    }
}

/// Parse the response to a search request.
///
/// Returns a result with `data_tag = AnswerList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn grepper_parse_search(
    client: *const FfiGrepperClient,
    response: *const FfiHttpResponse,
) -> *mut FfiGrepperResult {
    catch_unwind(|| {
        parse_with(client, response, |api, resp| match api.parse_search(resp) {
            Ok(answers) => FfiGrepperResult::ok_answer_list(answers),
            Err(e) => FfiGrepperResult::from_error(&e),
        })
    })
    .unwrap_or_else(|_| FfiGrepperResult::panic("panic in grepper_parse_search"))
}

/// Parse the response to a retrieve request.
///
/// Returns a result with `data_tag = Answer` on success.
#[unsafe(no_mangle)]
pub extern "C" fn grepper_parse_retrieve(
    client: *const FfiGrepperClient,
    response: *const FfiHttpResponse,
) -> *mut FfiGrepperResult {
    catch_unwind(|| {
        parse_with(client, response, |api, resp| match api.parse_retrieve(resp) {
            Ok(answer) => FfiGrepperResult::ok_answer(answer),
            Err(e) => FfiGrepperResult::from_error(&e),
        })
    })
    .unwrap_or_else(|_| FfiGrepperResult::panic("panic in grepper_parse_retrieve"))
}

/// Parse the response to an update request.
///
/// Returns a result with `data_tag = UpdateAck` on success.
#[unsafe(no_mangle)]
pub extern "C" fn grepper_parse_update(
    client: *const FfiGrepperClient,
    response: *const FfiHttpResponse,
) -> *mut FfiGrepperResult {
    catch_unwind(|| {
        parse_with(client, response, |api, resp| match api.parse_update(resp) {
            Ok(ack) => FfiGrepperResult::ok_update_ack(ack),
            Err(e) => FfiGrepperResult::from_error(&e),
        })
    })
    .unwrap_or_else(|_| FfiGrepperResult::panic("panic in grepper_parse_update"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Free an `FfiHttpRequest` returned by any `grepper_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn grepper_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.url);
        free_c_string(req.body);
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    req.headers,
                    req.headers_len as usize,
                ))
            };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    });
}

/// Free an `FfiGrepperResult` returned by any `grepper_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn grepper_free_result(result: *mut FfiGrepperResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::Answer => {
                let answer = unsafe { Box::from_raw(result.data.cast::<FfiAnswer>()) };
                free_ffi_answer_fields(&answer);
            }
            FfiDataTag::AnswerList => {
                let list = unsafe { Box::from_raw(result.data.cast::<FfiAnswerList>()) };
                if !list.items.is_null() && list.len > 0 {
                    let items = unsafe {
                        Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                            list.items,
                            list.len as usize,
                        ))
                    };
                    for item in items.iter() {
                        free_ffi_answer_fields(item);
                    }
                }
            }
            FfiDataTag::UpdateAck => {
                let ack = unsafe { Box::from_raw(result.data.cast::<FfiUpdateAck>()) };
                free_c_string(ack.success_raw);
            }
            FfiDataTag::None => {}
        }
    });
}

/// Free the C-string fields of an `FfiAnswer` (but not the struct itself).
fn free_ffi_answer_fields(answer: &FfiAnswer) {
    free_c_string(answer.content);
    free_c_string(answer.title);
    free_c_string(answer.author_name);
    free_c_string(answer.author_profile_url);
    free_c_string(answer.object);
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::{CStr, CString};

    const ANSWER: &str = r#"{"id":12,"content":"{\"a\":1}","title":"loop","author_name":"ann","author_profile_url":"u","upvotes":3,"downvotes":1,"object":"answer"}"#;

    fn new_client(key: Option<&str>) -> *mut FfiGrepperClient {
        let url = CString::new("http://localhost:3000").unwrap();
        let key = key.map(|k| CString::new(k).unwrap());
        grepper_client_new(
            url.as_ptr(),
            key.as_ref().map_or(std::ptr::null(), |k| k.as_ptr()),
        )
    }

    fn c_str<'a>(p: *const c_char) -> &'a str {
        unsafe { CStr::from_ptr(p) }.to_str().unwrap()
    }

    #[test]
    fn client_new_and_free() {
        let client = new_client(Some("key"));
        assert!(!client.is_null());
        grepper_client_free(client);
    }

    #[test]
    fn client_new_with_nulls_uses_defaults() {
        let client = grepper_client_new(std::ptr::null(), std::ptr::null());
        assert!(!client.is_null());
        let mut err = FfiErrorCode::Ok;
        let req = grepper_build_retrieve(client, 1, &mut err);
        assert!(req.is_null());
        assert_eq!(err, FfiErrorCode::MissingCredential);
        grepper_client_free(client);
    }

    #[test]
    fn client_free_null_is_safe() {
        grepper_client_free(std::ptr::null_mut());
    }

    #[test]
    fn set_api_key_enables_requests() {
        let client = new_client(None);
        let key = CString::new("late").unwrap();
        assert_eq!(grepper_client_set_api_key(client, key.as_ptr()), FfiErrorCode::Ok);

        let mut err = FfiErrorCode::Panic;
        let req = grepper_build_retrieve(client, 1, &mut err);
        assert!(!req.is_null());
        assert_eq!(err, FfiErrorCode::Ok);

        grepper_free_request(req);
        grepper_client_free(client);
    }

    #[test]
    fn build_search_returns_correct_request() {
        let client = new_client(Some("key"));
        let query = CString::new("loop array").unwrap();
        let req = grepper_build_search(client, query.as_ptr(), 60, std::ptr::null_mut());
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        assert!(matches!(req_ref.method, FfiHttpMethod::Get));
        assert_eq!(
            c_str(req_ref.url),
            "http://localhost:3000/v1/answers/search?query=loop%20array&similarity=60"
        );
        assert!(req_ref.body.is_null());
        assert_eq!(req_ref.headers_len, 2);

        let headers =
            unsafe { std::slice::from_raw_parts(req_ref.headers, req_ref.headers_len as usize) };
        assert_eq!(c_str(headers[0].key), "authorization");
        assert_eq!(c_str(headers[0].value), "Basic a2V5Og==");

        grepper_free_request(req);
        grepper_client_free(client);
    }

    #[test]
    fn build_search_reports_validation_errors() {
        let client = new_client(Some("key"));
        let empty = CString::new("").unwrap();
        let query = CString::new("x").unwrap();
        let mut err = FfiErrorCode::Ok;

        assert!(grepper_build_search(client, empty.as_ptr(), 60, &mut err).is_null());
        assert_eq!(err, FfiErrorCode::EmptyQuery);

        assert!(grepper_build_search(client, query.as_ptr(), 101, &mut err).is_null());
        assert_eq!(err, FfiErrorCode::InvalidSimilarity);

        assert!(grepper_build_search(client, std::ptr::null(), 60, &mut err).is_null());
        assert_eq!(err, FfiErrorCode::NullArg);

        grepper_client_free(client);
    }

    #[test]
    fn build_retrieve_rejects_non_positive_id() {
        let client = new_client(Some("key"));
        let mut err = FfiErrorCode::Ok;
        assert!(grepper_build_retrieve(client, 0, &mut err).is_null());
        assert_eq!(err, FfiErrorCode::InvalidAnswerId);
        assert!(grepper_build_retrieve(client, -5, &mut err).is_null());
        assert_eq!(err, FfiErrorCode::InvalidAnswerId);
        grepper_client_free(client);
    }

    #[test]
    fn build_update_produces_post_with_form_body() {
        let client = new_client(Some("key"));
        let content = CString::new("new text").unwrap();
        let req = grepper_build_update(client, 12, content.as_ptr(), std::ptr::null_mut());
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        assert!(matches!(req_ref.method, FfiHttpMethod::Post));
        assert_eq!(c_str(req_ref.url), "http://localhost:3000/v1/answers/12");
        assert_eq!(c_str(req_ref.body), "answer%5Bcontent%5D=new%20text");

        grepper_free_request(req);
        grepper_client_free(client);
    }

    #[test]
    fn build_update_rejects_invalid_utf8_content() {
        let client = new_client(Some("key"));
        let content = CStr::from_bytes_with_nul(b"caf\xe9 latte\0").unwrap();
        let mut err = FfiErrorCode::Ok;
        let req = grepper_build_update(client, 12, content.as_ptr(), &mut err);
        assert!(req.is_null());
        assert_eq!(err, FfiErrorCode::InvalidUtf8);
        grepper_client_free(client);
    }

    #[test]
    fn build_search_rejects_invalid_utf8_query() {
        let client = new_client(Some("key"));
        let query = CStr::from_bytes_with_nul(b"\xff\xfe\0").unwrap();
        let mut err = FfiErrorCode::Ok;
        assert!(grepper_build_search(client, query.as_ptr(), 60, &mut err).is_null());
        assert_eq!(err, FfiErrorCode::InvalidUtf8);
        grepper_client_free(client);
    }

    #[test]
    fn client_new_rejects_invalid_utf8() {
        let bad = CStr::from_bytes_with_nul(b"k\xe9y\0").unwrap();
        let url = CString::new("http://localhost:3000").unwrap();
        assert!(grepper_client_new(url.as_ptr(), bad.as_ptr()).is_null());
        assert!(grepper_client_new(bad.as_ptr(), std::ptr::null()).is_null());
    }

    #[test]
    fn set_api_key_invalid_utf8_keeps_previous_key() {
        let client = new_client(Some("key"));
        let bad = CStr::from_bytes_with_nul(b"k\xe9y\0").unwrap();
        assert_eq!(grepper_client_set_api_key(client, bad.as_ptr()), FfiErrorCode::InvalidUtf8);

        let req = grepper_build_retrieve(client, 1, std::ptr::null_mut());
        assert!(!req.is_null());
        let headers = unsafe { std::slice::from_raw_parts((*req).headers, (*req).headers_len as usize) };
        assert_eq!(c_str(headers[0].value), "Basic a2V5Og==");

        grepper_free_request(req);
        grepper_client_free(client);
    }

    #[test]
    fn parse_invalid_utf8_body_is_reported() {
        let client = new_client(Some("key"));
        let body = CStr::from_bytes_with_nul(b"{\"id\":1,\"success\":\"tr\xffue\"}\0").unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = grepper_parse_update(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::InvalidUtf8);
        assert!(r.data.is_null());

        grepper_free_result(result);
        grepper_client_free(client);
    }

    #[test]
    fn parse_search_empty() {
        let client = new_client(Some("key"));
        let body = CString::new(r#"{"object":"list","data":[]}"#).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = grepper_parse_search(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert!(matches!(r.data_tag, FfiDataTag::AnswerList));

        let list = unsafe { &*r.data.cast::<FfiAnswerList>() };
        assert_eq!(list.len, 0);
        assert!(list.items.is_null());

        grepper_free_result(result);
        grepper_client_free(client);
    }

    #[test]
    fn parse_search_keeps_order_and_content_shapes() {
        let client = new_client(Some("key"));
        let plain = ANSWER.replace("\"id\":12", "\"id\":4").replace(r#""{\"a\":1}""#, r#""plain""#);
        let body = CString::new(format!(r#"{{"object":"list","data":[{ANSWER},{plain}]}}"#)).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = grepper_parse_search(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);

        let list = unsafe { &*r.data.cast::<FfiAnswerList>() };
        assert_eq!(list.len, 2);
        let items = unsafe { std::slice::from_raw_parts(list.items, list.len as usize) };
        assert_eq!(items[0].id, 12);
        assert!(items[0].content_decoded);
        assert_eq!(c_str(items[0].content), r#"{"a":1}"#);
        assert_eq!(items[1].id, 4);
        assert!(!items[1].content_decoded);
        assert_eq!(c_str(items[1].content), "plain");

        grepper_free_result(result);
        grepper_client_free(client);
    }

    #[test]
    fn parse_retrieve_success() {
        let client = new_client(Some("key"));
        let body = CString::new(ANSWER).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = grepper_parse_retrieve(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert!(matches!(r.data_tag, FfiDataTag::Answer));

        let answer = unsafe { &*r.data.cast::<FfiAnswer>() };
        assert_eq!(answer.id, 12);
        assert_eq!(c_str(answer.title), "loop");
        assert_eq!(answer.upvotes, 3);

        grepper_free_result(result);
        grepper_client_free(client);
    }

    #[test]
    fn parse_retrieve_rate_limited() {
        let client = new_client(Some("key"));
        let body = CString::new("").unwrap();
        let resp = FfiHttpResponse {
            status: 429,
            body: body.as_ptr(),
        };
        let result = grepper_parse_retrieve(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Http);
        assert_eq!(r.http_status, 429);
        assert!(c_str(r.error_message).starts_with("Too Many Requests"));
        assert!(r.data.is_null());

        grepper_free_result(result);
        grepper_client_free(client);
    }

    #[test]
    fn parse_update_success() {
        let client = new_client(Some("key"));
        let body = CString::new(r#"{"id":12,"success":"true"}"#).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = grepper_parse_update(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert!(matches!(r.data_tag, FfiDataTag::UpdateAck));

        let ack = unsafe { &*r.data.cast::<FfiUpdateAck>() };
        assert_eq!(ack.id, 12);
        assert!(ack.success);
        assert_eq!(c_str(ack.success_raw), r#""true""#);

        grepper_free_result(result);
        grepper_client_free(client);
    }

    #[test]
    fn parse_null_client_returns_null_arg() {
        let body = CString::new("{}").unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = grepper_parse_search(std::ptr::null(), &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::NullArg);

        grepper_free_result(result);
    }

    #[test]
    fn parse_null_response_returns_null_arg() {
        let client = new_client(Some("key"));
        let result = grepper_parse_retrieve(client, std::ptr::null());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::NullArg);

        grepper_free_result(result);
        grepper_client_free(client);
    }

    #[test]
    fn free_request_null_is_safe() {
        grepper_free_request(std::ptr::null_mut());
    }

    #[test]
    fn free_result_null_is_safe() {
        grepper_free_result(std::ptr::null_mut());
    }
}

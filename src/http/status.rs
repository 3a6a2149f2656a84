use std::num::NonZeroU16;

/// HTTP [Status Code][rfc].
///
/// Only codes present in the registry can be constructed, see [`StatusCode::from_u16`] and
/// [`StatusCode::from_reason`].
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(NonZeroU16);

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

/// Returns the canonical reason phrase for registered status `code`.
///
/// ```
/// assert_eq!(retort::http::reason_for(404), Some("Not Found"));
/// assert_eq!(retort::http::reason_for(999), None);
/// ```
#[inline]
pub const fn reason_for(code: u16) -> Option<&'static str> {
    match StatusCode::from_u16(code) {
        Some(status) => Some(status.reason()),
        None => None,
    }
}

/// Returns the registered status code whose canonical reason phrase is exactly `phrase`.
///
/// The comparison is case-sensitive. No match is a valid outcome and returns `None`.
#[inline]
pub fn code_for(phrase: &str) -> Option<u16> {
    StatusCode::from_reason(phrase).map(|status| status.code())
}

macro_rules! status_code {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident $msg:literal;
        )*
    ) => {
        impl StatusCode {
            /// Every registered status code, in ascending order.
            pub const ALL: &'static [StatusCode] = &[$(Self::$id,)*];

            /// Returns [`StatusCode`] if `code` is registered.
            #[inline]
            pub const fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $(
                        $int => Some(Self::$id),
                    )*
                    _ => None,
                }
            }

            /// Returns [`StatusCode`] whose reason phrase is exactly `phrase`.
            pub fn from_reason(phrase: &str) -> Option<Self> {
                match phrase {
                    $(
                        $msg => Some(Self::$id),
                    )*
                    _ => None,
                }
            }

            /// Returns status code value, e.g: `200`.
            #[inline]
            pub const fn code(&self) -> u16 {
                self.0.get()
            }

            /// Returns status code and message as string slice, e.g: `"200 OK"`.
            #[inline]
            pub const fn as_str(&self) -> &'static str {
                match self.0.get() {
                    $(
                        $int => concat!(stringify!($int), " ", $msg),
                    )*
                    _ => unreachable!(),
                }
            }

            /// Returns the canonical reason phrase, e.g: `"OK"`.
            #[inline]
            pub const fn reason(&self) -> &'static str {
                match self.0.get() {
                    $(
                        $int => $msg,
                    )*
                    _ => unreachable!(),
                }
            }
        }

        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $id: Self = Self(NonZeroU16::new($int).unwrap());
            )*
        }
    };
}

status_code! {
    /// `100`. The client should continue the request.
    100 CONTINUE "Continue";
    /// `101`. The server is switching to the protocol requested by an `Upgrade` header.
    101 SWITCHING_PROTOCOLS "Switching Protocols";
    /// `200`. The request succeeded.
    200 OK "OK";
    /// `201`. The request succeeded, and a new resource was created as a result.
    201 CREATED "Created";
    /// `202`. The request has been received but not yet acted upon.
    202 ACCEPTED "Accepted";
    /// `203`. The returned metadata is not exactly the same as is available from the origin
    /// server.
    203 NON_AUTHORITATIVE_INFORMATION "Non-Authoritative Information";
    /// `204`. There is no content to send for this request, but the headers are useful.
    204 NO_CONTENT "No Content";
    /// `205`. Tells the user agent to reset the document which sent this request.
    205 RESET_CONTENT "Reset Content";
    /// `206`. Sent in response to a `Range` header to deliver part of a resource.
    206 PARTIAL_CONTENT "Partial Content";
    /// `300`. The request has more than one possible response.
    300 MULTIPLE_CHOICES "Multiple Choices";
    /// `301`. The URL of the requested resource has been changed permanently.
    301 MOVED_PERMANENTLY "Moved Permanently";
    /// `302`. The URI of requested resource has been changed temporarily.
    302 FOUND "Found";
    /// `303`. Directs the client to get the requested resource at another URI with a GET request.
    303 SEE_OTHER "See Other";
    /// `304`. The response has not been modified, the cached version can be used.
    304 NOT_MODIFIED "Not Modified";
    /// `305`. The requested response must be accessed by a proxy. Deprecated.
    305 USE_PROXY "Use Proxy";
    /// `307`. Directs the client to get the requested resource at another URI with the same
    /// method.
    307 TEMPORARY_REDIRECT "Temporary Redirect";
    /// `400`. The server cannot or will not process the request due to a client error.
    400 BAD_REQUEST "Bad Request";
    /// `401`. Semantically this response means "unauthenticated".
    401 UNAUTHORIZED "Unauthorized";
    /// `402`. Reserved for future use.
    402 PAYMENT_REQUIRED "Payment Required";
    /// `403`. The client does not have access rights to the content.
    403 FORBIDDEN "Forbidden";
    /// `404`. The server cannot find the requested resource.
    404 NOT_FOUND "Not Found";
    /// `405`. The request method is not supported by the target resource.
    405 METHOD_NOT_ALLOWED "Method Not Allowed";
    /// `406`. No content conforms to the criteria given by the user agent.
    406 NOT_ACCEPTABLE "Not Acceptable";
    /// `407`. Authentication is needed to be done by a proxy.
    407 PROXY_AUTHENTICATION_REQUIRED "Proxy Authentication Required";
    /// `408`. The server would like to shut down this unused connection.
    408 REQUEST_TIMEOUT "Request Time-out";
    /// `409`. The request conflicts with the current state of the server.
    409 CONFLICT "Conflict";
    /// `410`. The requested content has been permanently deleted from server.
    410 GONE "Gone";
    /// `411`. The `Content-Length` header field is not defined and the server requires it.
    411 LENGTH_REQUIRED "Length Required";
    /// `412`. The server does not meet the preconditions indicated by the client.
    412 PRECONDITION_FAILED "Precondition Failed";
    /// `413`. The request body is larger than limits defined by server.
    413 REQUEST_ENTITY_TOO_LARGE "Request Entity Too Large";
    /// `414`. The URI requested by the client is longer than the server is willing to interpret.
    414 REQUEST_URI_TOO_LARGE "Request-URI Too Large";
    /// `415`. The media format of the requested data is not supported by the server.
    415 UNSUPPORTED_MEDIA_TYPE "Unsupported Media Type";
    /// `416`. The ranges specified by the `Range` header field cannot be fulfilled.
    416 RANGE_NOT_SATISFIABLE "Requested range not satisfiable";
    /// `417`. The expectation indicated by the `Expect` header field cannot be met.
    417 EXPECTATION_FAILED "Expectation Failed";
    /// `500`. The server has encountered a situation it does not know how to handle.
    500 INTERNAL_SERVER_ERROR "Internal Server Error";
    /// `501`. The request method is not supported by the server and cannot be handled.
    501 NOT_IMPLEMENTED "Not Implemented";
    /// `502`. The server, while working as a gateway, got an invalid response.
    502 BAD_GATEWAY "Bad Gateway";
    /// `503`. The server is not ready to handle the request.
    503 SERVICE_UNAVAILABLE "Service Unavailable";
    /// `504`. The server is acting as a gateway and cannot get a response in time.
    504 GATEWAY_TIMEOUT "Gateway Time-out";
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("StatusCode").field(&self.as_str()).finish()
    }
}

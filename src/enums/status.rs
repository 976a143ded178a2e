/// Enum with the registered HTTP status codes.
///
/// `Raw` carries a code that is not in the registry; `reason()` for it
/// is empty and the serializer checks it against the valid 100..=599
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // custom http code
    Raw(u16),
    //  1xx status codes
    Continue,                       // 100
    SwitchingProtocols,             // 101
    Processing,                     // 102
    //  2xx status codes
    Ok,                             // 200
    Created,                        // 201
    Accepted,                       // 202
    NonAuthoritativeInformation,    // 203
    NoContent,                      // 204
    ResetContent,                   // 205
    PartialContent,                 // 206
    MultiStatus,                    // 207
    AlreadyReported,                // 208
    ImUsed,                         // 226
    //  3xx status codes
    MultipleChoices,                // 300
    MovedPermanently,               // 301
    Found,                          // 302
    SeeOther,                       // 303
    NotModified,                    // 304
    UseProxy,                       // 305
    TemporaryRedirect,              // 307
    PermanentRedirect,              // 308
    //  4xx status codes
    BadRequest,                     // 400
    Unauthorized,                   // 401
    PaymentRequired,                // 402
    Forbidden,                      // 403
    NotFound,                       // 404
    MethodNotAllowed,               // 405
    NotAcceptable,                  // 406
    ProxyAuthenticationRequired,    // 407
    RequestTimeout,                 // 408
    Conflict,                       // 409
    Gone,                           // 410
    LengthRequired,                 // 411
    PreconditionFailed,             // 412
    PayloadTooLarge,                // 413
    UriTooLong,                     // 414
    UnsupportedMediaType,           // 415
    RangeNotSatisfiable,            // 416
    ExpectationFailed,              // 417
    ImATeapot,                      // 418
    MisdirectedRequest,             // 421
    UnprocessableEntity,            // 422
    Locked,                         // 423
    FailedDependency,               // 424
    TooEarly,                       // 425
    UpgradeRequired,                // 426
    PreconditionRequired,           // 428
    TooManyRequests,                // 429
    RequestHeaderFieldsTooLarge,    // 431
    UnavailableForLegalReasons,     // 451
    //  5xx status codes
    InternalServerError,            // 500
    NotImplemented,                 // 501
    BadGateway,                     // 502
    ServiceUnavailable,             // 503
    GatewayTimeout,                 // 504
    HttpVersionNotSupported,        // 505
    VariantAlsoNegotiates,          // 506
    InsufficientStorage,            // 507
    LoopDetected,                   // 508
    NotExtended,                    // 510
    NetworkAuthenticationRequired,  // 511
}

impl Status {
    pub fn code(&self) -> u16 {
        match *self {
            //  1xx status codes
            Status::Continue                        => 100,
            Status::SwitchingProtocols              => 101,
            Status::Processing                      => 102,
            //  2xx status codes
            Status::Ok                              => 200,
            Status::Created                         => 201,
            Status::Accepted                        => 202,
            Status::NonAuthoritativeInformation     => 203,
            Status::NoContent                       => 204,
            Status::ResetContent                    => 205,
            Status::PartialContent                  => 206,
            Status::MultiStatus                     => 207,
            Status::AlreadyReported                 => 208,
            Status::ImUsed                          => 226,
            //  3xx status codes
            Status::MultipleChoices                 => 300,
            Status::MovedPermanently                => 301,
            Status::Found                           => 302,
            Status::SeeOther                        => 303,
            Status::NotModified                     => 304,
            Status::UseProxy                        => 305,
            Status::TemporaryRedirect               => 307,
            Status::PermanentRedirect               => 308,
            //  4xx status codes
            Status::BadRequest                      => 400,
            Status::Unauthorized                    => 401,
            Status::PaymentRequired                 => 402,
            Status::Forbidden                       => 403,
            Status::NotFound                        => 404,
            Status::MethodNotAllowed                => 405,
            Status::NotAcceptable                   => 406,
            Status::ProxyAuthenticationRequired     => 407,
            Status::RequestTimeout                  => 408,
            Status::Conflict                        => 409,
            Status::Gone                            => 410,
            Status::LengthRequired                  => 411,
            Status::PreconditionFailed              => 412,
            Status::PayloadTooLarge                 => 413,
            Status::UriTooLong                      => 414,
            Status::UnsupportedMediaType            => 415,
            Status::RangeNotSatisfiable             => 416,
            Status::ExpectationFailed               => 417,
            Status::ImATeapot                       => 418,
            Status::MisdirectedRequest              => 421,
            Status::UnprocessableEntity             => 422,
            Status::Locked                          => 423,
            Status::FailedDependency                => 424,
            Status::TooEarly                        => 425,
            Status::UpgradeRequired                 => 426,
            Status::PreconditionRequired            => 428,
            Status::TooManyRequests                 => 429,
            Status::RequestHeaderFieldsTooLarge     => 431,
            Status::UnavailableForLegalReasons      => 451,
            //  5xx status codes
            Status::InternalServerError             => 500,
            Status::NotImplemented                  => 501,
            Status::BadGateway                      => 502,
            Status::ServiceUnavailable              => 503,
            Status::GatewayTimeout                  => 504,
            Status::HttpVersionNotSupported         => 505,
            Status::VariantAlsoNegotiates           => 506,
            Status::InsufficientStorage             => 507,
            Status::LoopDetected                    => 508,
            Status::NotExtended                     => 510,
            Status::NetworkAuthenticationRequired   => 511,
            Status::Raw(code) => code,
        }
    }

    pub fn reason(&self) -> &'static str {
        match *self {
            //  1xx status codes
            Status::Continue                        => "Continue",
            Status::SwitchingProtocols              => "Switching Protocols",
            Status::Processing                      => "Processing",
            //  2xx status codes
            Status::Ok                              => "OK",
            Status::Created                         => "Created",
            Status::Accepted                        => "Accepted",
            Status::NonAuthoritativeInformation     => "Non-Authoritative Information",
            Status::NoContent                       => "No Content",
            Status::ResetContent                    => "Reset Content",
            Status::PartialContent                  => "Partial Content",
            Status::MultiStatus                     => "Multi-Status",
            Status::AlreadyReported                 => "Already Reported",
            Status::ImUsed                          => "IM Used",
            //  3xx status codes
            Status::MultipleChoices                 => "Multiple Choices",
            Status::MovedPermanently                => "Moved Permanently",
            Status::Found                           => "Found",
            Status::SeeOther                        => "See Other",
            Status::NotModified                     => "Not Modified",
            Status::UseProxy                        => "Use Proxy",
            Status::TemporaryRedirect               => "Temporary Redirect",
            Status::PermanentRedirect               => "Permanent Redirect",
            //  4xx status codes
            Status::BadRequest                      => "Bad Request",
            Status::Unauthorized                    => "Unauthorized",
            Status::PaymentRequired                 => "Payment Required",
            Status::Forbidden                       => "Forbidden",
            Status::NotFound                        => "Not Found",
            Status::MethodNotAllowed                => "Method Not Allowed",
            Status::NotAcceptable                   => "Not Acceptable",
            Status::ProxyAuthenticationRequired     => "Proxy Authentication Required",
            Status::RequestTimeout                  => "Request Timeout",
            Status::Conflict                        => "Conflict",
            Status::Gone                            => "Gone",
            Status::LengthRequired                  => "Length Required",
            Status::PreconditionFailed              => "Precondition Failed",
            Status::PayloadTooLarge                 => "Payload Too Large",
            Status::UriTooLong                      => "URI Too Long",
            Status::UnsupportedMediaType            => "Unsupported Media Type",
            Status::RangeNotSatisfiable             => "Range Not Satisfiable",
            Status::ExpectationFailed               => "Expectation Failed",
            Status::ImATeapot                       => "I'm a teapot",
            Status::MisdirectedRequest              => "Misdirected Request",
            Status::UnprocessableEntity             => "Unprocessable Entity",
            Status::Locked                          => "Locked",
            Status::FailedDependency                => "Failed Dependency",
            Status::TooEarly                        => "Too Early",
            Status::UpgradeRequired                 => "Upgrade Required",
            Status::PreconditionRequired            => "Precondition Required",
            Status::TooManyRequests                 => "Too Many Requests",
            Status::RequestHeaderFieldsTooLarge     => "Request Header Fields Too Large",
            Status::UnavailableForLegalReasons      => "Unavailable For Legal Reasons",
            //  5xx status codes
            Status::InternalServerError             => "Internal Server Error",
            Status::NotImplemented                  => "Not Implemented",
            Status::BadGateway                      => "Bad Gateway",
            Status::ServiceUnavailable              => "Service Unavailable",
            Status::GatewayTimeout                  => "Gateway Timeout",
            Status::HttpVersionNotSupported         => "HTTP Version Not Supported",
            Status::VariantAlsoNegotiates           => "Variant Also Negotiates",
            Status::InsufficientStorage             => "Insufficient Storage",
            Status::LoopDetected                    => "Loop Detected",
            Status::NotExtended                     => "Not Extended",
            Status::NetworkAuthenticationRequired   => "Network Authentication Required",
            Status::Raw(_) => "",
        }
    }
}

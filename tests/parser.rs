use matches::assert_matches;

use mio_http::{Error, HeaderField, Method, Request, RequestParser};

const GET_REQUEST: &str = concat!(
    "GET / HTTP/1.1\r\n",
    "Host: 127.0.0.1:8000\r\n",
    "Connection: keep-alive\r\n",
    "Cache-Control: max-age=0\r\n",
    "sec-ch-ua: \"Not:A-Brand\";v=\"99\", \"Chromium\";v=\"112\"\r\n",
    "sec-ch-ua-mobile: ?0\r\n",
    "sec-ch-ua-platform: \"Linux\"\r\n",
    "Upgrade-Insecure-Requests: 1\r\n",
    "User-Agent: Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/112.0.0.0 Safari/537.36\r\n",
    "Accept: text/html,application/xhtml+xml,application/xml;q=0.9,\
     image/avif,image/webp,image/apng,*/*;q=0.8,\
     application/signed-exchange;v=b3;q=0.7\r\n",
    "Sec-Fetch-Site: none\r\n",
    "Sec-Fetch-Mode: navigate\r\n",
    "Sec-Fetch-User: ?1\r\n",
    "Sec-Fetch-Dest: document\r\n",
    "Accept-Encoding: gzip, deflate, br\r\n",
    "Accept-Language: en-US,en;q=0.9\r\n",
    "\r\n");

const POST_REQUEST: &str = concat!(
    "POST / HTTP/1.1\r\n",
    "Content-Type: application/json\r\n",
    "User-Agent: PostmanRuntime/7.29.3\r\n",
    "Accept: */*\r\n",
    "Postman-Token: 3cbd5d2b-758d-4b5b-93c8-d5d672445aed\r\n",
    "Host: 127.0.0.1:8000\r\n",
    "Accept-Encoding: gzip, deflate, br\r\n",
    "Connection: keep-alive\r\n",
    "Content-Length: 119\r\n",
    "\r\n");

const POST_REQUEST_BODY: &str = concat!(
    "{\n",
    "    \"key1\": [1, 2, 3],\n",
    "    \"key2\": {\n",
    "        \"k1\": false,\n",
    "        \"k2\": [\"str1\", \"str2\"]\n",
    "    },\n",
    "    \"key3\": \"value\"\n",
    "}");

fn expected_get_request() -> Request {
    let mut request = Request::new(Method::Get, "/", "HTTP/1.1");
    let fields = [
        ("host", "127.0.0.1:8000"),
        ("connection", "keep-alive"),
        ("cache-control", "max-age=0"),
        ("sec-ch-ua", "\"Not:A-Brand\";v=\"99\", \"Chromium\";v=\"112\""),
        ("sec-ch-ua-mobile", "?0"),
        ("sec-ch-ua-platform", "\"Linux\""),
        ("upgrade-insecure-requests", "1"),
        ("user-agent", "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                        (KHTML, like Gecko) Chrome/112.0.0.0 Safari/537.36"),
        ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,\
                    image/avif,image/webp,image/apng,*/*;q=0.8,\
                    application/signed-exchange;v=b3;q=0.7"),
        ("sec-fetch-site", "none"),
        ("sec-fetch-mode", "navigate"),
        ("sec-fetch-user", "?1"),
        ("sec-fetch-dest", "document"),
        ("accept-encoding", "gzip, deflate, br"),
        ("accept-language", "en-US,en;q=0.9"),
    ];
    for &(name, value) in fields.iter() {
        request.add_field(HeaderField::new(name, value)).unwrap();
    }
    request
}

fn expected_post_request() -> Request {
    let mut request = Request::new(Method::Post, "/", "HTTP/1.1");
    let fields = [
        ("content-type", "application/json"),
        ("user-agent", "PostmanRuntime/7.29.3"),
        ("accept", "*/*"),
        ("postman-token", "3cbd5d2b-758d-4b5b-93c8-d5d672445aed"),
        ("host", "127.0.0.1:8000"),
        ("accept-encoding", "gzip, deflate, br"),
        ("connection", "keep-alive"),
        ("content-length", "119"),
    ];
    for &(name, value) in fields.iter() {
        request.add_field(HeaderField::new(name, value)).unwrap();
    }
    request.set_body(POST_REQUEST_BODY.as_bytes().to_vec());
    request
}

/// Feed every chunk into a fresh parser and collect the emissions.
fn feed_chunks(chunks: &[&[u8]]) -> Vec<Request> {
    let mut parser = RequestParser::new();
    let mut parsed = Vec::new();
    for chunk in chunks {
        parser.feed(chunk, &mut |request| parsed.push(request)).unwrap();
    }
    parsed
}

fn parse_error(data: &[u8]) -> Error {
    let mut parser = RequestParser::new();
    parser
        .feed(data, &mut |request| {
            panic!("unexpected emission: {}", request)
        })
        .unwrap_err()
}

#[test]
fn minimal_get() {
    let parsed = feed_chunks(&[b"GET / HTTP/1.1\r\n\r\n"]);
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].method, Method::Get);
    assert_eq!(parsed[0].path, "/");
    assert_eq!(parsed[0].version, "HTTP/1.1");
    assert_eq!(parsed[0].header_fields().len(), 0);
    assert_eq!(parsed[0].content_length(), 0);
    assert!(parsed[0].body().is_none());
}

#[test]
fn simple_get() {
    let parsed = feed_chunks(&[GET_REQUEST.as_bytes()]);
    assert_eq!(parsed, vec![expected_get_request()]);
    assert_eq!(parsed[0].host(), Some("127.0.0.1:8000"));
    assert_eq!(parsed[0].content_type(), None);
}

#[test]
fn simple_get_byte_per_byte() {
    let bytes = GET_REQUEST.as_bytes();
    let chunks: Vec<&[u8]> = bytes.chunks(1).collect();
    assert_eq!(feed_chunks(&chunks), vec![expected_get_request()]);
}

#[test]
fn simple_get_three_byte_per_three_byte() {
    let bytes = GET_REQUEST.as_bytes();
    let chunks: Vec<&[u8]> = bytes.chunks(3).collect();
    assert_eq!(feed_chunks(&chunks), vec![expected_get_request()]);
}

#[test]
fn simple_post() {
    let data = [POST_REQUEST, POST_REQUEST_BODY].concat();
    let parsed = feed_chunks(&[data.as_bytes()]);
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].content_length(), 119);
    assert_eq!(parsed[0].body().map(|body| body.len()), Some(119));
    assert_eq!(parsed[0].content_type(), Some("application/json"));
    assert_eq!(parsed, vec![expected_post_request()]);
}

#[test]
fn simple_post_byte_per_byte() {
    let data = [POST_REQUEST, POST_REQUEST_BODY].concat();
    let chunks: Vec<&[u8]> = data.as_bytes().chunks(1).collect();
    assert_eq!(feed_chunks(&chunks), vec![expected_post_request()]);
}

#[test]
fn simple_post_three_byte_per_three_byte() {
    let data = [POST_REQUEST, POST_REQUEST_BODY].concat();
    let chunks: Vec<&[u8]> = data.as_bytes().chunks(3).collect();
    assert_eq!(feed_chunks(&chunks), vec![expected_post_request()]);
}

#[test]
fn pipelined_in_one_chunk() {
    let data = [GET_REQUEST, POST_REQUEST, POST_REQUEST_BODY].concat();
    let parsed = feed_chunks(&[data.as_bytes()]);
    assert_eq!(parsed,
               vec![expected_get_request(), expected_post_request()]);
}

#[test]
fn pipelined_three_byte_per_three_byte() {
    let data = [GET_REQUEST, POST_REQUEST, POST_REQUEST_BODY].concat();
    let chunks: Vec<&[u8]> = data.as_bytes().chunks(3).collect();
    assert_eq!(feed_chunks(&chunks),
               vec![expected_get_request(), expected_post_request()]);
}

/// Splitting the pipelined stream at any position must not change what
/// comes out.
#[test]
fn pipelined_every_split() {
    let data = [GET_REQUEST, POST_REQUEST, POST_REQUEST_BODY].concat();
    let bytes = data.as_bytes();
    let expected = vec![expected_get_request(), expected_post_request()];
    for split in 0..=bytes.len() {
        let parsed = feed_chunks(&[&bytes[..split], &bytes[split..]]);
        assert_eq!(parsed, expected, "diverged at split {}", split);
    }
}

#[test]
fn names_lowercased_values_trimmed() {
    let parsed = feed_chunks(&[concat!(
        "GET /index.html HTTP/1.1\r\n",
        "HOST:   example.com \t\r\n",
        "X-Empty: \t \r\n",
        "\r\n").as_bytes()]);
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].header_fields(), &[
        HeaderField::new("host", "example.com"),
        HeaderField::new("x-empty", ""),
    ]);
}

#[test]
fn interior_whitespace_preserved() {
    let parsed = feed_chunks(
        &[b"GET / HTTP/1.1\r\nX-Pad:  a  b\tc \r\n\r\n"]);
    assert_eq!(parsed[0].header_fields(),
               &[HeaderField::new("x-pad", "a  b\tc")]);
}

#[test]
fn duplicate_content_length_last_wins() {
    let parsed = feed_chunks(&[concat!(
        "POST / HTTP/1.1\r\n",
        "Content-Length: 5\r\n",
        "Content-Length: 3\r\n",
        "\r\n",
        "abcREST").as_bytes()]);
    // the trailing "REST" opens the next request and stays buffered
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].content_length(), 3);
    assert_eq!(parsed[0].body(), Some(&b"abc"[..]));
    assert_eq!(parsed[0].header_fields().len(), 2);
    assert_eq!(parsed[0].header_fields()[0].value, "5");
}

#[test]
fn bare_line_feeds_do_not_terminate() {
    let mut parser = RequestParser::new();
    let mut emitted = 0;
    parser
        .feed(b"GET / HTTP/1.1\n\nHost: x\n\n", &mut |_| emitted += 1)
        .unwrap();
    assert_eq!(emitted, 0);
}

#[test]
fn carriage_return_run_keeps_candidate() {
    // \r\r\n only counts from its second \r, so the field value keeps
    // the first one
    let parsed = feed_chunks(&[b"GET / HTTP/1.1\r\nX: a\r\r\n\r\n"]);
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].header_fields(),
               &[HeaderField::new("x", "a\r")]);
}

#[test]
fn body_split_across_feeds() {
    let parsed = feed_chunks(&[
        b"POST / HTTP/1.1\r\nContent-Length: 11\r\n\r\nhello",
        b" ",
        b"world",
    ]);
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].body(), Some(&b"hello world"[..]));
}

#[test]
fn unknown_method_is_an_error() {
    assert_matches!(parse_error(b"BREW / HTTP/1.1\r\n\r\n"), Error::Method);
}

#[test]
fn lowercase_method_is_an_error() {
    assert_matches!(parse_error(b"get / HTTP/1.1\r\n\r\n"), Error::Method);
}

#[test]
fn missing_version_is_an_error() {
    assert_matches!(parse_error(b"GET /\r\n\r\n"), Error::RequestLine);
}

#[test]
fn extra_request_line_token_is_an_error() {
    assert_matches!(parse_error(b"GET / HTTP/1.1 x\r\n\r\n"),
                    Error::RequestLine);
}

#[test]
fn field_without_colon_is_an_error() {
    assert_matches!(parse_error(b"GET / HTTP/1.1\r\nbad field\r\n\r\n"),
                    Error::HeaderField);
}

#[test]
fn non_numeric_content_length_is_an_error() {
    assert_matches!(
        parse_error(b"POST / HTTP/1.1\r\nContent-Length: twelve\r\n\r\n"),
        Error::ContentLength);
}

//! HTTP/1.0 response framing.
//!
//! Responses are a status line, an optional `Content-type` header, a
//! blank line, and the body. The server closes the connection after
//! every response; there is no keep-alive.

use std::io::Write;

/// Response status codes the server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
}

impl Status {
    pub fn code(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::NotFound => 404,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::NotFound => "Not Found",
        }
    }
}

/// One response, built by a handler and written by the connection loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub content_type: Option<String>,
    pub body: String,
}

impl Response {
    /// A `200 OK` HTML page.
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            content_type: Some("text/html; charset=utf-8".to_string()),
            body: body.into(),
        }
    }

    /// The `404 Not Found` response naming the unmatched path.
    /// No content-type header, plaintext body.
    pub fn not_found(path: &str) -> Self {
        Self {
            status: Status::NotFound,
            content_type: None,
            body: format!("path '{}' not found", path),
        }
    }

    /// Write the framed response: status line, optional content-type,
    /// blank line, body.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "HTTP/1.0 {} {}\r\n", self.status.code(), self.status.reason())?;
        if let Some(content_type) = &self.content_type {
            write!(out, "Content-type: {}\r\n", content_type)?;
        }
        write!(out, "\r\n")?;
        out.write_all(self.body.as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framed(response: &Response) -> String {
        let mut out = Vec::new();
        response.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_html_response_framing() {
        let response = Response::html("<p>hi</p>");
        assert_eq!(
            framed(&response),
            "HTTP/1.0 200 OK\r\nContent-type: text/html; charset=utf-8\r\n\r\n<p>hi</p>"
        );
    }

    #[test]
    fn test_not_found_has_no_content_type() {
        let response = Response::not_found("/nope");
        assert_eq!(
            framed(&response),
            "HTTP/1.0 404 Not Found\r\n\r\npath '/nope' not found"
        );
    }
}

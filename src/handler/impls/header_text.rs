use actix_web::http::header::HeaderValue;
use crate::handler::enums::header_text::HeaderText;

impl HeaderText {
    pub fn from_header_value(value: &HeaderValue) -> HeaderText {
        match std::str::from_utf8(value.as_bytes()) {
            Ok(text) => HeaderText::Text(text.to_string()),
            Err(_) => HeaderText::Binary { base64: value.as_bytes().to_vec() },
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            HeaderText::Text(text) => text.as_bytes(),
            HeaderText::Binary { base64 } => base64,
        }
    }
}

impl From<&str> for HeaderText {
    fn from(text: &str) -> Self {
        HeaderText::Text(text.to_string())
    }
}

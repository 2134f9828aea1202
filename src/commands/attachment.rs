//! Attachment Operations
//!
//! Attachments are loaded on demand for the open card. Upload transport is
//! owned by the page layer; the client only observes an attachment row
//! gaining its URL once the upload completes.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

use super::{call, decode, Method};
use crate::config::ApiConfig;
use crate::errors::UiError;
use crate::models::{Attachment, DeletedResult};

#[derive(Serialize)]
struct CardIdParams {
    card_id: u32,
}

#[derive(Serialize)]
struct IdParams {
    id: u32,
}

pub async fn load_open_card_attachments(
    api: ApiConfig,
    card_id: u32,
) -> Result<Vec<Attachment>, UiError> {
    decode(call(api, "LoadOpenCardAttachments", &CardIdParams { card_id }, Method::Get).await?)
}

pub async fn delete_attachment(api: ApiConfig, id: u32) -> Result<DeletedResult, UiError> {
    decode(call(api, "DeleteAttachment", &IdParams { id }, Method::Post).await?)
}

const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Download URL for an attachment; file names go through path encoding.
pub fn attachment_href(attachment: &Attachment) -> Option<String> {
    let url = attachment.url.as_ref()?;
    let (dir, name) = match url.rfind('/') {
        Some(pos) => (&url[..pos], &url[pos + 1..]),
        None => return Some(url.clone()),
    };
    let encoded = utf8_percent_encode(name, PATH_ENCODE_SET).to_string();
    Some(format!("{dir}/{encoded}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(url: Option<&str>) -> Attachment {
        Attachment {
            id: 1,
            card_id: 2,
            file_name: "mock up v2.png".to_string(),
            url: url.map(str::to_string),
            thumbnail: None,
        }
    }

    #[test]
    fn href_encodes_the_file_name_segment() {
        let a = attachment(Some("/attachments/1/mock up v2.png"));
        assert_eq!(attachment_href(&a).as_deref(), Some("/attachments/1/mock%20up%20v2.png"));
    }

    #[test]
    fn uploading_attachment_has_no_href() {
        assert_eq!(attachment_href(&attachment(None)), None);
        assert!(attachment(None).is_uploading());
    }
}

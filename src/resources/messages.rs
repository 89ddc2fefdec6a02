use serde::Serialize;
use std::fs;

use crate::client::WitClient;
use crate::errors::{WitError, WitResult};
use crate::types::{Message, MessageRequest};
use crate::utils::{decode, path_segment};

#[derive(Debug, Serialize)]
struct MessageQuery<'a> {
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    msg_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    n: Option<u32>,
}

fn message_resource(request: &MessageRequest) -> WitResult<String> {
    let query = serde_urlencoded::to_string(MessageQuery {
        q: &request.query,
        context: request.context.as_deref(),
        msg_id: request.msg_id.as_deref(),
        n: request.n,
    })
    .map_err(|e| WitError::InvalidRequest(format!("Failed to encode query: {}", e)))?;

    Ok(format!("/message?{}", query))
}

impl WitClient {
    /// Sends a text query for analysis.
    pub fn message(&self, request: &MessageRequest) -> WitResult<Message> {
        let result = self.get(&message_resource(request)?)?;
        decode(&result)
    }

    /// Fetches the stored analysis of an earlier message.
    ///
    /// A message is not visible here until the service has indexed it, which can take a short
    /// while after it was sent. No waiting or retrying happens on this side.
    pub fn messages(&self, id: &str) -> WitResult<Message> {
        let result = self.get(&format!("/messages/{}", path_segment(id)?))?;
        decode(&result)
    }

    /// Sends audio for speech recognition and analysis.
    ///
    /// Exactly one of `request.file` and `request.file_contents` must be set, and the audio must
    /// not be empty; otherwise the call fails with [`WitError::InvalidRequest`] before anything
    /// goes over the wire.
    pub fn audio_message(&self, request: &MessageRequest) -> WitResult<Message> {
        let data = match (&request.file, &request.file_contents) {
            // the file is closed as soon as it has been read, whatever happens next
            (Some(path), None) => fs::read(path)?,
            (None, Some(contents)) => contents.clone(),
            (None, None) => {
                return Err(WitError::InvalidRequest(
                    "Must provide a file or file contents".to_string(),
                ))
            }
            (Some(_), Some(_)) => {
                return Err(WitError::InvalidRequest(
                    "Provide either a file or file contents, not both".to_string(),
                ))
            }
        };

        if data.is_empty() {
            return Err(WitError::InvalidRequest("Audio payload is empty".to_string()));
        }

        let result = self.post_bytes("/speech", &request.content_type, data)?;
        decode(&result)
    }
}

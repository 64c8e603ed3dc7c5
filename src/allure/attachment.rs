// Attachment records

use serde::Serialize;
use uuid::Uuid;

/// Content type of an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MimeType {
    Text,
    Csv,
    Tsv,
    UriList,
    Html,
    Xml,
    Json,
    Yaml,
    Pcap,
    Png,
    Jpg,
    Svg,
    Gif,
    Bmp,
    Tiff,
    Mp4,
    Ogg,
    Webm,
    Pdf,
}

impl MimeType {
    /// MIME string written into the report
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::Text => "text/plain",
            MimeType::Csv => "text/csv",
            MimeType::Tsv => "text/tab-separated-values",
            MimeType::UriList => "text/uri-list",
            MimeType::Html => "text/html",
            MimeType::Xml => "application/xml",
            MimeType::Json => "application/json",
            MimeType::Yaml => "application/yaml",
            MimeType::Pcap => "application/vnd.tcpdump.pcap",
            MimeType::Png => "image/png",
            MimeType::Jpg => "image/jpg",
            MimeType::Svg => "image/svg-xml",
            MimeType::Gif => "image/gif",
            MimeType::Bmp => "image/bmp",
            MimeType::Tiff => "image/tiff",
            MimeType::Mp4 => "video/mp4",
            MimeType::Ogg => "video/ogg",
            MimeType::Webm => "video/webm",
            MimeType::Pdf => "application/pdf",
        }
    }

    /// File extension used for the attachment source
    pub fn extension(&self) -> &'static str {
        match self {
            MimeType::Text => "txt",
            MimeType::Csv => "csv",
            MimeType::Tsv => "tsv",
            MimeType::UriList => "uri",
            MimeType::Html => "html",
            MimeType::Xml => "xml",
            MimeType::Json => "json",
            MimeType::Yaml => "yaml",
            MimeType::Pcap => "pcap",
            MimeType::Png => "png",
            MimeType::Jpg => "jpg",
            MimeType::Svg => "svg",
            MimeType::Gif => "gif",
            MimeType::Bmp => "bmp",
            MimeType::Tiff => "tiff",
            MimeType::Mp4 => "mp4",
            MimeType::Ogg => "ogg",
            MimeType::Webm => "webm",
            MimeType::Pdf => "pdf",
        }
    }
}

impl Serialize for MimeType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A named artifact attached to a step or a test result.
///
/// The raw content travels with the record so a report sink can persist it
/// under `source`; it is not part of the serialized report entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    pub source: String,
    #[serde(rename = "type")]
    pub mime_type: MimeType,
    #[serde(skip)]
    pub content: Vec<u8>,
}

impl Attachment {
    pub fn new(name: impl Into<String>, mime_type: MimeType, content: impl Into<Vec<u8>>) -> Self {
        let source = format!("{}-attachment.{}", Uuid::new_v4(), mime_type.extension());
        Self {
            name: name.into(),
            source,
            mime_type,
            content: content.into(),
        }
    }

    /// Plain text attachment
    pub fn text(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(name, MimeType::Text, content.into().into_bytes())
    }

    /// JSON attachment built from any serializable value
    pub fn json<T: Serialize>(name: impl Into<String>, value: &T) -> serde_json::Result<Self> {
        let content = serde_json::to_vec_pretty(value)?;
        Ok(Self::new(name, MimeType::Json, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attachment_source_uses_extension() {
        let attachment = Attachment::new("response", MimeType::Json, b"{}".to_vec());
        assert!(attachment.source.ends_with("-attachment.json"));
        assert_eq!(attachment.mime_type.as_str(), "application/json");
    }

    #[test]
    fn test_attachment_sources_are_unique() {
        let first = Attachment::text("log", "a");
        let second = Attachment::text("log", "a");
        assert_ne!(first.source, second.source);
    }

    #[test]
    fn test_attachment_content_not_serialized() {
        let attachment = Attachment::text("log", "secret payload");
        let value = serde_json::to_value(&attachment).unwrap();
        assert_eq!(value["name"], "log");
        assert_eq!(value["type"], "text/plain");
        assert!(value.get("content").is_none());
    }

    #[test]
    fn test_json_attachment_pretty_prints() {
        let attachment = Attachment::json("body", &json!({"id": 7})).unwrap();
        let content = String::from_utf8(attachment.content).unwrap();
        assert!(content.contains("\"id\": 7"));
        assert_eq!(attachment.mime_type, MimeType::Json);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Storage buckets the site writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Bucket {
    ProjectImages,
    ProjectVideos,
    ProjectDocuments,
    Resumes,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::ProjectImages => "project-images",
            Bucket::ProjectVideos => "project-videos",
            Bucket::ProjectDocuments => "project-documents",
            Bucket::Resumes => "resumes",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bucket: {0}")]
pub struct UnknownBucket(pub String);

impl FromStr for Bucket {
    type Err = UnknownBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project-images" => Ok(Bucket::ProjectImages),
            "project-videos" => Ok(Bucket::ProjectVideos),
            "project-documents" => Ok(Bucket::ProjectDocuments),
            "resumes" => Ok(Bucket::Resumes),
            other => Err(UnknownBucket(other.to_string())),
        }
    }
}

/// A file handed over for upload: original name, declared type and contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub const DEFAULT_CONTENT_TYPE: &'static str = "application/octet-stream";

    pub fn new(file_name: impl Into<String>, content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        let content_type = content_type
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(Self::DEFAULT_CONTENT_TYPE)
            .to_string();

        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

use std::fmt;

/// Which asset endpoint a file goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    File,
}

impl AssetKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            AssetKind::Image => "images",
            AssetKind::File => "files",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Image => write!(f, "image"),
            AssetKind::File => write!(f, "file"),
        }
    }
}

/// A file the guest picked, held in memory until it is uploaded.
#[derive(Clone, PartialEq)]
pub struct FileUpload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub filename: String,
}

impl FileUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: None,
            filename: filename.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Declared type, or a guess from the file extension.
    pub fn mime_type(&self) -> String {
        match &self.content_type {
            Some(ct) if !ct.trim().is_empty() => ct.clone(),
            _ => mime_guess::from_path(&self.filename)
                .first_or_octet_stream()
                .to_string(),
        }
    }
}

impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Unsubmitted form input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadDraft {
    pub file: Option<FileUpload>,
    pub text: String,
    pub uploader_name: String,
}

impl UploadDraft {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

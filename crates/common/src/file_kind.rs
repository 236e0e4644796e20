/// Preview classification for a stored file, decided by filename extension
/// alone. The set is closed: anything outside it renders as the
/// "not previewable" placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Unsupported,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

impl FileKind {
    /// Pure lookup from file name to kind. Case-insensitive on the
    /// extension; names without an extension are `Unsupported`.
    pub fn from_name(name: &str) -> FileKind {
        let ext = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
            _ => return FileKind::Unsupported,
        };
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Image
        } else {
            FileKind::Unsupported
        }
    }

    pub fn is_previewable(&self) -> bool {
        matches!(self, FileKind::Image)
    }
}

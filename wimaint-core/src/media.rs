use std::fmt;

/// Media subfolder of a record that may hold per-step folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Images,
    Videos,
    Pdfs,
    Programs,
}

impl MediaKind {
    /// All media kinds, in scan order.
    pub const ALL: [MediaKind; 4] = [
        MediaKind::Images,
        MediaKind::Videos,
        MediaKind::Pdfs,
        MediaKind::Programs,
    ];

    /// Folder name under the record folder.
    pub fn dir_name(&self) -> &'static str {
        match self {
            MediaKind::Images => "images",
            MediaKind::Videos => "videos",
            MediaKind::Pdfs => "pdfs",
            MediaKind::Programs => "programs",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

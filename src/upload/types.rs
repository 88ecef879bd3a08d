use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type RecordId = Uuid;

/// Evidence classification, picked in the UI before files are dropped.
/// A record keeps the category it was dropped under; later selector
/// changes do not follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Land,
    Medical,
    Police,
    Photos,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Land,
        Category::Medical,
        Category::Police,
        Category::Photos,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Land => "Land Records",
            Category::Medical => "Medical Reports",
            Category::Police => "Police Complaint",
            Category::Photos => "Photos/Videos",
        }
    }

    pub fn accent_hex(&self) -> &'static str {
        match self {
            Category::Land => "#1E3A5F",
            Category::Medical => "#10B981",
            Category::Police => "#DC2626",
            Category::Photos => "#F59E0B",
        }
    }
}

/// A raw file handle as produced by the picker or the drop target:
/// name, byte size and MIME type, nothing else.
#[derive(Debug, Clone)]
pub struct RawFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

/// One tracked upload entry. `progress` only ever moves toward 100;
/// once `completed` is set, neither field changes again.
#[derive(Debug, Clone, Serialize)]
pub struct UploadRecord {
    pub id: RecordId,
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub category: Category,
    pub progress: f32,
    pub completed: bool,
}

impl UploadRecord {
    pub fn new(file: RawFile, category: Category) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: file.name,
            size_bytes: file.size_bytes,
            mime_type: file.mime_type,
            category,
            progress: 0.0,
            completed: false,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Updates emitted by the per-record transfer tasks.
#[derive(Debug, Clone)]
pub enum UploadEvent {
    Progress { id: RecordId, progress: f32 },
    Completed { id: RecordId },
}

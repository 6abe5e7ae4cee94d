//! Upload fixtures used by the operational run: a one-page PDF, a small red PNG stored as
//! `.jpg`, and a placeholder video.

use tgram_core::{Disk, Result};
use tracing::info;

pub const FIXTURE_DIRS: [&str; 3] = ["images", "documents", "videos"];
pub const TEST_PDF: &str = "documents/test.pdf";
pub const TEST_IMAGE: &str = "images/test.jpg";
pub const TEST_VIDEO: &str = "videos/test.mp4";

const PDF_CONTENT: &str = "%PDF-1.0\n1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n\
2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n\
3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 595 842] /Contents 4 0 R >>\nendobj\n\
4 0 obj\n<< /Length 44 >>\nstream\nBT /F1 12 Tf 100 700 Td (Test PDF File) Tj ET\nendstream\nendobj\n\
xref\n0 5\n0000000000 65535 f \n0000000010 00000 n \n0000000065 00000 n \n0000000110 00000 n \n\
0000000179 00000 n \ntrailer\n<< /Size 5 /Root 1 0 R >>\nstartxref\n229\n%%EOF";

/// 8x8 solid red PNG.
const PNG_CONTENT: [u8; 74] = [
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x08, 0x08, 0x02, 0x00, 0x00, 0x00, 0x4b, 0x6d, 0x29,
    0xdc, 0x00, 0x00, 0x00, 0x11, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0xf8, 0xcf, 0xc0, 0x80,
    0x15, 0x31, 0x0c, 0x2d, 0x09, 0x00, 0x28, 0xff, 0x3f, 0xc1, 0xce, 0x77, 0xc8, 0x4f, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

fn video_content() -> Vec<u8> {
    "Fake MP4 content".repeat(1000).into_bytes()
}

/// Creates the fixture directories and writes each fixture that does not exist yet.
/// Returns the fixture paths (relative to `disk`).
pub fn create_test_files(disk: &Disk) -> Result<Vec<&'static str>> {
    for dir in FIXTURE_DIRS {
        disk.make_directory(dir)?;
    }
    if !disk.exists(TEST_PDF) {
        disk.put(TEST_PDF, PDF_CONTENT)?;
    }
    if !disk.exists(TEST_IMAGE) {
        disk.put(TEST_IMAGE, PNG_CONTENT)?;
    }
    if !disk.exists(TEST_VIDEO) {
        disk.put(TEST_VIDEO, video_content())?;
    }
    info!(root = %disk.root().display(), "Test files created or kept");
    Ok(vec![TEST_PDF, TEST_IMAGE, TEST_VIDEO])
}

/// Deletes the fixture directories with everything in them.
pub fn clean_test_files(disk: &Disk) -> Result<()> {
    for dir in FIXTURE_DIRS {
        disk.delete_directory(dir)?;
    }
    info!(root = %disk.root().display(), "Test files cleaned");
    Ok(())
}

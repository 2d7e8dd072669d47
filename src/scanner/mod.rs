use crate::error::{ClassifierError, Result};
use image::ImageFormat;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 送信対象の画像ファイル（内容読込済み）
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

const IMAGE_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::Bmp,
    ImageFormat::WebP,
];

/// 拡張子から画像形式を判定（ブラウザの accept="image/*" 相当）
pub fn image_format(path: &Path) -> Option<ImageFormat> {
    ImageFormat::from_path(path)
        .ok()
        .filter(|format| IMAGE_FORMATS.contains(format))
}

pub fn is_image_path(path: &Path) -> bool {
    image_format(path).is_some()
}

/// フォルダ内の画像パスを列挙（ファイル名順）
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(ClassifierError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut images: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_image_path(path))
        .collect();

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));

    Ok(images)
}

/// 画像ファイルを読み込む
///
/// MIMEタイプは内容から判定し、判定できなければ拡張子から決める。
pub fn load_image(path: &Path) -> Result<ImageFile> {
    if !path.is_file() {
        return Err(ClassifierError::FileNotFound(path.display().to_string()));
    }

    let format = image_format(path)
        .ok_or_else(|| ClassifierError::NotAnImage(path.display().to_string()))?;

    let bytes = std::fs::read(path)?;
    let mime_type = image::guess_format(&bytes)
        .ok()
        .filter(|sniffed| IMAGE_FORMATS.contains(sniffed))
        .unwrap_or(format)
        .to_mime_type();

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ImageFile {
        path: path.to_path_buf(),
        file_name,
        mime_type,
        bytes,
    })
}

/// 引数のパス（ファイルまたはフォルダ）から対象画像を集める
pub fn collect_inputs(input: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if input.is_dir() {
        let images = scan_folder(input, recursive)?;
        if images.is_empty() {
            return Err(ClassifierError::NoImagesFound(input.display().to_string()));
        }
        Ok(images)
    } else if input.is_file() {
        if !is_image_path(input) {
            return Err(ClassifierError::NotAnImage(input.display().to_string()));
        }
        Ok(vec![input.to_path_buf()])
    } else {
        Err(ClassifierError::FileNotFound(input.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_is_image_path() {
        assert!(is_image_path(Path::new("brain1.png")));
        assert!(is_image_path(Path::new("BRAIN.JPG")));
        assert!(is_image_path(Path::new("scan.jpeg")));
        assert!(is_image_path(Path::new("scan.webp")));
        assert!(!is_image_path(Path::new("notes.txt")));
        assert!(!is_image_path(Path::new("report.pdf")));
        assert!(!is_image_path(Path::new("no_extension")));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), false);
        assert!(matches!(result, Err(ClassifierError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_filters_and_sorts() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("c.png")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("a.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("b.JPEG")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("readme.txt")).unwrap().write_all(b"text").unwrap();

        let result = scan_folder(dir.path(), false).unwrap();
        let names: Vec<_> = result
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.JPEG", "c.png"]);
    }

    #[test]
    fn test_scan_folder_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("top.png")).unwrap();
        File::create(dir.path().join("sub").join("nested.png")).unwrap();

        assert_eq!(scan_folder(dir.path(), false).unwrap().len(), 1);
        assert_eq!(scan_folder(dir.path(), true).unwrap().len(), 2);
    }

    #[test]
    fn test_load_image_sniffs_mime_type() {
        let dir = tempdir().unwrap();
        // 拡張子はjpgだが中身はPNG
        let path = dir.path().join("mislabeled.jpg");
        fs::write(&path, PNG_MAGIC).unwrap();

        let image = load_image(&path).unwrap();
        assert_eq!(image.file_name, "mislabeled.jpg");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.bytes, PNG_MAGIC);
    }

    #[test]
    fn test_load_image_falls_back_to_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scan.jpeg");
        fs::write(&path, b"not really an image").unwrap();

        assert_eq!(load_image(&path).unwrap().mime_type, "image/jpeg");
    }

    #[test]
    fn test_load_image_errors() {
        let dir = tempdir().unwrap();
        let text = dir.path().join("notes.txt");
        fs::write(&text, b"hello").unwrap();

        assert!(matches!(load_image(&text), Err(ClassifierError::NotAnImage(_))));
        assert!(matches!(
            load_image(&dir.path().join("missing.png")),
            Err(ClassifierError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_collect_inputs() {
        let dir = tempdir().unwrap();
        let image = dir.path().join("brain1.png");
        File::create(&image).unwrap();

        assert_eq!(collect_inputs(&image, false).unwrap(), vec![image.clone()]);
        assert_eq!(collect_inputs(dir.path(), false).unwrap().len(), 1);

        let empty = tempdir().unwrap();
        assert!(matches!(
            collect_inputs(empty.path(), false),
            Err(ClassifierError::NoImagesFound(_))
        ));
        assert!(matches!(
            collect_inputs(&dir.path().join("gone.png"), false),
            Err(ClassifierError::FileNotFound(_))
        ));
    }
}

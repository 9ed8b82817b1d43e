use std::{fmt, path::Path};

use mime::Mime;

use crate::domain::error::DomainError;

/// Image chosen in the profile photo picker. Lives in memory only.
#[derive(Clone, PartialEq)]
pub struct ProfileImage {
    bytes: Vec<u8>,
    file_name: String,
    mime: Mime,
}

impl ProfileImage {
    pub fn new(bytes: Vec<u8>, file_name: impl Into<String>, mime: Mime) -> Result<Self, DomainError> {
        if mime.type_() != mime::IMAGE {
            return Err(DomainError::InvalidImage(mime.to_string()));
        }
        Ok(Self {
            bytes,
            file_name: file_name.into(),
            mime,
        })
    }

    /// Build from a file name, picking the media type from its extension
    pub fn from_file_name(bytes: Vec<u8>, file_name: impl Into<String>) -> Result<Self, DomainError> {
        let file_name = file_name.into();
        let mime = mime_from_extension(&file_name)?;
        Self::new(bytes, file_name, mime)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
    pub fn mime(&self) -> &Mime {
        &self.mime
    }

    /// Extension used when the image is written somewhere
    pub fn extension(&self) -> &str {
        match self.mime.subtype().as_str() {
            "jpeg" => "jpg",
            other => other,
        }
    }
}

impl fmt::Debug for ProfileImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileImage")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn mime_from_extension(file_name: &str) -> Result<Mime, DomainError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let mime = match extension.as_str() {
        "png" => mime::IMAGE_PNG,
        "jpg" | "jpeg" => mime::IMAGE_JPEG,
        "gif" => mime::IMAGE_GIF,
        "bmp" => mime::IMAGE_BMP,
        "svg" => mime::IMAGE_SVG,
        "webp" | "avif" | "heic" => format!("image/{}", extension)
            .parse::<Mime>()
            .map_err(|_| DomainError::InvalidImage(extension.clone()))?,
        _ => return Err(DomainError::InvalidImage(file_name.to_string())),
    };
    Ok(mime)
}

/// Locally generated reference to a preview of a [`ProfileImage`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewUrl(String);

impl PreviewUrl {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("me.png", "image/png")]
    #[case("ME.JPG", "image/jpeg")]
    #[case("avatar.webp", "image/webp")]
    fn test_mime_from_extension_positive(#[case] name: &str, #[case] expected: &str) {
        let image = ProfileImage::from_file_name(vec![1, 2, 3], name).unwrap();
        assert_eq!(image.mime().essence_str(), expected);
    }

    #[rstest]
    #[case("notes.txt")]
    #[case("no_extension")]
    fn test_non_image_file_negative(#[case] name: &str) {
        assert!(matches!(
            ProfileImage::from_file_name(vec![], name),
            Err(DomainError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_non_image_mime_negative() {
        let result = ProfileImage::new(vec![], "a.pdf", mime::APPLICATION_PDF);
        assert!(matches!(result, Err(DomainError::InvalidImage(_))));
    }
}

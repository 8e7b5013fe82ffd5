use crate::intake::ImageSource;

const SAMPLE_URLS: [&str; 4] = [
    "https://images.unsplash.com/photo-1426604966848-d7adac402bff?w=400&h=300&fit=crop",
    "https://images.unsplash.com/photo-1518495973542-4542c06a5843?w=400&h=300&fit=crop",
    "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=400&h=300&fit=crop",
    "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?w=400&h=300&fit=crop",
];

/// A bundled INSAT-style frame served from a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleImage {
    pub name: String,
    pub url: String,
}

impl ImageSource for SampleImage {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        "image/jpeg".to_string()
    }
}

pub fn sample_images() -> Vec<SampleImage> {
    SAMPLE_URLS
        .iter()
        .enumerate()
        .map(|(i, url)| SampleImage {
            name: format!("sample_insat_{}.jpg", i + 1),
            url: url.to_string(),
        })
        .collect()
}

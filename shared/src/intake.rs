use log::{debug, warn};
use thiserror::Error;

use crate::config::ConfigError;

/// Anything the intake surface can receive: a picked file, a dropped file,
/// or a bundled sample.
pub trait ImageSource {
    fn name(&self) -> String;
    fn mime_type(&self) -> String;

    fn is_image(&self) -> bool {
        self.mime_type().starts_with("image/")
    }
}

/// Closed range `[min, max]` on the number of images in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountBounds {
    min: usize,
    max: usize,
}

impl Default for CountBounds {
    fn default() -> Self {
        Self { min: 4, max: 6 }
    }
}

impl CountBounds {
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min == 0 || min > max {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("expected {min}-{max} images, got {found}")]
    CountOutOfRange { found: usize, min: usize, max: usize },
}

/// An accepted image paired with the locator renderers display.
///
/// The preview is fixed at construction; there is no setter.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewedImage<I, P> {
    image: I,
    preview: P,
}

impl<I, P> PreviewedImage<I, P> {
    pub fn image(&self) -> &I {
        &self.image
    }

    pub fn preview(&self) -> &P {
        &self.preview
    }
}

/// Ordered, validated set of input frames.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadBatch<I, P> {
    items: Vec<PreviewedImage<I, P>>,
}

impl<I, P> UploadBatch<I, P> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PreviewedImage<I, P>> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PreviewedImage<I, P>> {
        self.items.iter()
    }
}

impl<'a, I, P> IntoIterator for &'a UploadBatch<I, P> {
    type Item = &'a PreviewedImage<I, P>;
    type IntoIter = std::slice::Iter<'a, PreviewedImage<I, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Filters `candidates` to images, checks the count against `bounds` and,
/// only if it fits, derives one preview per image with `bind`.
///
/// Order is preserved. A rejected submission never calls `bind`.
pub fn intake<I, P, B>(
    candidates: Vec<I>,
    bounds: CountBounds,
    mut bind: B,
) -> Result<UploadBatch<I, P>, IntakeError>
where
    I: ImageSource,
    B: FnMut(&I) -> P,
{
    let total = candidates.len();
    let images: Vec<I> = candidates
        .into_iter()
        .filter(|candidate| {
            let keep = candidate.is_image();
            if !keep {
                warn!("Skipping non-image file: {}", candidate.name());
            }
            keep
        })
        .collect();

    if !bounds.contains(images.len()) {
        return Err(IntakeError::CountOutOfRange {
            found: images.len(),
            min: bounds.min(),
            max: bounds.max(),
        });
    }

    debug!("Intake accepted {} of {} candidates", images.len(), total);

    let items = images
        .into_iter()
        .map(|image| {
            let preview = bind(&image);
            PreviewedImage { image, preview }
        })
        .collect();

    Ok(UploadBatch { items })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct FakeFile {
        pub name: String,
        pub mime: String,
    }

    impl FakeFile {
        pub fn image(name: &str) -> Self {
            Self { name: name.into(), mime: "image/png".into() }
        }

        pub fn other(name: &str) -> Self {
            Self { name: name.into(), mime: "application/pdf".into() }
        }
    }

    impl ImageSource for FakeFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn mime_type(&self) -> String {
            self.mime.clone()
        }
    }

    pub(crate) fn images(count: usize) -> Vec<FakeFile> {
        (0..count).map(|i| FakeFile::image(&format!("frame_{i}.png"))).collect()
    }

    fn default_bounds() -> CountBounds {
        CountBounds::new(4, 6).unwrap()
    }

    #[test]
    fn out_of_range_counts_reject_without_binding() {
        for count in [0, 1, 3, 7, 12] {
            let mut bound = 0;
            let result = intake(images(count), default_bounds(), |f: &FakeFile| {
                bound += 1;
                f.name.clone()
            });
            assert_eq!(
                result,
                Err(IntakeError::CountOutOfRange { found: count, min: 4, max: 6 })
            );
            assert_eq!(bound, 0, "no preview may be derived for a rejected batch");
        }
    }

    #[test]
    fn in_range_counts_preserve_order_and_length() {
        for count in 4..=6 {
            let files = images(count);
            let batch = intake(files.clone(), default_bounds(), |f: &FakeFile| {
                format!("blob:{}", f.name)
            })
            .unwrap();

            assert_eq!(batch.len(), count);
            let names: Vec<_> = batch.iter().map(|item| item.image().name.clone()).collect();
            let expected: Vec<_> = files.iter().map(|f| f.name.clone()).collect();
            assert_eq!(names, expected);
        }
    }

    #[test]
    fn non_images_do_not_count_toward_bounds() {
        let mut files = images(3);
        files.insert(1, FakeFile::other("notes.pdf"));
        files.push(FakeFile::other("readme.txt"));

        let result = intake(files, default_bounds(), |f: &FakeFile| f.name.clone());
        assert_eq!(result, Err(IntakeError::CountOutOfRange { found: 3, min: 4, max: 6 }));

        let mut files = images(4);
        files.insert(2, FakeFile::other("notes.pdf"));
        let batch = intake(files, default_bounds(), |f: &FakeFile| f.name.clone()).unwrap();
        assert_eq!(batch.len(), 4);
        assert!(batch.iter().all(|item| item.image().is_image()));
    }

    #[test]
    fn each_image_gets_exactly_one_stable_preview() {
        let mut calls = Vec::new();
        let batch = intake(images(5), default_bounds(), |f: &FakeFile| {
            calls.push(f.name.clone());
            format!("blob:{}", calls.len())
        })
        .unwrap();

        assert_eq!(calls.len(), 5);
        for (i, item) in batch.iter().enumerate() {
            let first = item.preview().clone();
            assert_eq!(item.preview(), &first);
            assert_eq!(first, format!("blob:{}", i + 1));
        }
    }

    #[test]
    fn bounds_reject_zero_and_inverted_ranges() {
        assert!(CountBounds::new(0, 3).is_err());
        assert!(CountBounds::new(5, 4).is_err());
        let single = CountBounds::new(2, 2).unwrap();
        assert!(single.contains(2));
        assert!(!single.contains(1));
        assert!(!single.contains(3));
    }
}

//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use chanoffset_core::{DynImage, Sample};
use chanoffset_io::ImageFormat;
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from environment variable or string
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "offset")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        // Ensure directories exist
        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta || diff.is_nan() {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two images for exact equality
    pub fn compare_images(&mut self, expected: &DynImage, actual: &DynImage) -> bool {
        self.compare_images_delta(expected, actual, 0.0)
    }

    /// Compare two images sample by sample
    ///
    /// Bounds, components and encoding must match; every sample pair may
    /// differ by at most `delta` (in native units).
    pub fn compare_images_delta(
        &mut self,
        expected: &DynImage,
        actual: &DynImage,
        delta: f64,
    ) -> bool {
        self.index += 1;

        let Some((diff, at)) = max_difference(expected, actual) else {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - layout mismatch \
                 ({:?} {:?} {:?} vs {:?} {:?} {:?})",
                self.test_name,
                self.index,
                expected.bounds(),
                expected.components(),
                expected.depth(),
                actual.bounds(),
                actual.components(),
                actual.depth()
            );
            self.fail(msg);
            return false;
        };

        if diff > delta {
            let n = expected.components().count();
            let width = expected.bounds().width() as usize;
            let pixel = at / n;
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - sample {} of pixel \
                 ({}, {}) differs by {} (allowed {})",
                self.test_name,
                self.index,
                at % n,
                expected.bounds().x1 + (pixel % width) as i32,
                expected.bounds().y1 + (pixel / width) as i32,
                diff,
                delta
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Write an image to file and check against golden file
    pub fn write_image_and_check(&mut self, image: &DynImage, format: ImageFormat) -> TestResult<()> {
        self.index += 1;

        let local_path = format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            format.extension()
        );

        chanoffset_io::write_image(image, &local_path, format).map_err(|e| {
            TestError::ImageWrite {
                path: local_path.clone(),
                message: e.to_string(),
            }
        })?;

        self.check_file(&local_path)
    }

    /// Check a file against its golden counterpart
    ///
    /// In generate mode, copies the file to golden.
    /// In compare mode, compares with golden file if one exists.
    /// In display mode, does nothing.
    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                // Goldens are generated on demand; a fresh checkout has none
                if !Path::new(&golden_path).exists() {
                    eprintln!(
                        "Note in {}_reg, index {}: golden file not found: {}",
                        self.test_name, self.index, golden_path
                    );
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                if local_data != golden_data && !same_image_files(local_path, &golden_path) {
                    let msg = format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name, self.index, local_path, golden_path
                    );
                    self.fail(msg);
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Decode two files and compare their pixels
fn same_image_files(path1: &str, path2: &str) -> bool {
    match (
        chanoffset_io::read_image(path1),
        chanoffset_io::read_image(path2),
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Largest absolute sample difference and the sample index where it occurs.
///
/// `None` if the two images do not share bounds, components and encoding.
fn max_difference(a: &DynImage, b: &DynImage) -> Option<(f64, usize)> {
    if a.bounds() != b.bounds() || a.components() != b.components() {
        return None;
    }
    match (a, b) {
        (DynImage::U8(a), DynImage::U8(b)) => Some(max_sample_diff(a.data(), b.data())),
        (DynImage::U16(a), DynImage::U16(b)) => Some(max_sample_diff(a.data(), b.data())),
        (DynImage::F32(a), DynImage::F32(b)) => Some(max_sample_diff(a.data(), b.data())),
        _ => None,
    }
}

fn max_sample_diff<T: Sample>(a: &[T], b: &[T]) -> (f64, usize) {
    a.iter()
        .zip(b)
        .enumerate()
        .fold((0.0, 0), |(best, at), (i, (&x, &y))| {
            let d = (x.to_f32() as f64 - y.to_f32() as f64).abs();
            // NaN never equals anything, including itself
            let d = if d.is_nan() && x != y { f64::INFINITY } else { d };
            if d > best { (d, i) } else { (best, at) }
        })
}

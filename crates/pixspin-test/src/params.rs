//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use pixspin_core::{Image, Palette};
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare computed values and images (default)
    #[default]
    Compare,
    /// Compare, and also write every checked image to `tests/regout`
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: its name, the index of the
/// current check, the mode and every failure recorded so far. Checks
/// never panic; call [`RegParams::cleanup`] at the end and assert on it.
pub struct RegParams {
    /// Name of the test (e.g., "rotate")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
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

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Record a boolean check
    pub fn compare_bool(&mut self, expected: bool, actual: bool) -> bool {
        self.compare_values(
            if expected { 1.0 } else { 0.0 },
            if actual { 1.0 } else { 0.0 },
            0.0,
        )
    }

    /// Compare two images for exact equality
    ///
    /// On mismatch the failure message carries both images as art literals.
    pub fn compare_pix(&mut self, expected: &Image, actual: &Image) -> bool {
        self.index += 1;

        if !expected.sizes_equal(actual) {
            let msg = format!(
                "Failure in {}_reg: pix comparison for index {} - dimension mismatch \
                 ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            );
            self.record_failure(msg);
            return false;
        }

        for y in 0..expected.height() {
            for x in 0..expected.width() {
                if expected.get_pixel(x, y) != actual.get_pixel(x, y) {
                    let msg = format!(
                        "Failure in {}_reg: pix comparison for index {} - pixel mismatch at ({}, {})\n\
                         expected:\n{}\nactual:\n{}",
                        self.test_name,
                        self.index,
                        x,
                        y,
                        expected.to_art(),
                        actual.to_art()
                    );
                    self.record_failure(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two byte strings
    pub fn compare_strings(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Write an image for visual inspection
    ///
    /// In display mode the image is written as a palette PNG to
    /// `tests/regout/<name>.<index>.png` and the path is returned. In
    /// compare mode nothing is written.
    pub fn write_pix(&mut self, image: &Image) -> TestResult<Option<String>> {
        self.index += 1;
        if !self.display() {
            return Ok(None);
        }

        fs::create_dir_all(regout_dir())?;
        let path = format!("{}/{}.{:02}.png", regout_dir(), self.test_name, self.index);
        pixspin_io::write_image(&path, image, &Palette::arcade()).map_err(|e| {
            TestError::ImageWrite {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;
        eprintln!("Wrote: {}", path);
        Ok(Some(path))
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

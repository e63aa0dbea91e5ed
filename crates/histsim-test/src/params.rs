//! Regression test parameters and checks

use histsim_core::{Channel, DistanceSet};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Check values and report failures (default)
    #[default]
    Compare,
    /// Check values and also print every checked value
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check, the mode and
/// every failure recorded so far. Checks never panic; call
/// [`cleanup`](Self::cleanup) at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "heuristic")
    pub test_name: String,
    /// Current check index (incremented before each check)
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
    /// The mode is read from the `REGTEST_MODE` environment variable.
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

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if self.display() {
            eprintln!("[{:02}] expected = {}, actual = {}", self.index, expected, actual);
        }

        // NaN never compares within delta
        if diff <= delta {
            return true;
        }

        let msg = format!(
            "Failure in {}_reg: value comparison for index {}\n\
             difference = {} but allowed delta = {}\n\
             expected = {}, actual = {}",
            self.test_name, self.index, diff, delta, expected, actual
        );
        self.fail(msg);
        false
    }

    /// Compare a distance set against expected per-channel values
    ///
    /// Fails if the channel sets differ or any channel is off by more
    /// than `delta`. Counts as a single check.
    pub fn compare_distance_set(
        &mut self,
        expected: &[(Channel, f64)],
        actual: &DistanceSet,
        delta: f64,
    ) -> bool {
        self.index += 1;

        if self.display() {
            for (channel, value) in actual.iter() {
                eprintln!("[{:02}] {} = {}", self.index, channel, value);
            }
        }

        if expected.len() != actual.len() {
            let msg = format!(
                "Failure in {}_reg: distance set for index {} has channels {:?}, expected {}",
                self.test_name,
                self.index,
                actual.channels(),
                expected.len()
            );
            self.fail(msg);
            return false;
        }

        for &(channel, want) in expected {
            let ok = match actual.get(channel) {
                Some(&got) => (want - got).abs() <= delta,
                None => false,
            };
            if !ok {
                let msg = format!(
                    "Failure in {}_reg: distance set for index {}, channel {}\n\
                     expected = {}, actual = {:?}, allowed delta = {}",
                    self.test_name,
                    self.index,
                    channel,
                    want,
                    actual.get(channel),
                    delta
                );
                self.fail(msg);
                return false;
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
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

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

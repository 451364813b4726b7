use std::process::Command;

pub struct CompareOutput {
    output: std::process::Output,
}

impl CompareOutput {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    #[track_caller]
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success(),
            "Expected command to succeed, got {:#?}",
            self.output
        );
        self
    }

    #[track_caller]
    pub fn assert_failure(&self) -> &Self {
        assert!(
            !self.success(),
            "Expected command to fail, got {:#?}",
            self.output
        );
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }
}

/// Run `mvn-compare` with a clean environment, so colors and log filters
/// from the caller do not leak into the output.
pub fn mvn_compare(args: &[&str]) -> CompareOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_mvn-compare"))
        .env_clear()
        .args(args)
        .output()
        .expect("Failed to execute mvn-compare command");
    CompareOutput { output }
}

use std::fmt::Display;

/// Human-facing progress lines on stdout. Diagnostics go through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn step(&self, message: impl Display) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    pub fn success(&self, message: impl Display) {
        self.step(format_args!("✓ {}", message));
    }

    pub fn failure(&self, message: impl Display) {
        self.step(format_args!("❌ {}", message));
    }
}

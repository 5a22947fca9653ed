use std::io::Write;

/// Abstract the host environment to enable testing
pub trait Host: Send + Sync {
    // where to send rendered tables (e.g., stdout)
    fn output(&mut self) -> impl Write;

    // where to send diagnostics (e.g., stderr)
    fn error(&mut self) -> impl Write;

    /// Terminate the process (although in a test environment this might just set a flag and return).
    fn exit(&mut self, code: i32);
}

/// Test host that captures output to in-memory buffers
#[cfg(test)]
pub struct TestHost {
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
    pub exit_code: Option<i32>,
}

#[cfg(test)]
impl TestHost {
    pub const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    pub fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

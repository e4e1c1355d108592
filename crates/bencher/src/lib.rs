//! Inputs shared by the micro-message benchmarks.
//!
//! Every input carries a [`SizeClass`]; benches register it as
//! `<size class>/<name>` so reports of different inputs line up by size.

use criterion::{BenchmarkId, Throughput};

/// Rough length bucket of a benchmark input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SizeClass {
    /// a single header name or short path
    Small,
    /// a realistic request target or JSON body
    Medium,
    /// kilobytes of body
    Large,
}

impl SizeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct BenchInput {
    name: &'static str,
    size_class: SizeClass,
    content: &'static str,
}

impl BenchInput {
    pub const fn small(name: &'static str, content: &'static str) -> Self {
        Self { name, size_class: SizeClass::Small, content }
    }

    pub const fn medium(name: &'static str, content: &'static str) -> Self {
        Self { name, size_class: SizeClass::Medium, content }
    }

    pub const fn large(name: &'static str, content: &'static str) -> Self {
        Self { name, size_class: SizeClass::Large, content }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn size_class(&self) -> SizeClass {
        self.size_class
    }

    /// `<size class>/<name>`
    pub fn label(&self) -> String {
        format!("{}/{}", self.size_class.as_str(), self.name)
    }

    pub fn id(&self) -> BenchmarkId {
        BenchmarkId::new(self.size_class.as_str(), self.name)
    }

    pub fn throughput(&self) -> Throughput {
        Throughput::Bytes(self.content.len() as u64)
    }
}

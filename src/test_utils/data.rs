use std::fs;

use crate::error::{IOError, ParseError, Result};

pub struct TestData {
    pub small_xml: String,
    pub catalog_xml: String,
}

impl TestData {
    pub fn load() -> Result<Self> {
        Ok(Self {
            small_xml: read_test_file("tests/input/small.xml")?,
            catalog_xml: read_test_file("tests/input/catalog.xml")?,
        })
    }
}

pub fn read_test_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        ParseError::from(IOError::ReadError(format!("Failed to read {}: {}", path, e)))
    })
}

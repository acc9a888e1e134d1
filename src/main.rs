//! # dupe-scan CLI
//!
//! Command-line interface for the duplicate image scanner.
//!
//! ## Usage
//! ```bash
//! dupe-scan scan ~/Photos --threshold 25
//! dupe-scan scan ~/Photos --verbose --output json
//! ```

use image_dupe_scan::Result;

fn main() -> Result<()> {
    image_dupe_scan::cli::run()
}

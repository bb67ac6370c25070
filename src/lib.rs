//! A python extension that exports exactly one integer, `extdemo.val`.
//!
//! Packaging tools use it to check that a crate with compiled code gets built, installed and
//! imported correctly: after the build, `import extdemo; extdemo.val` has to give back the value
//! that was configured for the build.
//!
//! # Build configuration
//!
//! The value is fixed when the crate is compiled, there is no way to change it at runtime.
//!
//! - `EXTDEMO` environment variable: the exported value. The build fails if it is missing or not
//!   an integer, unless `two` is enabled.
//!
//! - two: Export 2, ignoring `EXTDEMO`.
//!
//! - abi3: Build against the stable abi (cpython 3.8+) instead of the version specific abi of
//!   the interpreter pyo3 finds.

#![deny(missing_docs)]

use pyo3::prelude::*;
use tracing::debug;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/extdemo_config.rs"));
}


pub use generated::{TARGET_ABI, VAL};

/// Name under which the value is exported
pub const ATTRIBUTE: &str = "val";

// No doc comment: pyo3 would turn it into `extdemo.__doc__`.
// `setattr` rather than `add`, which would also create `__all__`.
#[pymodule]
fn extdemo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    debug!(val = VAL, abi = TARGET_ABI, "Initializing extdemo");
    m.setattr(ATTRIBUTE, VAL)?;
    Ok(())
}

//! Python bindings: `jsmin.minify(source, trim=False)`.

use pyo3::{create_exception, exceptions::PyValueError, prelude::*};

create_exception!(
    jsmin,
    MinifyError,
    PyValueError,
    "Raised when a comment, string or regular expression literal is never terminated."
);

/// Minify JavaScript source text.
///
/// Raises `MinifyError` on malformed input. The GIL is released while the
/// minifier runs.
#[pyfunction]
#[pyo3(signature = (source, trim = false))]
pub fn minify(py: Python<'_>, source: &str, trim: bool) -> PyResult<String> {
    let options = ::jsmin::MinifyOptions {
        trim,
        ..Default::default()
    };
    py.allow_threads(|| ::jsmin::minify_with(source, options))
        .map_err(|err| MinifyError::new_err(err.to_string()))
}

#[pymodule]
#[pyo3(name = "jsmin")]
pub fn jsmin_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(minify, m)?)?;
    m.add("MinifyError", m.py().get_type::<MinifyError>())?;
    Ok(())
}

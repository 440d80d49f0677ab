use jsmin_py::{MinifyError, jsmin_module, minify};
use pyo3::{
    exceptions::PyValueError,
    prelude::*,
    types::{IntoPyDict, PyModule},
};

fn module(py: Python<'_>) -> Bound<'_, PyModule> {
    let m = PyModule::new(py, "jsmin").unwrap();
    jsmin_module(&m).unwrap();
    m
}

#[test]
fn minify_from_rust() {
    Python::with_gil(|py| {
        assert_eq!(minify(py, "var  a = 1;\n", false).unwrap(), "\nvar a=1;");
        assert_eq!(minify(py, "var  a = 1;\n", true).unwrap(), "var a=1;");
    });
}

#[test]
fn minify_from_python() {
    Python::with_gil(|py| {
        let m = module(py);
        let f = m.getattr("minify").unwrap();

        let out: String = f.call1(("return\na // c\n",)).unwrap().extract().unwrap();
        assert_eq!(out, "\nreturn\na");

        let kwargs = [("trim", true)].into_py_dict(py).unwrap();
        let out: String = f
            .call(("return\na // c\n",), Some(&kwargs))
            .unwrap()
            .extract()
            .unwrap();
        assert_eq!(out, "return\na");
    });
}

#[test]
fn malformed_input_raises_minify_error() {
    Python::with_gil(|py| {
        let m = module(py);
        let err = m
            .getattr("minify")
            .unwrap()
            .call1(("x = 'open",))
            .unwrap_err();
        assert!(err.is_instance_of::<MinifyError>(py));
        assert!(err.is_instance_of::<PyValueError>(py));
        assert_eq!(
            err.value(py).to_string(),
            "unterminated string literal at 1:5"
        );
        assert!(m.getattr("MinifyError").is_ok());
    });
}

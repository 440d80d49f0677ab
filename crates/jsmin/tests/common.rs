#![allow(missing_docs, dead_code)]

pub const WIDGET: &str = r#"/* Widget helpers
 * (c) example */
'use strict';

var DIGITS = /^\d+$/;   // whole-number check
var sep = ", ";

function Widget(name, opts) {
    if (!(this instanceof Widget)) {
        return new Widget(name, opts);
    }
    this.name = name || "widget";
    this.size = opts && opts.size ? opts.size : 10;
}

Widget.prototype.render = function () {
    var parts = [this.name, 'size: ' + this.size];
    return parts.join(sep)
        .replace(/\s+/g, ' ');
};

var half = total / 2 / scale;
i++
j--
"#;

/// Statements whose meaning depends on the line breaks between them.
pub const ASI_HAZARDS: &str = "let a = b\n(c || d).run()\nlet e = f\n[1, 2].forEach(g)\nreturn\n{ ok: true }\nx\n++y\n";

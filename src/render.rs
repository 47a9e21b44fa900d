/*!
 * Diagnostic rendering of model values.
 *
 * Produces an indented, field-by-field dump of every attribute, recursively.
 * The output is meant for logs and debugging only: it is not a stable
 * serialization format and is not read back.
 */

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Indent width used by the `Display` implementations
pub const DEFAULT_INDENT: usize = 4;

/// Render `value` as indented JSON using `indent` spaces per level.
///
/// Non-finite times render as `null`. Falls back to a short placeholder
/// when the value cannot be serialized at all.
pub fn to_pretty_string<T: Serialize + ?Sized>(value: &T, indent: usize) -> String {
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);

    match value.serialize(&mut serializer) {
        Ok(()) => String::from_utf8(buffer).unwrap_or_else(|e| {
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }),
        Err(e) => format!("<unrenderable: {}>", e),
    }
}

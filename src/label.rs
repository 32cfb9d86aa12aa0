//! Group-label selection for `group_by` / `count_by`.

use crate::extract::{extract, label_of};
use serde_json::Value;

/// How to derive a group label from an element: a key path into the element,
/// or an arbitrary callback.
///
/// The selector is resolved once per element at the start of the grouping
/// operation; a `&str` converts into the key-path form, so
/// `group_by("dept")` and `group_by(Label::func(|v| …))` read the same way.
///
/// ```
/// use corral::{collect, json, Label};
///
/// let people = collect(json!([{"dept": "eng"}, {"dept": "ops"}]));
/// let by_path = people.group_by("dept");
/// let by_func = people.group_by(Label::func(|v| v["dept"].to_string()));
/// assert_eq!(by_path.len(), by_func.len());
/// ```
pub enum Label<'a> {
    /// Extract the label through the Key-Path Extractor (default `Null`).
    Path(&'a str),
    /// Compute the label with a callback.
    Func(Box<dyn Fn(&Value) -> String + 'a>),
}

impl<'a> Label<'a> {
    /// A callback-based label selector.
    pub fn func(f: impl Fn(&Value) -> String + 'a) -> Self {
        Label::Func(Box::new(f))
    }

    /// The label for one element.
    pub(crate) fn resolve(&self, element: &Value) -> String {
        match self {
            Label::Path(path) => label_of(&extract(path, element, &Value::Null)),
            Label::Func(f) => f(element),
        }
    }
}

impl<'a> From<&'a str> for Label<'a> {
    fn from(path: &'a str) -> Self {
        Label::Path(path)
    }
}

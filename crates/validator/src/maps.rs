//! Rule, message, and attribute maps.
//!
//! All three maps are insertion-ordered. Aggregation merges them
//! positionally: every key from both sides survives, and on a collision the
//! incoming value replaces the existing one while the key keeps its first
//! position.

use indexmap::IndexMap;

use crate::rule::Rule;

/// Field key → ordered rule descriptors.
pub type RuleSet = IndexMap<String, Vec<Rule>>;

/// `"<field key>.<rule name>"` → error message.
pub type MessageMap = IndexMap<String, String>;

/// Field key → display label used in `:attribute` interpolation.
pub type AttributeMap = IndexMap<String, String>;

/// Merges `from` into `into`, last write wins.
///
/// A rule list arriving for an existing key replaces the old list; it is
/// never appended to it.
///
/// ```
/// use indexmap::IndexMap;
/// use trellis_validator::maps::merge;
///
/// let mut into: IndexMap<String, String> = IndexMap::new();
/// into.insert("email".into(), "email".into());
/// into.insert("name".into(), "name".into());
///
/// let mut from = IndexMap::new();
/// from.insert("email".into(), "email address".into());
///
/// merge(&mut into, from);
/// assert_eq!(into["email"], "email address");
/// assert_eq!(into.get_index(0).unwrap().0, "email");
/// ```
pub fn merge<V>(into: &mut IndexMap<String, V>, from: IndexMap<String, V>) {
    for (key, value) in from {
        into.insert(key, value);
    }
}

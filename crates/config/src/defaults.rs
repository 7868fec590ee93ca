//! Layered defaulting of option bags

use statetree_core::functional::merged;
use statetree_core::types::{Dict, HostValue};

/// Fill `opts` in from `defaults_list`.
///
/// The default layers are merged first writer wins, so the earliest layer to
/// name a key decides its default. A key of `opts` then overrides the default
/// when it is defined and some layer declares it. Keys no layer declares are
/// dropped, which makes the default layers the schema of accepted options.
pub fn defaults<V: HostValue>(opts: &Dict<V>, defaults_list: &[&Dict<V>]) -> Dict<V> {
    let mut resolved = merged(defaults_list);
    for (key, slot) in resolved.iter_mut() {
        if let Some(value) = opts.get(key).filter(|value| value.is_defined()) {
            *slot = value.clone();
        }
    }

    let dropped = opts
        .keys()
        .filter(|key| !resolved.contains_key(*key))
        .count();
    if dropped > 0 {
        tracing::trace!(dropped, "ignoring options without a default");
    }
    resolved
}

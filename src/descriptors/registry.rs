// Model descriptor registry, backed end-to-end by `inventory`.
//
// Reference: examples/PeterGrace-chirp-rs/src/drivers/registry.rs declares
// `inventory` and a `register_radio_driver!` macro that feeds
// `inventory::submit!`, but `list_drivers`/`get_driver` themselves read
// from a separately populated `lazy_static! Mutex<HashMap>` that the macro
// never writes to. This registry closes that loop: `register_model!` is
// the only way to add an entry, and every lookup here walks
// `inventory::iter`.

use super::model::ModelDescriptor;

/// Register a model in the catalog. Call once per model at module scope.
#[macro_export]
macro_rules! register_model {
    ($descriptor:expr) => {
        inventory::submit! { $descriptor }
    };
}

pub fn all() -> impl Iterator<Item = &'static ModelDescriptor> {
    inventory::iter::<ModelDescriptor>()
}

pub fn find(vendor: &str, model: &str) -> Option<&'static ModelDescriptor> {
    all().find(|m| m.vendor.eq_ignore_ascii_case(vendor) && m.model.eq_ignore_ascii_case(model))
}

pub fn by_vendor() -> std::collections::BTreeMap<&'static str, Vec<&'static ModelDescriptor>> {
    let mut grouped: std::collections::BTreeMap<&'static str, Vec<&'static ModelDescriptor>> =
        std::collections::BTreeMap::new();
    for m in all() {
        grouped.entry(m.vendor).or_default().push(m);
    }
    for models in grouped.values_mut() {
        models.sort_by_key(|m| m.model);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_not_empty() {
        assert!(all().count() >= 3, "expected the built-in catalog entries to be registered");
    }

    #[test]
    fn find_is_case_insensitive() {
        let first = all().next().expect("catalog has entries");
        assert!(find(&first.vendor.to_lowercase(), &first.model.to_lowercase()).is_some());
    }
}
